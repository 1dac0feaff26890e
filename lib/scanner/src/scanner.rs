use std::str::FromStr;

use cursor::Cursor;
use log::warn;

mod token;
pub use token::{Operator, OperatorKind, Token};

use OperatorKind::*;

fn is_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | 'x' | '/' | '(' | ')')
}

pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { cursor: Cursor::new(source), tokens: Vec::new() }
    }

    /// Scans the whole expression into a token sequence terminated by
    /// [`Token::End`].
    ///
    /// Scanning is total: a character that is neither part of a number nor in
    /// the operator set is consumed without producing a token.
    pub fn scan_tokens(mut self) -> Vec<Token> {
        while let Some(c) = self.cursor.peek() {
            if is_operator(c) {
                self.operator(c);
                self.cursor.next();
            } else if starts_number(c, self.cursor.peek_next()) {
                self.number();
            } else {
                self.cursor.next();
            }
        }

        self.tokens.push(Token::End);
        self.tokens
    }

    fn operator(&mut self, c: char) {
        let token = match c {
            '(' => Token::LeftParen,
            ')' => Token::RightParen,
            op => self.operator_kind(op).into(),
        };
        self.tokens.push(token);
    }

    fn operator_kind(&self, c: char) -> OperatorKind {
        match c {
            '+' => Add,
            '-' => {
                if self.minus_negates() {
                    Neg
                } else {
                    Sub
                }
            }
            '*' | 'x' => Mul,
            '/' => Div,
            c => {
                // Only reachable if this match and `is_operator` ever get out
                // of sync
                warn!("undefined operator `{c}`, defaulting to addition");
                Add
            }
        }
    }

    /// A `-` negates when the expression starts with it or when it follows
    /// another operator or an opening paren; otherwise it subtracts. The
    /// decision looks at the last token actually emitted, not at the
    /// preceding character: in `2 # - 3` the minus still subtracts.
    fn minus_negates(&self) -> bool {
        matches!(self.tokens.last(), None | Some(Token::Operator(_)) | Some(Token::LeftParen))
    }

    fn number(&mut self) {
        let start = self.cursor.clone();

        self.consume_digits();
        if self.cursor.peek() == Some('.') {
            self.cursor.next();
            self.consume_digits();
        }
        self.exponent();

        let literal = start.slice_until(&self.cursor);
        match f64::from_str(literal) {
            Ok(n) => self.tokens.push(Token::Number(n)),
            Err(_) => warn!("skipping unparseable number literal `{literal}`"),
        }
    }

    /// The exponent marker only belongs to the literal when digits follow it:
    /// `2e+3` is a single number, but `2e+x` scans as the number 2, a skipped
    /// `e`, and two operators.
    fn exponent(&mut self) {
        if !matches!(self.cursor.peek(), Some('e' | 'E')) {
            return;
        }

        let mut lookahead = self.cursor.clone();
        lookahead.next();
        if matches!(lookahead.peek(), Some('+' | '-')) {
            lookahead.next();
        }

        if lookahead.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.cursor = lookahead;
            self.consume_digits();
        }
    }

    fn consume_digits(&mut self) {
        while self.cursor.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.cursor.next();
        }
    }
}

/// A number starts at a digit, or at a `.` directly followed by one.
fn starts_number(c: char, next: Option<char>) -> bool {
    c.is_ascii_digit() || (c == '.' && next.is_some_and(|n| n.is_ascii_digit()))
}
