use std::vec;

use log::trace;
use scanner::{Operator, OperatorKind, Token};

mod expr;
pub use expr::{BinaryOperator, Expr, UnaryOperator};

pub type Result<T> = std::result::Result<T, ParseError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("operator is missing an operand")]
    MissingOperand,
    #[error("unmatched `(` in expression")]
    UnmatchedParenthesis,
    #[error("expression is empty")]
    EmptyExpression,
}

/// What the operator stack holds: operators waiting for their operands, and
/// `(` markers that fence off everything pushed since the paren opened.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Pending {
    Operator(Operator),
    LeftParen,
}

/// Builds an [`Expr`] tree from a token sequence with two stacks: finished
/// subtrees on the operand stack, undecided operators on the pending stack.
/// An incoming operator first combines everything on the pending stack that
/// binds at least as tightly, which makes operators of equal precedence group
/// to the left.
#[derive(Debug)]
pub struct Parser {
    tokens: vec::IntoIter<Token>,
    operands: Vec<Expr>,
    pending: Vec<Pending>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens: tokens.into_iter(), operands: Vec::new(), pending: Vec::new() }
    }

    pub fn parse(mut self) -> Result<Expr> {
        while let Some(token) = self.tokens.next() {
            trace!("token {:?}, operands {:?}, pending {:?}", token, self.operands, self.pending);
            match token {
                Token::Number(n) => self.operands.push(Expr::Literal(n)),
                Token::Operator(operator) => {
                    while let Some(&Pending::Operator(top)) = self.pending.last() {
                        if top.precedence < operator.precedence {
                            break;
                        }
                        self.pending.pop();
                        self.combine(top)?;
                    }
                    self.pending.push(Pending::Operator(operator));
                }
                Token::LeftParen => self.pending.push(Pending::LeftParen),
                Token::RightParen => loop {
                    match self.pending.pop() {
                        Some(Pending::Operator(operator)) => self.combine(operator)?,
                        Some(Pending::LeftParen) => break,
                        // An extra `)` drained the whole stack. The original
                        // calculator resolved this to the literal -1 instead
                        // of an error; callers rely on getting a number back.
                        None => return Ok(Expr::Literal(-1.0)),
                    }
                },
                Token::End => break,
            }
        }

        while let Some(pending) = self.pending.pop() {
            match pending {
                Pending::Operator(operator) => self.combine(operator)?,
                Pending::LeftParen => return Err(ParseError::UnmatchedParenthesis),
            }
        }

        let root = self.operands.pop().ok_or(ParseError::EmptyExpression)?;
        if !self.operands.is_empty() {
            trace!("{} unused operands left on the stack", self.operands.len());
        }
        Ok(root)
    }

    /// Pops the operator's operands, builds the node and pushes it back onto
    /// the operand stack. Binary operators pop right first, then left;
    /// negation pops exactly one.
    fn combine(&mut self, operator: Operator) -> Result<()> {
        let node = match operator.kind {
            OperatorKind::Neg => {
                let operand = self.pop_operand()?;
                Expr::Unary { operator: UnaryOperator::Negate, operand: Box::new(operand) }
            }
            kind => {
                let right = self.pop_operand()?;
                let left = self.pop_operand()?;
                let operator = match kind {
                    OperatorKind::Add => BinaryOperator::Add,
                    OperatorKind::Sub => BinaryOperator::Subtract,
                    OperatorKind::Mul => BinaryOperator::Multiply,
                    OperatorKind::Div => BinaryOperator::Divide,
                    OperatorKind::Neg => unreachable!(),
                };
                Expr::Binary { left: Box::new(left), operator, right: Box::new(right) }
            }
        };

        self.operands.push(node);
        Ok(())
    }

    fn pop_operand(&mut self) -> Result<Expr> {
        self.operands.pop().ok_or(ParseError::MissingOperand)
    }
}
