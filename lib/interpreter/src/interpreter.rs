use parser::{BinaryOperator, Expr, ParseError, Parser, UnaryOperator};
use scanner::Scanner;

/// Reduces an expression tree to a number.
///
/// This is a pure fold: evaluating the same tree twice yields the same
/// number. Division by zero is not intercepted and produces an infinity or
/// NaN like any other float division.
pub fn evaluate(expr: &Expr) -> f64 {
    match expr {
        Expr::Literal(n) => *n,
        Expr::Binary { left, operator, right } => {
            let left = evaluate(left);
            let right = evaluate(right);
            match operator {
                BinaryOperator::Add => left + right,
                BinaryOperator::Subtract => left - right,
                BinaryOperator::Multiply => left * right,
                BinaryOperator::Divide => left / right,
            }
        }
        Expr::Unary { operator: UnaryOperator::Negate, operand } => -evaluate(operand),
    }
}

/// Runs the whole pipeline on one expression string: scan, parse, evaluate.
pub fn interpret(source: &str) -> Result<f64, ParseError> {
    let tokens = Scanner::new(source).scan_tokens();
    let expr = Parser::new(tokens).parse()?;
    Ok(evaluate(&expr))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn arithmetic() {
        assert_eq!(interpret("2+3*4"), Ok(14.0));
        assert_eq!(interpret("(2+3)*4"), Ok(20.0));
        assert_eq!(interpret("-3+5"), Ok(2.0));
        assert_eq!(interpret("10-2-3"), Ok(5.0));
        assert_eq!(interpret("2x3"), Ok(6.0));
        assert_eq!(interpret("3 + 4 x 2 / ( 1 - 5 )"), Ok(1.0));
    }

    #[test]
    fn division_by_zero_follows_float_semantics() {
        assert_eq!(interpret("1/0"), Ok(f64::INFINITY));
        assert_eq!(interpret("-1/0"), Ok(f64::NEG_INFINITY));
        assert!(interpret("0/0").unwrap().is_nan());
    }

    #[test]
    fn malformed_input_is_rejected_without_panicking() {
        assert_eq!(interpret("2+*3"), Err(ParseError::MissingOperand));
        assert_eq!(interpret("(2+3"), Err(ParseError::UnmatchedParenthesis));
        assert_eq!(interpret(""), Err(ParseError::EmptyExpression));
    }

    #[test]
    fn extra_close_paren_keeps_the_sentinel_result() {
        assert_eq!(interpret("2+3)"), Ok(-1.0));
    }

    #[test]
    fn re_evaluating_a_tree_is_deterministic() {
        let tokens = Scanner::new("2.5*(3-1/3)").scan_tokens();
        let expr = Parser::new(tokens).parse().unwrap();

        let first = evaluate(&expr);
        for _ in 0..10 {
            assert_eq!(evaluate(&expr), first);
        }
    }

    #[test]
    fn deeply_nested_parentheses() {
        let depth = 300;
        let source = format!("{}1{}", "(1+".repeat(depth), ")".repeat(depth));
        assert_eq!(interpret(&source), Ok(depth as f64 + 1.0));
    }
}
