use interpreter::interpret;
use parser::ParseError;
use pretty_assertions::assert_eq;

#[ctor::ctor]
fn init() {
    env_logger::init();
}

#[test]
fn evaluates_expressions() {
    for (source, expected) in [
        ("2+3*4", 14.0),
        ("(2+3)*4", 20.0),
        ("-3+5", 2.0),
        ("10-2-3", 5.0),
        ("2x3", 6.0),
        ("2*-3", -6.0),
        ("3 + 4 x 2 / ( 1 - 5 )", 1.0),
        ("1.5e1 + 5", 20.0),
        ("-(2+3)", -5.0),
        (".5x4", 2.0),
    ] {
        assert_eq!(interpret(source), Ok(expected), "{}", source);
    }
}

#[test]
fn skips_characters_outside_the_grammar() {
    assert_eq!(interpret("2 @# + $3!"), Ok(5.0));
}

#[test]
fn division_by_zero_prints_as_infinity_or_nan() {
    assert_eq!(format!("{}", interpret("1/0").unwrap()), "inf");
    assert_eq!(format!("{}", interpret("-1/0").unwrap()), "-inf");
    assert_eq!(format!("{}", interpret("0/0").unwrap()), "NaN");
}

#[test]
fn malformed_expressions_are_structured_errors() {
    assert_eq!(interpret("2+*3"), Err(ParseError::MissingOperand));
    assert_eq!(interpret("(2+3"), Err(ParseError::UnmatchedParenthesis));
    assert_eq!(interpret(""), Err(ParseError::EmptyExpression));
}

#[test]
fn unbalanced_close_paren_resolves_to_the_sentinel() {
    assert_eq!(interpret("2+3)"), Ok(-1.0));
}
