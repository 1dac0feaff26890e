use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BinaryOperator {
    #[display(fmt = "+")]
    Add,
    #[display(fmt = "-")]
    Subtract,
    #[display(fmt = "*")]
    Multiply,
    #[display(fmt = "/")]
    Divide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum UnaryOperator {
    #[display(fmt = "-")]
    Negate,
}

/// An expression tree. Children are owned exclusively by their parent, so
/// dropping the root releases the whole tree.
#[derive(Debug, PartialEq)]
pub enum Expr {
    Literal(f64),
    Binary { left: Box<Expr>, operator: BinaryOperator, right: Box<Expr> },
    Unary { operator: UnaryOperator, operand: Box<Expr> },
}

impl From<f64> for Expr {
    fn from(n: f64) -> Self {
        Expr::Literal(n)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(n) => write!(f, "{}", n),
            Expr::Binary { left, operator, right } => {
                write!(f, "({} {} {})", operator, left, right)
            }
            Expr::Unary { operator, operand } => {
                write!(f, "({} {})", operator, operand)
            }
        }
    }
}
