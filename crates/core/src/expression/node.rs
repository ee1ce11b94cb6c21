use std::fmt;

use crate::{DomainError, error::checked_pow};

use super::symbols::{Constant, MathFunction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    fn apply(self, lhs: f64, rhs: f64) -> Result<f64, DomainError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Sub => Ok(lhs - rhs),
            Self::Mul => Ok(lhs * rhs),
            Self::Div if rhs == 0.0 => Err(DomainError::DivisionByZero),
            Self::Div => Ok(lhs / rhs),
            Self::Pow => checked_pow(lhs, rhs),
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }
}

/// A parsed expression tree.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Node {
    Number(f64),
    Variable,
    Constant(Constant),
    Negate(Box<Node>),
    Binary {
        op: BinaryOp,
        lhs: Box<Node>,
        rhs: Box<Node>,
    },
    Call {
        function: MathFunction,
        arg: Box<Node>,
    },
}

impl Node {
    /// Interprets the tree at `x`.
    ///
    /// Every intermediate value is checked, so an overflow deep in the tree
    /// is reported even if a later operation would mask it.
    pub(super) fn eval(&self, x: f64) -> Result<f64, DomainError> {
        let value = match self {
            Self::Number(value) => *value,
            Self::Variable => x,
            Self::Constant(constant) => constant.value(),
            Self::Negate(inner) => -inner.eval(x)?,
            Self::Binary { op, lhs, rhs } => op.apply(lhs.eval(x)?, rhs.eval(x)?)?,
            Self::Call { function, arg } => function.apply(arg.eval(x)?)?,
        };
        DomainError::check_finite(x, value)
    }
}

/// Fully parenthesized form, used to check how text was grouped.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Variable => write!(f, "x"),
            Self::Constant(constant) => write!(f, "{}", constant.name()),
            Self::Negate(inner) => write!(f, "(-{inner})"),
            Self::Binary { op, lhs, rhs } => write!(f, "({lhs} {} {rhs})", op.symbol()),
            Self::Call { function, arg } => write!(f, "{}({arg})", function.name()),
        }
    }
}
