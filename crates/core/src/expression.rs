//! Functions of `x` written as text.
//!
//! An [`Expression`] is parsed once into a tree and then interpreted at each
//! evaluation point. Nothing in the text is ever executed: only numeric
//! literals, the variable `x`, the arithmetic operators `+ - * / ^ **`,
//! parentheses, and the whitelisted names in [`Symbols`] are accepted.
//! Names may carry a `math.` prefix, so `math.sqrt(x)` and `sqrt(x)` are the
//! same expression.

mod lexer;
mod node;
mod parser;
mod symbols;

use std::fmt;

use thiserror::Error;

use crate::{DomainError, ErrorKind, Function};

pub use symbols::{Constant, MathFunction, Symbol, Symbols};

use node::Node;
use parser::Parser;

/// Errors that can occur when parsing an [`Expression`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("expression is empty")]
    Empty,

    #[error("unexpected character '{ch}' at position {position}")]
    UnexpectedChar { ch: char, position: usize },

    #[error("invalid number '{text}' at position {position}")]
    InvalidNumber { text: String, position: usize },

    #[error("unknown name '{name}' at position {position}")]
    UnknownSymbol { name: String, position: usize },

    #[error("'{name}' at position {position} is not allowed")]
    DisallowedSymbol { name: String, position: usize },

    #[error("expected {expected} at position {position}, found {found}")]
    UnexpectedToken {
        found: String,
        expected: &'static str,
        position: usize,
    },

    #[error("expected {expected}, found end of input")]
    UnexpectedEnd { expected: &'static str },

    #[error("expression nests too deeply at position {position}")]
    TooDeep { position: usize },
}

impl ParseError {
    /// Returns the error category.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Parse
    }
}

/// A parsed, immutable function of `x`.
///
/// # Example
///
/// ```
/// use rootfind_core::{Expression, Function};
///
/// let f = Expression::parse("math.sqrt(x) - 3").unwrap();
/// assert_eq!(f.evaluate(9.0).unwrap(), 0.0);
/// assert!(f.evaluate(-1.0).is_err());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Expression {
    source: String,
    root: Node,
}

impl Expression {
    /// Parses text using every whitelisted symbol.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the text is malformed or references an
    /// unknown name.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        Self::parse_with(text, &Symbols::all())
    }

    /// Parses text, accepting only the names in `symbols`.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the text is malformed, references an
    /// unknown name, or references a name outside `symbols`.
    pub fn parse_with(text: &str, symbols: &Symbols) -> Result<Self, ParseError> {
        let tokens = lexer::tokenize(text)?;
        let root = Parser::new(&tokens, symbols).parse()?;
        Ok(Self {
            source: text.trim().to_owned(),
            root,
        })
    }

    /// Returns the source text, trimmed.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl Function for Expression {
    fn evaluate(&self, x: f64) -> Result<f64, DomainError> {
        self.root.eval(x)
    }
}

/// Two expressions are equal if they parse to the same tree.
impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl std::str::FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Expression {
    type Error = ParseError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::parse(&text)
    }
}

impl From<Expression> for String {
    fn from(expression: Expression) -> Self {
        expression.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn eval(text: &str, x: f64) -> f64 {
        Expression::parse(text)
            .expect("valid text")
            .evaluate(x)
            .expect("defined at x")
    }

    #[test]
    fn evaluates_arithmetic() {
        assert_relative_eq!(eval("x^3 - x - 2", 2.0), 4.0);
        assert_relative_eq!(eval("x**2 - 2", 3.0), 7.0);
        assert_relative_eq!(eval("-x^2", 3.0), -9.0);
        assert_relative_eq!(eval("2^3^2", 0.0), 512.0);
        assert_relative_eq!(eval("1.5e2 * x", 2.0), 300.0);
    }

    #[test]
    fn evaluates_math_functions() {
        assert_relative_eq!(eval("math.sin(math.pi / 2)", 0.0), 1.0);
        assert_relative_eq!(eval("exp(x) - e", 1.0), 0.0, epsilon = 1e-12);
        assert_relative_eq!(eval("log(e^x)", 2.5), 2.5, epsilon = 1e-12);
        assert_relative_eq!(eval("cos(x) - x", 0.0), 1.0);
    }

    #[test]
    fn sqrt_of_negative_is_domain_error() {
        let f = Expression::parse("sqrt(x) - 3").expect("valid text");
        assert_relative_eq!(f.evaluate(9.0).unwrap(), 0.0);

        let err = f.evaluate(-1.0).unwrap_err();
        assert_eq!(
            err,
            DomainError::OutOfDomain {
                function: "sqrt",
                arg: -1.0
            }
        );
        assert_eq!(err.kind(), ErrorKind::Domain);
    }

    #[test]
    fn undefined_operations_are_domain_errors() {
        let reciprocal = Expression::parse("1 / x").expect("valid text");
        assert_eq!(reciprocal.evaluate(0.0), Err(DomainError::DivisionByZero));

        let root = Expression::parse("x^0.5").expect("valid text");
        assert!(matches!(
            root.evaluate(-4.0),
            Err(DomainError::FractionalPowerOfNegative { .. })
        ));
    }

    #[test]
    fn malformed_text_fails_before_evaluation() {
        let overflow = Expression::parse("1e400 * x - 1").unwrap_err();
        assert!(matches!(overflow, ParseError::InvalidNumber { position: 0, .. }));

        let deep = format!("{}x{}", "(".repeat(5_000), ")".repeat(5_000));
        let err = Expression::parse(&deep).unwrap_err();
        assert!(matches!(err, ParseError::TooDeep { .. }));
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn rejects_unsafe_text() {
        for text in ["__import__(x)", "x; x", "open(x)", "x.real", "lambda"] {
            let err = Expression::parse(text).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Parse, "{text}");
        }
    }

    #[test]
    fn whitelist_limits_names() {
        let polynomial_only = Symbols::none();
        assert!(Expression::parse_with("3*x^2 - 1", &polynomial_only).is_ok());
        assert!(matches!(
            Expression::parse_with("pi * x", &polynomial_only),
            Err(ParseError::DisallowedSymbol { .. })
        ));

        let with_pi = Symbols::none().allow(Constant::Pi);
        assert!(Expression::parse_with("pi * x", &with_pi).is_ok());
    }

    #[test]
    fn keeps_source_text() {
        let f: Expression = "  x^2 - 2 ".parse().expect("valid text");
        assert_eq!(f.as_str(), "x^2 - 2");
        assert_eq!(f.to_string(), "x^2 - 2");
    }

    #[test]
    fn equality_ignores_formatting() {
        let a = Expression::parse("x^2-2").expect("valid text");
        let b = Expression::parse("x ** 2 - 2").expect("valid text");
        assert_eq!(a, b);
    }

    #[test]
    fn error_messages_name_the_problem() {
        let err = Expression::parse("x + y").unwrap_err();
        assert_eq!(err.to_string(), "unknown name 'y' at position 4");
    }
}
