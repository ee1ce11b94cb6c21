use std::fmt;

use crate::{DomainError, Expression, ParseError, Polynomial, Symbols, Term, TermError};

/// A real-valued function of one real variable.
///
/// Implementations must be side-effect free and stateless, so one function
/// can be shared by concurrent solves.
///
/// `evaluate` never returns a NaN or infinite value: undefined points are
/// reported as a [`DomainError`].
pub trait Function {
    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` if the function is undefined at `x`.
    fn evaluate(&self, x: f64) -> Result<f64, DomainError>;
}

/// A [`Function`] with a closed-form derivative.
pub trait Differentiable: Function {
    /// Evaluates the derivative at `x`.
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` if the derivative is undefined at `x`.
    fn differentiate(&self, x: f64) -> Result<f64, DomainError>;
}

impl<F: Function + ?Sized> Function for &F {
    fn evaluate(&self, x: f64) -> Result<f64, DomainError> {
        (**self).evaluate(x)
    }
}

impl<F: Differentiable + ?Sized> Differentiable for &F {
    fn differentiate(&self, x: f64) -> Result<f64, DomainError> {
        (**self).differentiate(x)
    }
}

/// A function model selected at runtime.
///
/// Both solvers accept any [`Function`]; this enum lets a caller hold either
/// provided model behind one type. Only the polynomial variant has a
/// closed-form derivative.
#[derive(Debug, Clone, PartialEq)]
pub enum FunctionModel {
    Polynomial(Polynomial),
    Expression(Expression),
}

impl FunctionModel {
    /// Builds a polynomial model from ordered terms.
    ///
    /// # Errors
    ///
    /// Returns a `TermError` if there are no terms or a term is non-finite.
    pub fn polynomial<T>(terms: impl IntoIterator<Item = T>) -> Result<Self, TermError>
    where
        T: Into<Term>,
    {
        Polynomial::new(terms).map(Self::Polynomial)
    }

    /// Builds an expression model, accepting only the names in `symbols`.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the text is malformed or references a name
    /// outside `symbols`.
    pub fn expression(text: &str, symbols: &Symbols) -> Result<Self, ParseError> {
        Expression::parse_with(text, symbols).map(Self::Expression)
    }

    /// Returns the polynomial if this model has a closed-form derivative.
    #[must_use]
    pub fn as_differentiable(&self) -> Option<&Polynomial> {
        match self {
            Self::Polynomial(polynomial) => Some(polynomial),
            Self::Expression(_) => None,
        }
    }
}

impl Function for FunctionModel {
    fn evaluate(&self, x: f64) -> Result<f64, DomainError> {
        match self {
            Self::Polynomial(polynomial) => polynomial.evaluate(x),
            Self::Expression(expression) => expression.evaluate(x),
        }
    }
}

impl From<Polynomial> for FunctionModel {
    fn from(polynomial: Polynomial) -> Self {
        Self::Polynomial(polynomial)
    }
}

impl From<Expression> for FunctionModel {
    fn from(expression: Expression) -> Self {
        Self::Expression(expression)
    }
}

impl fmt::Display for FunctionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Polynomial(polynomial) => fmt::Display::fmt(polynomial, f),
            Self::Expression(expression) => fmt::Display::fmt(expression, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn dispatches_to_the_selected_model() {
        let polynomial: FunctionModel = Polynomial::new([Term::new(1.0, 2.0), Term::new(-2.0, 0.0)])
            .expect("valid terms")
            .into();
        let expression: FunctionModel = Expression::parse("x^2 - 2").expect("valid text").into();

        for x in [-1.5, 0.0, 0.5, 3.0] {
            assert_relative_eq!(
                polynomial.evaluate(x).unwrap(),
                expression.evaluate(x).unwrap()
            );
        }
    }

    #[test]
    fn only_polynomials_are_differentiable() {
        let polynomial: FunctionModel = Polynomial::new([Term::new(3.0, 1.0)])
            .expect("valid terms")
            .into();
        let expression: FunctionModel = Expression::parse("3*x").expect("valid text").into();

        assert!(polynomial.as_differentiable().is_some());
        assert!(expression.as_differentiable().is_none());
    }

    #[test]
    fn constructors_validate_their_input() {
        let model = FunctionModel::polynomial([(1.0, 2.0), (-2.0, 0.0)]).expect("valid terms");
        assert_eq!(model.to_string(), "x^2 - 2");

        assert!(matches!(
            FunctionModel::expression("sqrt(x)", &Symbols::none()),
            Err(ParseError::DisallowedSymbol { .. })
        ));
        assert!(FunctionModel::polynomial(Vec::<Term>::new()).is_err());
    }

    #[test]
    fn references_are_functions() {
        fn at_two(f: impl Function) -> f64 {
            f.evaluate(2.0).unwrap()
        }

        let expression = Expression::parse("x + 1").expect("valid text");
        assert_relative_eq!(at_two(&expression), 3.0);
    }
}
