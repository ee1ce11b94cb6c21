//! Closed-form polynomials with real (possibly fractional or negative) exponents.
//!
//! A [`Polynomial`] is an ordered list of [`Term`]s. Term order only affects
//! display, never the value. Evaluation and differentiation go through a
//! checked power so that, for example, `(-1)^0.5` or `0^-1` surface as a
//! [`DomainError`] instead of NaN or infinity.

use std::fmt;

use thiserror::Error;

use crate::{Differentiable, DomainError, Function, error::checked_pow};

/// One `coefficient * x^exponent` term.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Term {
    pub coefficient: f64,
    pub exponent: f64,
}

impl Term {
    /// Creates a new term.
    #[must_use]
    pub fn new(coefficient: f64, exponent: f64) -> Self {
        Self {
            coefficient,
            exponent,
        }
    }

    /// Evaluates `coefficient * x^exponent`.
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` if the power is undefined at `x`.
    pub fn evaluate(&self, x: f64) -> Result<f64, DomainError> {
        let value = self.coefficient * checked_pow(x, self.exponent)?;
        DomainError::check_finite(x, value)
    }

    /// Evaluates the power-rule derivative `coefficient * exponent * x^(exponent - 1)`.
    ///
    /// Constant terms contribute zero without evaluating a power, so a
    /// constant never makes the derivative undefined (e.g. at `x = 0`).
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` if the shifted power is undefined at `x`.
    pub fn differentiate(&self, x: f64) -> Result<f64, DomainError> {
        if self.exponent == 0.0 {
            return Ok(0.0);
        }
        let value = self.coefficient * self.exponent * checked_pow(x, self.exponent - 1.0)?;
        DomainError::check_finite(x, value)
    }
}

impl From<(f64, f64)> for Term {
    fn from((coefficient, exponent): (f64, f64)) -> Self {
        Self::new(coefficient, exponent)
    }
}

/// Errors that can occur when building a [`Polynomial`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum TermError {
    #[error("polynomial must have at least one term")]
    Empty,

    #[error("term {index} is non-finite: {coefficient} x^{exponent}")]
    NonFinite {
        index: usize,
        coefficient: f64,
        exponent: f64,
    },
}

/// An immutable sum of terms.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Term>", into = "Vec<Term>"))]
pub struct Polynomial {
    terms: Vec<Term>,
}

impl Polynomial {
    /// Builds a polynomial from its terms, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no terms or if any coefficient or
    /// exponent is non-finite.
    pub fn new<T>(terms: impl IntoIterator<Item = T>) -> Result<Self, TermError>
    where
        T: Into<Term>,
    {
        let terms: Vec<Term> = terms.into_iter().map(Into::into).collect();

        if terms.is_empty() {
            return Err(TermError::Empty);
        }

        if let Some((index, term)) = terms
            .iter()
            .enumerate()
            .find(|(_, t)| !t.coefficient.is_finite() || !t.exponent.is_finite())
        {
            return Err(TermError::NonFinite {
                index,
                coefficient: term.coefficient,
                exponent: term.exponent,
            });
        }

        Ok(Self { terms })
    }

    /// Returns the terms in construction order.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }
}

impl Function for Polynomial {
    fn evaluate(&self, x: f64) -> Result<f64, DomainError> {
        let mut sum = 0.0;
        for term in &self.terms {
            sum += term.evaluate(x)?;
        }
        DomainError::check_finite(x, sum)
    }
}

impl Differentiable for Polynomial {
    fn differentiate(&self, x: f64) -> Result<f64, DomainError> {
        let mut sum = 0.0;
        for term in &self.terms {
            sum += term.differentiate(x)?;
        }
        DomainError::check_finite(x, sum)
    }
}

impl TryFrom<Vec<Term>> for Polynomial {
    type Error = TermError;

    fn try_from(terms: Vec<Term>) -> Result<Self, Self::Error> {
        Self::new(terms)
    }
}

impl From<Polynomial> for Vec<Term> {
    fn from(polynomial: Polynomial) -> Self {
        polynomial.terms
    }
}

/// Formats as e.g. `2x^3 - 4x + 1`.
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            let negative = term.coefficient.is_sign_negative();
            match (i, negative) {
                (0, true) => write!(f, "-")?,
                (0, false) => {}
                (_, true) => write!(f, " - ")?,
                (_, false) => write!(f, " + ")?,
            }

            let magnitude = term.coefficient.abs();
            #[allow(clippy::float_cmp)]
            let show_magnitude = magnitude != 1.0 || term.exponent == 0.0;
            if show_magnitude {
                write!(f, "{magnitude}")?;
            }

            #[allow(clippy::float_cmp)]
            if term.exponent == 1.0 {
                write!(f, "x")?;
            } else if term.exponent != 0.0 {
                write!(f, "x^{}", term.exponent)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn poly(terms: &[(f64, f64)]) -> Polynomial {
        Polynomial::new(terms.iter().copied()).expect("valid terms")
    }

    #[test]
    fn evaluates_integer_polynomial() {
        // x^3 - x - 2
        let p = poly(&[(1.0, 3.0), (-1.0, 1.0), (-2.0, 0.0)]);
        assert_relative_eq!(p.evaluate(2.0).unwrap(), 4.0);
        assert_relative_eq!(p.evaluate(-1.0).unwrap(), -2.0);
    }

    #[test]
    fn differentiates_with_power_rule() {
        // 3x^4 - 2x + 7  ->  12x^3 - 2
        let p = poly(&[(3.0, 4.0), (-2.0, 1.0), (7.0, 0.0)]);
        assert_relative_eq!(p.differentiate(2.0).unwrap(), 94.0);
    }

    #[test]
    fn constant_terms_are_skipped_at_zero() {
        // 5 + x: derivative at 0 must not evaluate 0^-1 for the constant term.
        let p = poly(&[(5.0, 0.0), (1.0, 1.0)]);
        assert_relative_eq!(p.differentiate(0.0).unwrap(), 1.0);

        let constant = poly(&[(5.0, 0.0)]);
        assert_relative_eq!(constant.differentiate(0.0).unwrap(), 0.0);
    }

    #[test]
    fn fractional_exponents() {
        // sqrt(x) - 3
        let p = poly(&[(1.0, 0.5), (-3.0, 0.0)]);
        assert_relative_eq!(p.evaluate(9.0).unwrap(), 0.0);
        assert_relative_eq!(p.differentiate(4.0).unwrap(), 0.25);
    }

    #[test]
    fn fractional_exponent_at_negative_x_is_domain_error() {
        let p = poly(&[(1.0, 0.5), (-3.0, 0.0)]);
        assert!(matches!(
            p.evaluate(-1.0),
            Err(DomainError::FractionalPowerOfNegative { .. })
        ));
    }

    #[test]
    fn negative_exponent_at_zero_is_domain_error() {
        let p = poly(&[(1.0, -1.0)]);
        assert!(matches!(
            p.evaluate(0.0),
            Err(DomainError::ZeroToNegativePower { .. })
        ));
        assert_relative_eq!(p.evaluate(-2.0).unwrap(), -0.5);
    }

    #[test]
    fn overflow_is_domain_error() {
        let p = poly(&[(1.0, 2.0)]);
        assert!(matches!(
            p.evaluate(1e200),
            Err(DomainError::NonFinite { x, .. }) if x == 1e200
        ));
    }

    #[test]
    fn term_order_does_not_change_value() {
        let a = poly(&[(1.0, 2.0), (-3.0, 1.0), (2.0, 0.0)]);
        let b = poly(&[(2.0, 0.0), (1.0, 2.0), (-3.0, 1.0)]);
        for x in [-2.0, 0.0, 1.5, 10.0] {
            assert_relative_eq!(a.evaluate(x).unwrap(), b.evaluate(x).unwrap());
        }
    }

    #[test]
    fn rejects_empty_and_non_finite_terms() {
        assert_eq!(Polynomial::new(Vec::<Term>::new()), Err(TermError::Empty));
        assert!(matches!(
            Polynomial::new([(1.0, 1.0), (f64::NAN, 0.0)]),
            Err(TermError::NonFinite { index: 1, .. })
        ));
    }

    #[test]
    fn displays_terms_in_order() {
        let p = poly(&[(2.0, 3.0), (-4.0, 1.0), (1.0, 0.0)]);
        assert_eq!(p.to_string(), "2x^3 - 4x + 1");

        let q = poly(&[(-1.0, 2.0), (1.0, 1.0), (-0.5, -1.0)]);
        assert_eq!(q.to_string(), "-x^2 + x - 0.5x^-1");
    }
}
