use thiserror::Error;

use crate::{Differentiable, DomainError, Function};

/// A source of derivative values for a function.
///
/// Derivative-based solvers take a `Differentiator` instead of reaching for a
/// specific derivative strategy, so a closed-form derivative and a numerical
/// approximation are interchangeable.
pub trait Differentiator<F: Function + ?Sized> {
    /// Returns the derivative of `f` at `x`.
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` if `f` (or its derivative) is undefined at a
    /// point this strategy needs.
    fn derivative(&self, f: &F, x: f64) -> Result<f64, DomainError>;
}

/// Uses the function's closed-form derivative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exact;

impl<F: Differentiable + ?Sized> Differentiator<F> for Exact {
    fn derivative(&self, f: &F, x: f64) -> Result<f64, DomainError> {
        f.differentiate(x)
    }
}

/// Errors that can occur when configuring a [`CentralDifference`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum StepError {
    #[error("step must be positive and finite, got {step}")]
    NotPositive { step: f64 },
}

/// Approximates the derivative by a symmetric difference quotient.
///
/// ```text
/// f'(x) ≈ (f(x + h) - f(x - h)) / (2h)
/// ```
///
/// The error is `O(h²)` for smooth functions. Works for any [`Function`],
/// including ones with no closed-form derivative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentralDifference {
    step: f64,
}

impl CentralDifference {
    /// Step used by [`CentralDifference::default`].
    pub const DEFAULT_STEP: f64 = 1e-6;

    /// Creates a differentiator with step `h`.
    ///
    /// # Errors
    ///
    /// Returns `StepError::NotPositive` if `step` is not a positive, finite number.
    pub fn new(step: f64) -> Result<Self, StepError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(StepError::NotPositive { step });
        }
        Ok(Self { step })
    }

    /// Returns the step `h`.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }
}

impl Default for CentralDifference {
    fn default() -> Self {
        Self {
            step: Self::DEFAULT_STEP,
        }
    }
}

impl<F: Function + ?Sized> Differentiator<F> for CentralDifference {
    /// # Errors
    ///
    /// Returns `DomainError::StepUnrepresentable` when `x ± h` rounds back to
    /// `x` (the quotient would divide a zero difference by `2h`), or any error
    /// from evaluating `f` at `x ± h`.
    fn derivative(&self, f: &F, x: f64) -> Result<f64, DomainError> {
        let h = self.step;
        let ahead = x + h;
        let behind = x - h;

        #[allow(clippy::float_cmp)]
        if ahead == x || behind == x {
            return Err(DomainError::StepUnrepresentable { x, step: h });
        }

        let slope = (f.evaluate(ahead)? - f.evaluate(behind)?) / (2.0 * h);
        DomainError::check_finite(x, slope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::{Expression, Polynomial, Term};

    fn cubic() -> Polynomial {
        // x^3 - 2x + 1
        Polynomial::new([Term::new(1.0, 3.0), Term::new(-2.0, 1.0), Term::new(1.0, 0.0)])
            .expect("valid terms")
    }

    #[test]
    fn exact_uses_closed_form() {
        let p = cubic();
        assert_relative_eq!(Exact.derivative(&p, 2.0).unwrap(), 10.0);
    }

    #[test]
    fn central_difference_matches_closed_form() {
        let p = cubic();
        let numerical = CentralDifference::default();
        for x in [-3.0, -0.5, 0.0, 1.0, 4.0] {
            assert_relative_eq!(
                numerical.derivative(&p, x).unwrap(),
                p.differentiate(x).unwrap(),
                epsilon = 1e-6
            );
        }
    }

    #[test]
    fn central_difference_on_expression() {
        let f = Expression::parse("sin(x)").expect("valid text");
        let numerical = CentralDifference::new(1e-5).expect("valid step");
        assert_relative_eq!(numerical.derivative(&f, 0.3).unwrap(), 0.3_f64.cos(), epsilon = 1e-9);
    }

    #[test]
    fn unrepresentable_step_is_domain_error() {
        let f = Expression::parse("x").expect("valid text");
        let numerical = CentralDifference::default();
        assert_eq!(
            numerical.derivative(&f, 1e20),
            Err(DomainError::StepUnrepresentable { x: 1e20, step: 1e-6 })
        );
    }

    #[test]
    fn propagates_evaluation_errors() {
        // sqrt is undefined just left of zero.
        let f = Expression::parse("sqrt(x)").expect("valid text");
        let numerical = CentralDifference::default();
        assert!(matches!(
            numerical.derivative(&f, 0.0),
            Err(DomainError::OutOfDomain { function: "sqrt", .. })
        ));
    }

    #[test]
    fn rejects_invalid_steps() {
        assert_eq!(
            CentralDifference::new(0.0),
            Err(StepError::NotPositive { step: 0.0 })
        );
        assert!(CentralDifference::new(-1e-3).is_err());
        assert!(CentralDifference::new(f64::NAN).is_err());
        assert_relative_eq!(CentralDifference::default().step(), 1e-6);
    }
}
