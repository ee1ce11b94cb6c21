//! Root-finding solvers for functions of one variable.
//!
//! # Solvers
//!
//! - [`bisection`]: guaranteed convergence on a bracket with a sign change
//! - [`newton`]: fast local convergence from an initial guess, using an
//!   exact or numerical derivative
//!
//! Both solvers record an [`IterationStep`] per step into a [`Trace`] that is
//! returned with the [`Solution`] (or with [`newton::Error::NonConvergence`]).
//! Callers that want steps as they happen pass an observer to
//! [`bisection::solve`] or [`newton::solve`].
//!
//! [`bisection_solve`] and [`newton_solve`] are the entry points for a
//! runtime-selected [`FunctionModel`].

mod best;
mod solution;
mod trace;

pub mod bisection;
pub mod newton;

pub use solution::{Solution, Status};
pub use trace::{IterationStep, Trace};

use rootfind_core::{CentralDifference, Exact, FunctionModel};

/// Where the Newton solver gets derivatives from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DerivativeSource {
    /// The model's closed-form derivative. Only polynomials have one.
    Exact,

    /// A central-difference approximation, available for every model.
    Numerical(CentralDifference),
}

impl Default for DerivativeSource {
    fn default() -> Self {
        Self::Numerical(CentralDifference::default())
    }
}

/// Finds a root of `f` in `bracket` by bisection.
///
/// # Errors
///
/// Returns a [`bisection::Error`] if the tolerance or bracket is invalid, the
/// endpoints share a sign, or `f` is undefined at an evaluated point.
///
/// # Example
///
/// ```
/// use rootfind_core::FunctionModel;
/// use rootfind_solvers::{Status, bisection_solve};
///
/// let f = FunctionModel::polynomial([(1.0, 3.0), (-1.0, 1.0), (-2.0, 0.0)]).unwrap();
/// let solution = bisection_solve(&f, [1.0, 2.0], 1e-4).unwrap();
///
/// assert_eq!(solution.status, Status::BudgetReached);
/// assert_eq!(solution.iters, 14);
/// assert!((solution.root - 1.521_379_7).abs() < 1e-4);
/// ```
pub fn bisection_solve(
    f: &FunctionModel,
    bracket: [f64; 2],
    tolerance: f64,
) -> Result<Solution, bisection::Error> {
    let config = bisection::Config::new(tolerance)?;
    bisection::solve_unobserved(f, bracket, &config)
}

/// Finds a root of `f` by Newton's method, starting from `x0`.
///
/// The derivative floor is [`newton::Config::DEFAULT_DERIVATIVE_FLOOR`].
///
/// # Errors
///
/// Returns a [`newton::Error`] if the inputs are invalid, an exact derivative
/// is requested for a model without one, the iteration breaks down, `f` is
/// undefined at an iterate, or the solve does not converge in `max_iters`.
///
/// # Example
///
/// ```
/// use rootfind_core::{FunctionModel, Symbols};
/// use rootfind_solvers::{DerivativeSource, newton_solve};
///
/// let f = FunctionModel::expression("x^2 - 2", &Symbols::all()).unwrap();
/// let solution = newton_solve(&f, 1.0, 1e-6, 100, DerivativeSource::default()).unwrap();
///
/// assert!((solution.root - 2.0_f64.sqrt()).abs() < 1e-9);
/// ```
pub fn newton_solve(
    f: &FunctionModel,
    x0: f64,
    tolerance: f64,
    max_iters: usize,
    derivative: DerivativeSource,
) -> Result<Solution, newton::Error> {
    let config =
        newton::Config::new(tolerance, max_iters, newton::Config::DEFAULT_DERIVATIVE_FLOOR)?;

    match derivative {
        DerivativeSource::Exact => {
            let polynomial = f
                .as_differentiable()
                .ok_or(newton::Error::ExactDerivativeUnavailable)?;
            newton::solve_unobserved(polynomial, &Exact, x0, &config)
        }
        DerivativeSource::Numerical(differentiator) => {
            newton::solve_unobserved(f, &differentiator, x0, &config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rootfind_core::{ErrorKind, Symbols};

    #[test]
    fn bisection_solve_validates_tolerance() {
        let f = FunctionModel::polynomial([(1.0, 1.0)]).expect("valid terms");
        let err = bisection_solve(&f, [-1.0, 2.0], 0.0).unwrap_err();
        assert!(matches!(err, bisection::Error::InvalidConfig(_)));
        assert_eq!(err.kind(), ErrorKind::Precondition);
    }

    #[test]
    fn exact_derivative_requires_a_polynomial() {
        let f = FunctionModel::expression("x^2 - 2", &Symbols::all()).expect("valid text");
        let err = newton_solve(&f, 1.0, 1e-6, 100, DerivativeSource::Exact).unwrap_err();
        assert_eq!(err, newton::Error::ExactDerivativeUnavailable);
        assert_eq!(err.kind(), ErrorKind::Precondition);
    }

    #[test]
    fn exact_and_numerical_derivatives_agree() {
        let f = FunctionModel::polynomial([(1.0, 2.0), (-2.0, 0.0)]).expect("valid terms");

        let exact = newton_solve(&f, 1.0, 1e-10, 100, DerivativeSource::Exact).expect("exact");
        let numerical =
            newton_solve(&f, 1.0, 1e-10, 100, DerivativeSource::default()).expect("numerical");

        assert_relative_eq!(exact.root, numerical.root, epsilon = 1e-12);
    }

    #[test]
    fn newton_solve_validates_inputs() {
        let f = FunctionModel::polynomial([(1.0, 1.0)]).expect("valid terms");
        let err = newton_solve(&f, 1.0, 1e-6, 0, DerivativeSource::Exact).unwrap_err();
        assert_eq!(
            err,
            newton::Error::InvalidConfig(newton::ConfigError::ZeroMaxIters)
        );
    }
}
