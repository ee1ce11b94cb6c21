//! Newton-Raphson iteration for a single root.
//!
//! # Algorithm
//!
//! Starting from `x0`, each iteration evaluates `f(x_i)` and `f'(x_i)` and
//! moves to
//!
//! ```text
//! x_{i+1} = x_i - f(x_i) / f'(x_i)
//! ```
//!
//! The derivative comes from an injected [`Differentiator`]: [`Exact`] for
//! functions with a closed-form derivative, or [`CentralDifference`] for any
//! function.
//!
//! # Convergence
//!
//! The solve converges when the step is smaller than the tolerance,
//! `|x_{i+1} - x_i| < tolerance`. The root is `x_{i+1}` and the reported
//! residual is `f(x_{i+1})`, so one extra evaluation follows the last step.
//!
//! Unlike bisection, Newton's method has no a-priori convergence guarantee:
//! exhausting `max_iters` is an [`Error::NonConvergence`] carrying the last
//! estimate and the trace.
//!
//! # Breakdown
//!
//! - If `|f'(x_i)|` is below the configured floor, the solve stops with
//!   [`Error::DerivativeNearZero`] without dividing.
//! - If the step overflows, the solve stops with [`Error::StepNotFinite`].
//!
//! # Observer Events
//!
//! The solver emits [`Event::Step`] once per iteration, after the step is
//! computed and before the convergence test, and [`Event::Failed`] before
//! returning an evaluation error. Observers can return [`Action::StopEarly`]
//! to halt immediately with the best iterate seen so far (minimum `|f|`).
//!
//! [`Differentiator`]: rootfind_core::Differentiator
//! [`Exact`]: rootfind_core::Exact
//! [`CentralDifference`]: rootfind_core::CentralDifference

mod action;
mod config;
mod error;
mod event;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;

use rootfind_core::{Differentiator, DomainError, Function, Observer};
use tracing::{debug, info, warn};

use crate::{IterationStep, Solution, Status, Trace, best::Best};

/// Finds a root of `f` by Newton's method, starting from `x0`.
///
/// See the [module docs](self) for the convergence test and failure modes.
///
/// # Errors
///
/// Returns an error if `x0` is not finite, if `f` or its derivative is
/// undefined at an iterate, if the iteration breaks down, or if it does not
/// converge within `config.max_iters()`.
pub fn solve<F, D, Obs>(
    f: &F,
    derivative: &D,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    D: Differentiator<F> + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    if !x0.is_finite() {
        warn!(x0, "newton rejected non-finite initial guess");
        return Err(Error::InvalidGuess { x0 });
    }

    let max_iters = config.max_iters();
    let mut trace = Trace::new();
    let mut best = Best::empty();
    let mut x = x0;

    for index in 1..=max_iters {
        let residual = observe_failure(f.evaluate(x), x, &mut observer)?;
        best.update(x, residual);
        let slope = observe_failure(derivative.derivative(f, x), x, &mut observer)?;

        if slope.abs() < config.derivative_floor() {
            warn!(iter = index, x, derivative = slope, "newton derivative near zero");
            return Err(Error::DerivativeNearZero {
                x,
                derivative: slope,
                iter: index,
            });
        }

        let next = x - residual / slope;
        if !next.is_finite() {
            warn!(iter = index, x, "newton step is not finite");
            return Err(Error::StepNotFinite { x, iter: index });
        }

        let step = IterationStep {
            index,
            estimate: x,
            residual,
            derivative: Some(slope),
            bracket: None,
        };
        trace.push(step);
        debug!(iter = index, x, residual, derivative = slope, next, "newton step");

        let event = Event::Step { step: &step, next };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            info!(iter = index, "newton stopped by observer");
            return Ok(best.finish(
                (x, residual),
                Status::StoppedByObserver,
                max_iters,
                trace,
            ));
        }

        if (next - x).abs() < config.tolerance() {
            let residual = observe_failure(f.evaluate(next), next, &mut observer)?;
            info!(iters = index, root = next, residual, "newton converged");
            return Ok(Solution {
                status: Status::Converged,
                root: next,
                residual,
                iters: index,
                max_iters,
                trace,
            });
        }

        x = next;
    }

    warn!(iters = max_iters, last_estimate = x, "newton did not converge");
    Err(Error::NonConvergence {
        last_estimate: x,
        iters: max_iters,
        trace,
    })
}

/// Finds a root of `f` by Newton's method without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns the same errors as [`solve`].
pub fn solve_unobserved<F, D>(
    f: &F,
    derivative: &D,
    x0: f64,
    config: &Config,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    D: Differentiator<F> + ?Sized,
{
    solve(f, derivative, x0, config, ())
}

/// Passes a value through, emitting a failure event on error.
fn observe_failure<Obs>(
    result: Result<f64, DomainError>,
    x: f64,
    observer: &mut Obs,
) -> Result<f64, DomainError>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    result.inspect_err(|error| {
        warn!(x, %error, "newton evaluation failed");
        observer.observe(&Event::Failed { x, error });
    })
}
