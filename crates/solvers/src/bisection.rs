//! Bisection for a single bracketed root.
//!
//! # Algorithm
//!
//! Bisection keeps a bracket `[a, b]` whose endpoint residuals have opposite
//! signs, evaluates the midpoint `c = (a + b) / 2`, and keeps whichever half
//! still has the sign change. The bracket width halves every step, so the
//! number of steps needed to bring it below the tolerance is known up front:
//!
//! ```text
//! max_iters = max(1, ceil(log2((b - a) / tolerance)))
//! ```
//!
//! # Outcomes
//!
//! - An endpoint residual of exactly zero returns that endpoint with
//!   [`Status::ExactRoot`] and zero iterations.
//! - A midpoint residual of exactly zero returns the midpoint with
//!   [`Status::ExactRoot`].
//! - Using the whole budget returns the last midpoint with
//!   [`Status::BudgetReached`]. The budget guarantees the bracket is within
//!   tolerance, so this is a success.
//! - Endpoints whose residuals share a sign are rejected with
//!   [`Error::NoSignChange`] before any step runs.
//!
//! # Observer Events
//!
//! The solver emits [`Event::Step`] after each midpoint evaluation and
//! [`Event::Failed`] before returning an evaluation error. Observers can
//! return [`Action::StopEarly`] from a step to halt immediately with the best
//! point seen so far (minimum `|f|`, endpoints included).

mod action;
mod bracket;
mod config;
mod error;
mod event;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;

use rootfind_core::{DomainError, Function, Interval, Observer};
use tracing::{debug, info, warn};

use crate::{IterationStep, Solution, Status, Trace, best::Best};

use bracket::{Bound, Bracket};

/// Upper bound on useful halvings of a finite `f64` bracket.
///
/// Halving the widest finite bracket down to adjacent subnormals takes
/// fewer steps than this.
const MAX_HALVINGS: usize = 2_100;

/// Returns the number of halvings needed to shrink `width` below `tolerance`.
///
/// The result is `ceil(log2(width / tolerance))`, clamped to at least 1.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub fn max_iters_for(width: f64, tolerance: f64) -> usize {
    let halvings = (width / tolerance).log2().ceil();
    if halvings.is_nan() || halvings < 1.0 {
        return 1;
    }
    halvings.min(MAX_HALVINGS as f64) as usize
}

/// Finds a root of `f` in `bracket` by bisection.
///
/// The bracket is `[lower, upper]` and must satisfy `lower < upper`.
/// See the [module docs](self) for the possible outcomes.
///
/// # Errors
///
/// Returns an error if the bracket or config is invalid, if the endpoint
/// residuals share a sign, or if `f` is undefined at an evaluated point.
pub fn solve<F, Obs>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let interval = Interval::try_from(bracket).inspect_err(|error| {
        warn!(?bracket, %error, "bisection rejected bracket");
    })?;
    let max_iters = max_iters_for(interval.width(), config.tolerance());

    let lower = evaluate(f, interval.lower(), &mut observer)?;
    if lower.residual == 0.0 {
        return Ok(exact_endpoint(lower, max_iters));
    }
    let upper = evaluate(f, interval.upper(), &mut observer)?;
    if upper.residual == 0.0 {
        return Ok(exact_endpoint(upper, max_iters));
    }

    let mut best = Best::empty();
    best.update(lower.x, lower.residual);
    best.update(upper.x, upper.residual);

    let Some(mut bracket) = Bracket::new(interval, lower.residual, upper.residual) else {
        warn!(
            lower = lower.x,
            upper = upper.x,
            "bisection rejected bracket without a sign change"
        );
        return Err(Error::NoSignChange {
            lower: lower.x,
            lower_residual: lower.residual,
            upper: upper.x,
            upper_residual: upper.residual,
        });
    };

    let mut trace = Trace::new();
    let mut last = if lower.residual.abs() <= upper.residual.abs() {
        lower
    } else {
        upper
    };

    for index in 1..=max_iters {
        let x = bracket.midpoint();
        if !bracket.splits_at(x) {
            debug!(iter = index, x, "bisection bracket cannot be split further");
            break;
        }

        let mid = evaluate(f, x, &mut observer)?;
        let step = IterationStep {
            index,
            estimate: mid.x,
            residual: mid.residual,
            derivative: None,
            bracket: Some(bracket.interval()),
        };
        trace.push(step);
        best.update(mid.x, mid.residual);
        debug!(iter = index, x = mid.x, residual = mid.residual, "bisection step");

        if let Some(Action::StopEarly) = observer.observe(&Event::Step(&step)) {
            info!(iter = index, "bisection stopped by observer");
            return Ok(best.finish(
                (mid.x, mid.residual),
                Status::StoppedByObserver,
                max_iters,
                trace,
            ));
        }

        if mid.residual == 0.0 {
            info!(iter = index, root = mid.x, "bisection found exact root");
            return Ok(finish(mid, Status::ExactRoot, max_iters, trace));
        }

        bracket.shrink(mid);
        last = mid;
    }

    info!(
        iters = trace.len(),
        root = last.x,
        residual = last.residual,
        "bisection reached its iteration budget"
    );
    Ok(finish(last, Status::BudgetReached, max_iters, trace))
}

/// Finds a root of `f` in `bracket` without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns the same errors as [`solve`].
pub fn solve_unobserved<F>(f: &F, bracket: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    F: Function + ?Sized,
{
    solve(f, bracket, config, ())
}

/// Evaluates `f` at `x`, emitting a failure event on error.
fn evaluate<F, Obs>(f: &F, x: f64, observer: &mut Obs) -> Result<Bound, DomainError>
where
    F: Function + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    match f.evaluate(x) {
        Ok(residual) => Ok(Bound { x, residual }),
        Err(error) => {
            warn!(x, %error, "bisection evaluation failed");
            observer.observe(&Event::Failed { x, error: &error });
            Err(error)
        }
    }
}

fn exact_endpoint(bound: Bound, max_iters: usize) -> Solution {
    info!(root = bound.x, "bisection endpoint is an exact root");
    finish(bound, Status::ExactRoot, max_iters, Trace::new())
}

fn finish(bound: Bound, status: Status, max_iters: usize, trace: Trace) -> Solution {
    Solution {
        status,
        root: bound.x,
        residual: bound.residual,
        iters: trace.len(),
        max_iters,
        trace,
    }
}
