use rootfind_core::Observer;

use crate::traits::{CanStopEarly, HasResidual};

/// Stops a solve once the residual is small enough.
///
/// The solver's own criterion is on the estimate (bracket width for bisection,
/// step size for Newton). `StopWhen` adds a residual criterion on top: after
/// at least `min_iters` events, the first event with `|residual| < tolerance`
/// stops the solve, and the solver returns its best point.
///
/// Failed events carry a NaN residual and never trigger a stop.
///
/// # Example
///
/// ```
/// use rootfind_core::Expression;
/// use rootfind_observers::StopWhen;
/// use rootfind_solvers::{Status, bisection};
///
/// let f = Expression::parse("x^3 - x - 2").unwrap();
/// let config = bisection::Config::new(1e-12).unwrap();
///
/// let stop = StopWhen::residual_below(1e-3);
/// let solution = bisection::solve(&f, [1.0, 2.0], &config, stop).unwrap();
///
/// assert_eq!(solution.status, Status::StoppedByObserver);
/// assert!(solution.residual.abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopWhen {
    tolerance: f64,
    min_iters: usize,
    seen: usize,
}

impl StopWhen {
    /// Stops at the first event with `|residual| < tolerance`.
    #[must_use]
    pub fn residual_below(tolerance: f64) -> Self {
        Self {
            tolerance,
            min_iters: 0,
            seen: 0,
        }
    }

    /// Ignores the first `min_iters` events.
    #[must_use]
    pub fn after(mut self, min_iters: usize) -> Self {
        self.min_iters = min_iters;
        self
    }

    /// Returns the number of events seen so far.
    #[must_use]
    pub fn seen(&self) -> usize {
        self.seen
    }
}

impl<E, A> Observer<E, A> for StopWhen
where
    E: HasResidual,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.seen += 1;
        if self.seen <= self.min_iters {
            return None;
        }

        // NaN compares false, so failed events fall through.
        (event.residual().abs() < self.tolerance).then(A::stop_early)
    }
}

impl<E, A> Observer<E, A> for &mut StopWhen
where
    E: HasResidual,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        Observer::<E, A>::observe(&mut **self, event)
    }
}
