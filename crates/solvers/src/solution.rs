use crate::Trace;

/// How a successful solve finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The convergence test was met.
    Converged,

    /// A point evaluated to exactly zero.
    ExactRoot,

    /// A bracketing solver used its whole iteration budget.
    ///
    /// The budget is computed so that the bracket is already within tolerance
    /// when it runs out, so this counts as converged.
    BudgetReached,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

impl Status {
    /// Returns true if the root meets the requested tolerance.
    #[must_use]
    pub fn is_converged(self) -> bool {
        !matches!(self, Self::StoppedByObserver)
    }
}

/// The result of a successful solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Root estimate.
    pub root: f64,

    /// Function value at `root`.
    pub residual: f64,

    /// Number of steps taken.
    pub iters: usize,

    /// The iteration budget the solve ran under.
    pub max_iters: usize,

    /// Every step taken, in order.
    pub trace: Trace,
}
