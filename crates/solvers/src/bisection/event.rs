use rootfind_core::DomainError;

use crate::IterationStep;

/// Events emitted by the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event<'a> {
    /// A midpoint was evaluated.
    ///
    /// The step's bracket is the one that was split, before shrinking.
    Step(&'a IterationStep),

    /// Evaluation failed at `x` (an endpoint or a midpoint).
    ///
    /// The solve returns the error after this event; the observer's action
    /// is ignored.
    Failed {
        /// The x value where evaluation failed.
        x: f64,

        /// The evaluation error.
        error: &'a DomainError,
    },
}

impl Event<'_> {
    /// Returns the x value that was evaluated (or attempted).
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Self::Step(step) => step.estimate,
            Self::Failed { x, .. } => *x,
        }
    }

    /// Returns the residual, if evaluation succeeded.
    #[must_use]
    pub fn residual(&self) -> Option<f64> {
        match self {
            Self::Step(step) => Some(step.residual),
            Self::Failed { .. } => None,
        }
    }
}
