use rootfind_core::DomainError;

use crate::IterationStep;

/// Events emitted by the Newton solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event<'a> {
    /// An iterate was evaluated and a Newton step computed from it.
    Step {
        /// The recorded step for the iterate `x_i`.
        step: &'a IterationStep,

        /// The next iterate `x_{i+1}`.
        next: f64,
    },

    /// Evaluating the function or its derivative failed at `x`.
    ///
    /// The solve returns the error after this event; the observer's action
    /// is ignored.
    Failed {
        /// The iterate where evaluation failed.
        x: f64,

        /// The evaluation error.
        error: &'a DomainError,
    },
}

impl Event<'_> {
    /// Returns the iterate that was evaluated (or attempted).
    #[must_use]
    pub fn x(&self) -> f64 {
        match self {
            Self::Step { step, .. } => step.estimate,
            Self::Failed { x, .. } => *x,
        }
    }

    /// Returns the residual, if evaluation succeeded.
    #[must_use]
    pub fn residual(&self) -> Option<f64> {
        match self {
            Self::Step { step, .. } => Some(step.residual),
            Self::Failed { .. } => None,
        }
    }
}
