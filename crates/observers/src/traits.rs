//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across the bisection and Newton solvers.
//!
//! # Event traits
//!
//! - [`HasEstimate`]: events that carry the evaluated point
//! - [`HasResidual`]: events that carry a residual value
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use rootfind_core::Observer;
//! use rootfind_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//!     min_iters: usize,
//!     iter: usize,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         self.iter += 1;
//!         if self.iter >= self.min_iters && event.residual().abs() < self.tolerance {
//!             return Some(A::stop_early());
//!         }
//!         None
//!     }
//! }
//! ```

use rootfind_solvers::{bisection, newton};

/// An event that carries the point the solver evaluated.
pub trait HasEstimate {
    /// Returns the evaluated (or attempted) point.
    fn estimate(&self) -> f64;
}

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    ///
    /// Returns `f64::NAN` when the event represents an error and no residual
    /// is available.
    fn residual(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- bisection ---

impl HasEstimate for bisection::Event<'_> {
    fn estimate(&self) -> f64 {
        self.x()
    }
}

impl HasResidual for bisection::Event<'_> {
    fn residual(&self) -> f64 {
        bisection::Event::residual(self).unwrap_or(f64::NAN)
    }
}

impl CanStopEarly for bisection::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

// --- newton ---

impl HasEstimate for newton::Event<'_> {
    fn estimate(&self) -> f64 {
        self.x()
    }
}

impl HasResidual for newton::Event<'_> {
    fn residual(&self) -> f64 {
        newton::Event::residual(self).unwrap_or(f64::NAN)
    }
}

impl CanStopEarly for newton::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rootfind_core::DomainError;
    use rootfind_solvers::IterationStep;

    fn step(estimate: f64, residual: f64) -> IterationStep {
        IterationStep {
            index: 1,
            estimate,
            residual,
            derivative: None,
            bracket: None,
        }
    }

    #[test]
    fn step_events_expose_estimate_and_residual() {
        let step = step(1.5, -0.125);

        let event = bisection::Event::Step(&step);
        assert_relative_eq!(event.estimate(), 1.5);
        assert_relative_eq!(HasResidual::residual(&event), -0.125);

        let event = newton::Event::Step {
            step: &step,
            next: 1.6,
        };
        assert_relative_eq!(event.estimate(), 1.5);
        assert_relative_eq!(HasResidual::residual(&event), -0.125);
    }

    #[test]
    fn failed_events_have_nan_residual() {
        let error = DomainError::DivisionByZero;

        let event = bisection::Event::Failed { x: 0.0, error: &error };
        assert!(HasResidual::residual(&event).is_nan());
        assert_relative_eq!(event.estimate(), 0.0);

        let event = newton::Event::Failed { x: 2.0, error: &error };
        assert!(HasResidual::residual(&event).is_nan());
        assert_relative_eq!(event.estimate(), 2.0);
    }

    #[test]
    fn actions_can_stop_early() {
        assert_eq!(bisection::Action::stop_early(), bisection::Action::StopEarly);
        assert_eq!(newton::Action::stop_early(), newton::Action::StopEarly);
    }
}
