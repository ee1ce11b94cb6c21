use rootfind_core::{DomainError, ErrorKind};
use thiserror::Error;

use crate::Trace;

use super::config::ConfigError;

/// Errors that can occur during Newton solving.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("initial guess must be finite, got {x0}")]
    InvalidGuess { x0: f64 },

    #[error("function has no closed-form derivative")]
    ExactDerivativeUnavailable,

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("derivative near zero at x = {x} (f'(x) = {derivative}) on iteration {iter}")]
    DerivativeNearZero { x: f64, derivative: f64, iter: usize },

    #[error("newton step from x = {x} is not finite on iteration {iter}")]
    StepNotFinite { x: f64, iter: usize },

    #[error("no convergence after {iters} iterations (last estimate {last_estimate})")]
    NonConvergence {
        last_estimate: f64,
        iters: usize,
        trace: Trace,
    },
}

impl Error {
    /// Returns the error category.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidConfig(_) | Self::InvalidGuess { .. } | Self::ExactDerivativeUnavailable => {
                ErrorKind::Precondition
            }
            Self::Domain(_) => ErrorKind::Domain,
            Self::DerivativeNearZero { .. } | Self::StepNotFinite { .. } => ErrorKind::Breakdown,
            Self::NonConvergence { .. } => ErrorKind::NonConvergence,
        }
    }
}
