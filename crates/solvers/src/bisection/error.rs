use rootfind_core::{DomainError, ErrorKind, IntervalError};
use thiserror::Error;

use super::config::ConfigError;

/// Errors that can occur during bisection solving.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] IntervalError),

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error(
        "no sign change: f({lower}) = {lower_residual} and f({upper}) = {upper_residual} share a sign"
    )]
    NoSignChange {
        lower: f64,
        lower_residual: f64,
        upper: f64,
        upper_residual: f64,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl Error {
    /// Returns the error category.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidBracket(_) | Self::InvalidConfig(_) | Self::NoSignChange { .. } => {
                ErrorKind::Precondition
            }
            Self::Domain(_) => ErrorKind::Domain,
        }
    }
}
