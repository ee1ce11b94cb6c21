use rootfind_core::{Tolerance, ToleranceError};
use thiserror::Error;

/// Configuration for the bisection solver.
///
/// There is no iteration setting: the cap is derived from the bracket width
/// and the tolerance (see [`max_iters_for`](super::max_iters_for)).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    tolerance: Tolerance,
}

/// Errors that can occur when validating a bisection solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("invalid tolerance: {0}")]
    Tolerance(#[from] ToleranceError),
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is non-finite, zero, or negative.
    pub fn new(tolerance: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            tolerance: Tolerance::new(tolerance)?,
        })
    }

    /// Returns the bracket-width tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance.value()
    }
}

impl From<Tolerance> for Config {
    fn from(tolerance: Tolerance) -> Self {
        Self { tolerance }
    }
}
