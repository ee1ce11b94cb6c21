use rootfind_core::{Tolerance, ToleranceError};
use thiserror::Error;

/// Configuration for the Newton solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    tolerance: Tolerance,
    max_iters: usize,
    derivative_floor: f64,
}

/// Errors that can occur when validating a Newton solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("invalid tolerance: {0}")]
    Tolerance(#[from] ToleranceError),

    #[error("max_iters must be at least 1")]
    ZeroMaxIters,

    #[error("derivative_floor must be finite and positive, got {value}")]
    DerivativeFloor { value: f64 },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default(),
            max_iters: Self::DEFAULT_MAX_ITERS,
            derivative_floor: Self::DEFAULT_DERIVATIVE_FLOOR,
        }
    }
}

impl Config {
    /// Iteration cap used by [`Config::default`].
    pub const DEFAULT_MAX_ITERS: usize = 100;

    /// Derivative floor used by [`Config::default`].
    pub const DEFAULT_DERIVATIVE_FLOOR: f64 = 1e-10;

    /// Creates a new config with validated settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance or derivative floor is non-finite or
    /// not positive, or if `max_iters` is zero.
    pub fn new(
        tolerance: f64,
        max_iters: usize,
        derivative_floor: f64,
    ) -> Result<Self, ConfigError> {
        let tolerance = Tolerance::new(tolerance)?;

        if max_iters == 0 {
            return Err(ConfigError::ZeroMaxIters);
        }
        if !derivative_floor.is_finite() || derivative_floor <= 0.0 {
            return Err(ConfigError::DerivativeFloor {
                value: derivative_floor,
            });
        }

        Ok(Self {
            tolerance,
            max_iters,
            derivative_floor,
        })
    }

    /// Returns the step-size tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance.value()
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the smallest derivative magnitude the solver will divide by.
    #[must_use]
    pub fn derivative_floor(&self) -> f64 {
        self.derivative_floor
    }
}
