use thiserror::Error;

/// Errors that can occur when creating a [`Tolerance`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ToleranceError {
    #[error("tolerance must be finite and strictly positive, got {value}")]
    NotPositive { value: f64 },

    #[error("{digits} decimal digits underflows to zero")]
    Underflow { digits: u32 },
}

/// A finite, strictly positive convergence tolerance.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct Tolerance(f64);

impl Tolerance {
    /// Creates a validated tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is non-finite, zero, or negative.
    pub fn new(value: f64) -> Result<Self, ToleranceError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(ToleranceError::NotPositive { value })
        }
    }

    /// Creates a tolerance of `10^-digits`.
    ///
    /// # Errors
    ///
    /// Returns an error if the result underflows to zero.
    pub fn from_digits(digits: u32) -> Result<Self, ToleranceError> {
        let value = i32::try_from(digits).map_or(0.0, |d| 10f64.powi(-d));
        Self::new(value).map_err(|_| ToleranceError::Underflow { digits })
    }

    /// Returns the tolerance value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

/// `1e-6`, six decimal digits.
impl Default for Tolerance {
    fn default() -> Self {
        Self(1e-6)
    }
}

impl TryFrom<f64> for Tolerance {
    type Error = ToleranceError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Tolerance> for f64 {
    fn from(tolerance: Tolerance) -> Self {
        tolerance.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn from_digits_is_a_power_of_ten() {
        assert_relative_eq!(Tolerance::from_digits(6).unwrap().value(), 1e-6);
        assert_relative_eq!(Tolerance::from_digits(0).unwrap().value(), 1.0);
    }

    #[test]
    fn from_digits_rejects_underflow() {
        assert_eq!(
            Tolerance::from_digits(400),
            Err(ToleranceError::Underflow { digits: 400 })
        );
    }

    #[test]
    fn rejects_non_positive_values() {
        assert!(Tolerance::new(0.0).is_err());
        assert!(Tolerance::new(-1e-3).is_err());
        assert!(Tolerance::new(f64::NAN).is_err());
        assert!(Tolerance::new(f64::INFINITY).is_err());
    }
}
