use thiserror::Error;

/// Broad failure categories shared by every error in the workspace.
///
/// A presentation layer can branch on the kind to pick guidance
/// ("no root in this bracket", "did not converge", "malformed function")
/// without matching on each solver's error variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The function is undefined at an evaluated point.
    Domain,
    /// The function text is malformed or uses a disallowed symbol.
    Parse,
    /// Solver inputs were rejected before iterating (bracket, tolerance, guess).
    Precondition,
    /// An iteration could not proceed safely (e.g. vanishing derivative).
    Breakdown,
    /// The iteration cap was exhausted without meeting the tolerance.
    NonConvergence,
}

/// A mathematical operation is undefined at the evaluated point.
///
/// Function models return this instead of a NaN or infinite value.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum DomainError {
    #[error("negative base {base} raised to non-integer power {exponent}")]
    FractionalPowerOfNegative { base: f64, exponent: f64 },

    #[error("zero raised to negative power {exponent}")]
    ZeroToNegativePower { exponent: f64 },

    #[error("division by zero")]
    DivisionByZero,

    #[error("{function}({arg}) is undefined")]
    OutOfDomain { function: &'static str, arg: f64 },

    #[error("non-finite value {value} at x = {x}")]
    NonFinite { x: f64, value: f64 },

    #[error("finite-difference step {step} is not representable at x = {x}")]
    StepUnrepresentable { x: f64, step: f64 },
}

impl DomainError {
    /// Returns the error category.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Domain
    }

    /// Checks that `value`, computed at `x`, is finite.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NonFinite` for NaN or infinite values.
    pub fn check_finite(x: f64, value: f64) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::NonFinite { x, value })
        }
    }
}

/// Raises `base` to `exponent`, rejecting undefined real powers.
///
/// Integer exponents go through `powi` so that negative bases stay defined;
/// everything else goes through `powf`. The result may still overflow, so
/// callers check finiteness against their own evaluation point.
pub(crate) fn checked_pow(base: f64, exponent: f64) -> Result<f64, DomainError> {
    if base == 0.0 && exponent < 0.0 {
        return Err(DomainError::ZeroToNegativePower { exponent });
    }

    let is_integer = exponent.fract() == 0.0;
    if base < 0.0 && !is_integer {
        return Err(DomainError::FractionalPowerOfNegative { base, exponent });
    }

    #[allow(clippy::cast_possible_truncation)]
    let value = if is_integer && exponent.abs() <= f64::from(i32::MAX) {
        base.powi(exponent as i32)
    } else {
        base.powf(exponent)
    };

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn integer_powers_of_negative_bases() {
        assert_relative_eq!(checked_pow(-2.0, 3.0).unwrap(), -8.0);
        assert_relative_eq!(checked_pow(-2.0, -2.0).unwrap(), 0.25);
    }

    #[test]
    fn fractional_power_of_negative_base_is_rejected() {
        assert_eq!(
            checked_pow(-4.0, 0.5),
            Err(DomainError::FractionalPowerOfNegative {
                base: -4.0,
                exponent: 0.5
            })
        );
    }

    #[test]
    fn zero_to_negative_power_is_rejected() {
        assert_eq!(
            checked_pow(0.0, -1.0),
            Err(DomainError::ZeroToNegativePower { exponent: -1.0 })
        );
        assert_relative_eq!(checked_pow(0.0, 0.5).unwrap(), 0.0);
    }

    #[test]
    fn overflow_is_left_to_the_caller() {
        assert!(checked_pow(1e200, 2.0).unwrap().is_infinite());
    }

    #[test]
    fn check_finite_rejects_nan() {
        assert!(matches!(
            DomainError::check_finite(1.0, f64::NAN),
            Err(DomainError::NonFinite { x, .. }) if x == 1.0
        ));
        assert_eq!(DomainError::check_finite(1.0, 2.5), Ok(2.5));
    }
}
