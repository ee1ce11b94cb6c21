use thiserror::Error;

/// Errors that can occur when creating an [`Interval`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IntervalError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,
    /// Endpoints are equal, giving zero width.
    #[error("zero width")]
    Degenerate,
    /// The lower endpoint is above the upper endpoint.
    #[error("lower endpoint above upper endpoint")]
    Inverted,
}

/// A finite interval with `lower < upper`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "[f64; 2]", into = "[f64; 2]"))]
pub struct Interval {
    lower: f64,
    upper: f64,
}

impl Interval {
    /// Creates a validated interval.
    ///
    /// Inverted intervals are rejected rather than reordered.
    ///
    /// # Errors
    ///
    /// Returns an error if an endpoint is non-finite or if `lower >= upper`.
    pub fn new(lower: f64, upper: f64) -> Result<Self, IntervalError> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(IntervalError::NonFinite);
        }

        #[allow(clippy::float_cmp)]
        if lower == upper {
            return Err(IntervalError::Degenerate);
        }

        if lower > upper {
            return Err(IntervalError::Inverted);
        }

        Ok(Self { lower, upper })
    }

    /// Returns the lower endpoint.
    #[must_use]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Returns the upper endpoint.
    #[must_use]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns the endpoints as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.lower, self.upper]
    }

    /// Returns the interval width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Returns the midpoint `(lower + upper) / 2`.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    /// Returns true if `x` lies in the closed interval.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.lower <= x && x <= self.upper
    }

    /// Splits the interval at `x` into `[lower, x]` and `[x, upper]`.
    ///
    /// Returns `None` unless `lower < x < upper`, which includes the case of
    /// adjacent-float endpoints with no representable point between them.
    #[must_use]
    pub fn split_at(&self, x: f64) -> Option<(Self, Self)> {
        (self.lower < x && x < self.upper).then_some((
            Self {
                lower: self.lower,
                upper: x,
            },
            Self {
                lower: x,
                upper: self.upper,
            },
        ))
    }
}

impl TryFrom<[f64; 2]> for Interval {
    type Error = IntervalError;

    fn try_from([lower, upper]: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(lower, upper)
    }
}

impl From<Interval> for [f64; 2] {
    fn from(interval: Interval) -> Self {
        interval.as_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn accepts_ordered_endpoints() {
        let interval = Interval::new(1.0, 3.0).expect("valid interval");
        assert_relative_eq!(interval.width(), 2.0);
        assert_relative_eq!(interval.midpoint(), 2.0);
        assert!(interval.contains(1.0));
        assert!(interval.contains(3.0));
        assert!(!interval.contains(3.5));
    }

    #[test]
    fn rejects_non_finite() {
        assert_eq!(Interval::new(f64::NAN, 1.0), Err(IntervalError::NonFinite));
        assert_eq!(
            Interval::new(0.0, f64::INFINITY),
            Err(IntervalError::NonFinite)
        );
    }

    #[test]
    fn rejects_degenerate_and_inverted() {
        assert_eq!(Interval::new(2.0, 2.0), Err(IntervalError::Degenerate));
        assert_eq!(Interval::new(3.0, 1.0), Err(IntervalError::Inverted));
    }

    #[test]
    fn splits_only_at_interior_points() {
        let interval = Interval::new(1.0, 3.0).expect("valid interval");

        let (left, right) = interval.split_at(2.5).expect("interior point");
        assert_eq!(left.as_array(), [1.0, 2.5]);
        assert_eq!(right.as_array(), [2.5, 3.0]);

        assert_eq!(interval.split_at(1.0), None);
        assert_eq!(interval.split_at(4.0), None);
        assert_eq!(interval.split_at(f64::NAN), None);

        let next = f64::from_bits(1.0_f64.to_bits() + 1);
        let tight = Interval::new(1.0, next).expect("valid interval");
        assert_eq!(tight.split_at(tight.midpoint()), None);
    }

    #[test]
    fn converts_from_array() {
        let interval = Interval::try_from([-1.0, 1.0]).expect("valid interval");
        assert_eq!(<[f64; 2]>::from(interval), [-1.0, 1.0]);
    }
}
