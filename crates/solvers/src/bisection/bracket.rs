use rootfind_core::Interval;

/// The sign of a nonzero residual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// Returns the sign of `value`.
    ///
    /// Zero is classified as positive; callers check for exact zeros first.
    #[must_use]
    pub(super) fn of(value: f64) -> Self {
        if value < 0.0 {
            Self::Negative
        } else {
            Self::Positive
        }
    }
}

/// A point and its residual.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bound {
    pub(super) x: f64,
    pub(super) residual: f64,
}

/// An interval with a sign change between its endpoints.
///
/// Only the sign at the lower endpoint is stored: the upper endpoint always
/// has the other sign, and `shrink` keeps the half that preserves it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    interval: Interval,
    lower: Sign,
}

impl Bracket {
    /// Creates a bracket, or returns `None` if the residuals share a sign.
    pub(super) fn new(
        interval: Interval,
        lower_residual: f64,
        upper_residual: f64,
    ) -> Option<Self> {
        let lower = Sign::of(lower_residual);
        (lower != Sign::of(upper_residual)).then_some(Self { interval, lower })
    }

    /// Returns the midpoint `(a + b) / 2`.
    pub(super) fn midpoint(&self) -> f64 {
        self.interval.midpoint()
    }

    /// Returns true if `x` lies strictly between the bounds.
    ///
    /// Fails once the bounds are adjacent floats and can't be split.
    pub(super) fn splits_at(&self, x: f64) -> bool {
        self.interval.split_at(x).is_some()
    }

    /// Returns the current bounds.
    pub(super) fn interval(&self) -> Interval {
        self.interval
    }

    /// Keeps the half whose endpoint residuals still differ in sign.
    ///
    /// A `mid` outside the open interval leaves the bracket unchanged.
    pub(super) fn shrink(&mut self, mid: Bound) {
        if let Some((left, right)) = self.interval.split_at(mid.x) {
            self.interval = if Sign::of(mid.residual) == self.lower {
                right
            } else {
                left
            };
        }
    }
}
