use rootfind_core::Interval;

/// The state of one solver step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationStep {
    /// One-based step number.
    pub index: usize,

    /// The point evaluated on this step (a midpoint or a Newton iterate).
    pub estimate: f64,

    /// The function value at `estimate`.
    pub residual: f64,

    /// The derivative at `estimate`, for derivative-based solvers.
    pub derivative: Option<f64>,

    /// The bracket the step started from, for bracketing solvers.
    pub bracket: Option<Interval>,
}

/// The ordered steps of one solve.
///
/// A trace only grows while its solve is running and is handed to the
/// caller, complete, when the solve returns.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Trace {
    steps: Vec<IterationStep>,
}

impl Trace {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, step: IterationStep) {
        self.steps.push(step);
    }

    /// Returns the number of recorded steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if no steps were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the most recent step.
    #[must_use]
    pub fn last(&self) -> Option<&IterationStep> {
        self.steps.last()
    }

    /// Returns the recorded steps in order.
    #[must_use]
    pub fn steps(&self) -> &[IterationStep] {
        &self.steps
    }

    /// Iterates over the recorded steps in order.
    pub fn iter(&self) -> std::slice::Iter<'_, IterationStep> {
        self.steps.iter()
    }
}

impl IntoIterator for Trace {
    type Item = IterationStep;
    type IntoIter = std::vec::IntoIter<IterationStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a IterationStep;
    type IntoIter = std::slice::Iter<'a, IterationStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
