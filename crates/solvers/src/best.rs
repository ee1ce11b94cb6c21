use crate::{Solution, Status, Trace};

/// Tracks the best point evaluated so far.
///
/// The best point is defined by minimum residual magnitude.
/// The `Option` lets us represent the state before any evaluation.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Best {
    point: Option<(f64, f64)>,
}

impl Best {
    /// Creates an empty best tracker.
    pub(crate) fn empty() -> Self {
        Self::default()
    }

    /// Updates the best point if the residual magnitude improves.
    pub(crate) fn update(&mut self, x: f64, residual: f64) {
        if let Some((_, best)) = self.point
            && residual.abs() >= best.abs()
        {
            return;
        }
        self.point = Some((x, residual));
    }

    /// Finishes the solve at the best point.
    ///
    /// Uses `fallback` as `(root, residual)` if nothing was recorded.
    pub(crate) fn finish(
        self,
        fallback: (f64, f64),
        status: Status,
        max_iters: usize,
        trace: Trace,
    ) -> Solution {
        let (root, residual) = self.point.unwrap_or(fallback);
        Solution {
            status,
            root,
            residual,
            iters: trace.len(),
            max_iters,
            trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn update_keeps_best_residual() {
        let mut best = Best::empty();
        best.update(1.0, 2.0);
        best.update(2.0, -1.5);
        best.update(3.0, 1.0);

        let solution = best.finish((0.0, 0.0), Status::StoppedByObserver, 10, Trace::new());

        assert_relative_eq!(solution.root, 3.0);
        assert_relative_eq!(solution.residual, 1.0);
    }

    #[test]
    fn update_ignores_worse_residual() {
        let mut best = Best::empty();
        best.update(1.0, -0.5);
        best.update(2.0, 2.0);
        best.update(4.0, 0.5);

        let solution = best.finish((0.0, 0.0), Status::StoppedByObserver, 10, Trace::new());

        assert_relative_eq!(solution.root, 1.0);
        assert_relative_eq!(solution.residual, -0.5);
    }

    #[test]
    fn finish_builds_solution() {
        let solution = Best::empty().finish((2.0, -1.25), Status::Converged, 7, Trace::new());

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 0);
        assert_eq!(solution.max_iters, 7);
        assert_relative_eq!(solution.root, 2.0);
        assert_relative_eq!(solution.residual, -1.25);
    }
}
