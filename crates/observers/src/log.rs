use rootfind_core::Observer;
use tracing::{Level, event};

use crate::traits::{HasEstimate, HasResidual};

/// Re-emits every solver event as a `tracing` event.
///
/// Each event is logged with `iter`, `x`, and `residual` fields at the
/// configured level; a failed evaluation logs a NaN residual. The logger
/// never returns an action.
///
/// # Example
///
/// ```
/// use rootfind_core::Expression;
/// use rootfind_observers::Logger;
/// use rootfind_solvers::bisection;
///
/// let f = Expression::parse("x^2 - 2").unwrap();
/// let config = bisection::Config::new(1e-6).unwrap();
/// let mut logger = Logger::new(tracing::Level::INFO).with_label("sqrt2");
///
/// bisection::solve(&f, [0.0, 2.0], &config, &mut logger).unwrap();
/// assert_eq!(logger.events(), 21);
/// ```
#[derive(Debug, Clone)]
pub struct Logger {
    level: Level,
    label: &'static str,
    events: usize,
}

impl Logger {
    /// Creates a logger that emits at `level`.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self {
            level,
            label: "solve",
            events: 0,
        }
    }

    /// Sets the `label` field attached to every event.
    #[must_use]
    pub fn with_label(mut self, label: &'static str) -> Self {
        self.label = label;
        self
    }

    /// Returns the number of events logged so far.
    #[must_use]
    pub fn events(&self) -> usize {
        self.events
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Level::DEBUG)
    }
}

impl<E, A> Observer<E, A> for Logger
where
    E: HasEstimate + HasResidual,
{
    fn observe(&mut self, e: &E) -> Option<A> {
        self.events += 1;
        let (label, iter, x, residual) = (self.label, self.events, e.estimate(), e.residual());

        // `event!` needs a constant level.
        match self.level {
            Level::TRACE => event!(Level::TRACE, label, iter, x, residual, "solver event"),
            Level::DEBUG => event!(Level::DEBUG, label, iter, x, residual, "solver event"),
            Level::INFO => event!(Level::INFO, label, iter, x, residual, "solver event"),
            Level::WARN => event!(Level::WARN, label, iter, x, residual, "solver event"),
            _ => event!(Level::ERROR, label, iter, x, residual, "solver event"),
        }
        None
    }
}

/// Forwards to the underlying logger so a caller can keep ownership.
impl<E, A> Observer<E, A> for &mut Logger
where
    E: HasEstimate + HasResidual,
{
    fn observe(&mut self, e: &E) -> Option<A> {
        Observer::<E, A>::observe(&mut **self, e)
    }
}
