//! Reusable observers for the rootfind solvers.
//!
//! Observers receive every event a solver emits and may stop the solve early.
//! The ones here work with both [`bisection`] and [`newton`] through the
//! capability traits in [`traits`].
//!
//! - [`Logger`] re-emits events through `tracing`
//! - [`StopWhen`] stops once the residual is below a threshold
//!
//! [`bisection`]: rootfind_solvers::bisection
//! [`newton`]: rootfind_solvers::newton

pub mod traits;

mod log;
mod stop;

pub use log::Logger;
pub use stop::StopWhen;
