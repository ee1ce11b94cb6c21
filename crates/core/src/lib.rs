//! Core traits and types for scalar root finding.
//!
//! This crate defines the shared abstractions that the solvers and observers
//! build on:
//!
//! - [`Function`]: a real-valued function of one variable that either
//!   evaluates or reports a [`DomainError`]
//! - [`Differentiable`]: a [`Function`] with a closed-form derivative
//! - [`Polynomial`], [`Expression`], [`FunctionModel`]: the provided function
//!   models
//! - [`Differentiator`]: a derivative source injected into derivative-based
//!   solvers ([`Exact`] or [`CentralDifference`])
//! - [`Interval`], [`Tolerance`]: validated solver inputs
//! - [`Observer`]: receives solver events and optionally returns control actions

mod derivative;
mod error;
mod function;
mod interval;
mod observer;
mod tolerance;

pub mod expression;
pub mod polynomial;

pub use derivative::{CentralDifference, Differentiator, Exact, StepError};
pub use error::{DomainError, ErrorKind};
pub use expression::{Expression, ParseError, Symbols};
pub use function::{Differentiable, Function, FunctionModel};
pub use interval::{Interval, IntervalError};
pub use observer::Observer;
pub use polynomial::{Polynomial, Term, TermError};
pub use tolerance::{Tolerance, ToleranceError};
