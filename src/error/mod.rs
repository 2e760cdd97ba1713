//! Error types of the crate.
//!
//! - [`ErrorAggregate`]: an ordered collection of errors, the failure value
//!   of every collect-all aggregation
//! - [`OptionUnwrapError`]: forced extraction from `None`
//! - [`PanicError`]: a panic captured at the `wrap`/`wrap_async` boundary
//!
//! None of these is ever raised implicitly. Errors travel as values inside
//! `Result`; only the caller decides whether to panic on them.

mod aggregate;
mod panic;
mod unwrap;

pub use aggregate::ErrorAggregate;
pub use panic::PanicError;
pub use unwrap::OptionUnwrapError;
