//! Algebraic type classes.
//!
//! - [`Semigroup`]: associative `combine`
//! - [`Monoid`]: `Semigroup` with an identity element
//!
//! These are the laws [`ErrorAggregate`](crate::error::ErrorAggregate)
//! satisfies: merging is associative and the empty aggregate is neutral,
//! so any number of partial failures can be folded into one.

mod monoid;
mod semigroup;

pub use monoid::Monoid;
pub use semigroup::Semigroup;
