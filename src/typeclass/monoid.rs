//! Monoid - semigroups with an identity element.
//!
//! In addition to associativity, a monoid has an `empty` value such that
//! for all `a`:
//!
//! ```text
//! T::empty().combine(a) == a
//! a.combine(T::empty()) == a
//! ```
//!
//! The empty [`ErrorAggregate`](crate::error::ErrorAggregate) is the seed of
//! every collect-all aggregation in this crate.

use super::semigroup::Semigroup;

/// A type class for semigroups with an identity element.
///
/// # Examples
///
/// ```rust
/// use optres::error::ErrorAggregate;
/// use optres::typeclass::{Monoid, Semigroup};
///
/// let aggregate = ErrorAggregate::from_errors(["a"]);
/// assert_eq!(ErrorAggregate::empty().combine(aggregate.clone()), aggregate);
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn empty() -> Self;
}
