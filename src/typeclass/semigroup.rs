//! Semigroup - types with an associative binary operation.
//!
//! A type is a semigroup when it has a `combine` operation such that, for
//! all `a`, `b`, `c`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! [`ErrorAggregate`](crate::error::ErrorAggregate) is the semigroup this
//! crate cares about: combining two aggregates concatenates their errors.
//!
//! # Examples
//!
//! ```rust
//! use optres::error::ErrorAggregate;
//! use optres::typeclass::Semigroup;
//!
//! let left = ErrorAggregate::from_errors(["a"]);
//! let right = ErrorAggregate::from_errors(["b", "c"]);
//! assert_eq!(left.combine(right).errors(), &["a", "b", "c"]);
//! ```

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// ## Associativity
///
/// For all `a`, `b`, `c`:
/// ```text
/// (a.combine(b)).combine(c) == a.combine(b.combine(c))
/// ```
pub trait Semigroup {
    /// Combines two values into one. Must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;
}
