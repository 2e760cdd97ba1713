//! `ErrorAggregate` - an ordered collection of errors.
//!
//! `ErrorAggregate<E>` accumulates zero or more errors while preserving the
//! order in which they were observed. It is produced by the collect-all
//! aggregation functions ([`try_all_results`](crate::result::try_all_results),
//! [`any_results`](crate::result::any_results) and
//! [`and_try`](crate::result::ResultExt::and_try)).
//!
//! An aggregate is a value: `append`, `prepend` and `merge` consume the
//! aggregate and return a new one. Nothing is ever deduplicated.
//!
//! # Examples
//!
//! ```rust
//! use optres::error::ErrorAggregate;
//!
//! let aggregate = ErrorAggregate::new()
//!     .append("disk full")
//!     .append("network down")
//!     .prepend("config missing");
//!
//! assert!(aggregate.has_errors());
//! assert_eq!(aggregate.errors(), &["config missing", "disk full", "network down"]);
//! assert_eq!(aggregate.to_string(), "config missing\ndisk full\nnetwork down");
//! ```

use std::fmt;

use crate::typeclass::{Monoid, Semigroup};

/// An ordered, immutable collection of errors.
///
/// The displayed message of an aggregate is the newline-joined
/// concatenation of the messages of its members, in order.
///
/// An aggregate with no members is a legal value; [`has_errors`](Self::has_errors)
/// reports `false` for it and it is the seed used by every collect-all
/// aggregation.
///
/// # Type Parameters
///
/// * `E` - The type of the collected errors
///
/// # Examples
///
/// ```rust
/// use optres::error::ErrorAggregate;
///
/// let left = ErrorAggregate::single("a");
/// let right = ErrorAggregate::from_errors(["b", "c"]);
///
/// let merged = left.merge(right);
/// assert_eq!(merged.len(), 3);
/// assert_eq!(merged.first(), Some(&"a"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorAggregate<E> {
    errors: Vec<E>,
}

impl<E> ErrorAggregate<E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates an empty aggregate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::error::ErrorAggregate;
    ///
    /// let aggregate: ErrorAggregate<String> = ErrorAggregate::new();
    /// assert!(!aggregate.has_errors());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Creates an aggregate holding exactly one error.
    #[inline]
    #[must_use]
    pub fn single(error: E) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// Creates an aggregate from any sequence of errors, keeping their order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::error::ErrorAggregate;
    ///
    /// let aggregate = ErrorAggregate::from_errors(vec![1, 2, 3]);
    /// assert_eq!(aggregate.errors(), &[1, 2, 3]);
    /// ```
    #[must_use]
    pub fn from_errors<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        Self {
            errors: errors.into_iter().collect(),
        }
    }

    // =========================================================================
    // Composition
    // =========================================================================

    /// Returns a new aggregate with `error` added at the end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::error::ErrorAggregate;
    ///
    /// let aggregate = ErrorAggregate::single("first").append("second");
    /// assert_eq!(aggregate.errors(), &["first", "second"]);
    /// ```
    #[must_use]
    pub fn append(mut self, error: E) -> Self {
        self.errors.push(error);
        self
    }

    /// Returns a new aggregate with `error` added at the start.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::error::ErrorAggregate;
    ///
    /// let aggregate = ErrorAggregate::single("second").prepend("first");
    /// assert_eq!(aggregate.errors(), &["first", "second"]);
    /// ```
    #[must_use]
    pub fn prepend(mut self, error: E) -> Self {
        self.errors.insert(0, error);
        self
    }

    /// Concatenates two aggregates, members of `self` first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::error::ErrorAggregate;
    ///
    /// let merged = ErrorAggregate::from_errors([1, 2]).merge(ErrorAggregate::from_errors([3]));
    /// assert_eq!(merged.errors(), &[1, 2, 3]);
    /// ```
    #[must_use]
    pub fn merge(mut self, mut other: Self) -> Self {
        self.errors.append(&mut other.errors);
        self
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if the aggregate holds at least one error.
    ///
    /// This is the predicate every collect-all aggregation uses to decide
    /// between success and failure.
    #[inline]
    pub const fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of collected errors.
    #[inline]
    pub const fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns `true` if no error has been collected.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the collected errors in order.
    #[inline]
    pub fn errors(&self) -> &[E] {
        &self.errors
    }

    /// Returns the first collected error, if any.
    #[inline]
    pub fn first(&self) -> Option<&E> {
        self.errors.first()
    }

    /// Returns an iterator over the collected errors in order.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.errors.iter()
    }

    /// Consumes the aggregate, returning the collected errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<E> {
        self.errors
    }
}

impl<E> Default for ErrorAggregate<E> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl<E> From<Vec<E>> for ErrorAggregate<E> {
    fn from(errors: Vec<E>) -> Self {
        Self { errors }
    }
}

impl<E> FromIterator<E> for ErrorAggregate<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iterator: I) -> Self {
        Self::from_errors(iterator)
    }
}

impl<E> IntoIterator for ErrorAggregate<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a ErrorAggregate<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

// =============================================================================
// Display and Error
// =============================================================================

impl<E: fmt::Display> fmt::Display for ErrorAggregate<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, error) in self.errors.iter().enumerate() {
            if index > 0 {
                formatter.write_str("\n")?;
            }
            write!(formatter, "{error}")?;
        }
        Ok(())
    }
}

impl<E> std::error::Error for ErrorAggregate<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.errors
            .first()
            .map(|error| error as &(dyn std::error::Error + 'static))
    }
}

// =============================================================================
// Semigroup / Monoid
// =============================================================================

/// Aggregates form a semigroup under [`merge`](ErrorAggregate::merge).
impl<E> Semigroup for ErrorAggregate<E> {
    fn combine(self, other: Self) -> Self {
        self.merge(other)
    }
}

/// The empty aggregate is the identity of `merge`.
impl<E> Monoid for ErrorAggregate<E> {
    fn empty() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(ErrorAggregate<std::io::Error>: Send, Sync, std::error::Error);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("{0}")]
    struct Failure(&'static str);

    #[rstest]
    fn new_aggregate_has_no_errors() {
        let aggregate: ErrorAggregate<Failure> = ErrorAggregate::new();
        assert!(!aggregate.has_errors());
        assert!(aggregate.is_empty());
        assert_eq!(aggregate.to_string(), "");
    }

    #[rstest]
    fn append_and_prepend_keep_order() {
        let aggregate = ErrorAggregate::single(Failure("b"))
            .append(Failure("c"))
            .prepend(Failure("a"));
        assert_eq!(
            aggregate.errors(),
            &[Failure("a"), Failure("b"), Failure("c")]
        );
    }

    #[rstest]
    fn duplicates_are_kept() {
        let aggregate = ErrorAggregate::single(Failure("a")).append(Failure("a"));
        assert_eq!(aggregate.len(), 2);
    }

    #[rstest]
    fn display_joins_messages_with_newlines() {
        let aggregate = ErrorAggregate::from_errors([Failure("first"), Failure("second")]);
        assert_eq!(format!("{aggregate}"), "first\nsecond");
    }

    #[rstest]
    fn source_is_first_member() {
        use std::error::Error;

        let aggregate = ErrorAggregate::from_errors([Failure("first"), Failure("second")]);
        let source = aggregate.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("first"));
    }

    #[rstest]
    fn empty_aggregate_has_no_source() {
        use std::error::Error;

        let aggregate: ErrorAggregate<Failure> = ErrorAggregate::new();
        assert!(aggregate.source().is_none());
    }

    #[rstest]
    fn combine_is_merge() {
        let left = ErrorAggregate::from_errors([1, 2]);
        let right = ErrorAggregate::from_errors([3]);
        assert_eq!(left.combine(right).into_errors(), vec![1, 2, 3]);
    }

    #[rstest]
    fn folding_from_empty_flattens_in_order() {
        let aggregates = vec![
            ErrorAggregate::from_errors([1]),
            ErrorAggregate::new(),
            ErrorAggregate::from_errors([2, 3]),
        ];
        let folded = aggregates
            .into_iter()
            .fold(ErrorAggregate::empty(), Semigroup::combine);
        assert_eq!(folded.errors(), &[1, 2, 3]);
    }
}
