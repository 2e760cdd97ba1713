//! `CombinedResult` - the accumulator of collect-all combination.

use crate::error::ErrorAggregate;
use crate::tuple::{TupleAppend, TupleConcat};

/// The outcome of combining several `Result`s with
/// [`and_try`](crate::result::ResultExt::and_try).
///
/// A `CombinedResult<V, E>` holds either the flat tuple `V` of every value
/// combined so far, or an [`ErrorAggregate`] of every error combined so far.
/// Once an error has been seen, values are dropped and only errors are
/// collected.
///
/// Combining never nests: values grow one flat tuple, and combining with an
/// aggregate or with another `CombinedResult` merges the aggregates.
///
/// # Examples
///
/// ```rust
/// use optres::error::ErrorAggregate;
/// use optres::result::CombinedResult;
///
/// let combined = CombinedResult::<(), &str>::new()
///     .and_try(Ok(1))
///     .and_try(Ok("two"));
/// assert_eq!(combined.into_result(), Ok((1, "two")));
///
/// let failed = CombinedResult::<(), &str>::new()
///     .and_try(Err::<i32, _>("a"))
///     .and_try_aggregate(Err::<i32, _>(ErrorAggregate::from_errors(["b", "c"])));
/// assert_eq!(failed.into_result().unwrap_err().errors(), &["a", "b", "c"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a CombinedResult may hold errors that should be handled"]
pub struct CombinedResult<V, E> {
    inner: Result<V, ErrorAggregate<E>>,
}

impl<E> CombinedResult<(), E> {
    /// Creates an empty combination: no value and no error yet.
    pub const fn new() -> Self {
        Self { inner: Ok(()) }
    }
}

impl<E> Default for CombinedResult<(), E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> CombinedResult<(T,), E> {
    /// Starts a combination from one result.
    pub fn from_result(result: Result<T, E>) -> Self {
        Self {
            inner: result.map(|value| (value,)).map_err(ErrorAggregate::single),
        }
    }

    /// Starts a combination from one result whose error is already an
    /// aggregate. The aggregate is taken over as is, not nested.
    pub fn from_aggregate_result(result: Result<T, ErrorAggregate<E>>) -> Self {
        Self {
            inner: result.map(|value| (value,)),
        }
    }
}

impl<V, E> CombinedResult<V, E> {
    // =========================================================================
    // Combination
    // =========================================================================

    /// Combines one more result.
    ///
    /// | `self` | `other` | outcome |
    /// |---|---|---|
    /// | values | `Ok(u)` | values with `u` appended |
    /// | values | `Err(e)` | aggregate `[e]` |
    /// | aggregate | `Ok(_)` | aggregate unchanged |
    /// | aggregate | `Err(e)` | aggregate with `e` appended |
    pub fn and_try<U>(self, other: Result<U, E>) -> CombinedResult<V::Output, E>
    where
        V: TupleAppend<U>,
    {
        self.and_try_aggregate(other.map_err(ErrorAggregate::single))
    }

    /// Combines one more result whose error is an aggregate, merging the
    /// aggregates instead of nesting them.
    pub fn and_try_aggregate<U>(
        self,
        other: Result<U, ErrorAggregate<E>>,
    ) -> CombinedResult<V::Output, E>
    where
        V: TupleAppend<U>,
    {
        let inner = match (self.inner, other) {
            (Ok(values), Ok(value)) => Ok(values.append(value)),
            (Ok(_), Err(errors)) | (Err(errors), Ok(_)) => Err(errors),
            (Err(errors), Err(others)) => Err(errors.merge(others)),
        };
        CombinedResult { inner }
    }

    /// Combines with another combination: values are concatenated into one
    /// flat tuple, aggregates are merged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::result::ResultExt;
    ///
    /// let left = Ok::<_, &str>(1).and_try(Ok(2));
    /// let right = Ok::<_, &str>("three").into_combined();
    /// assert_eq!(left.and_try_combined(right).into_result(), Ok((1, 2, "three")));
    /// ```
    pub fn and_try_combined<W>(self, other: CombinedResult<W, E>) -> CombinedResult<V::Output, E>
    where
        V: TupleConcat<W>,
    {
        let inner = match (self.inner, other.inner) {
            (Ok(values), Ok(others)) => Ok(values.concat(others)),
            (Ok(_), Err(errors)) | (Err(errors), Ok(_)) => Err(errors),
            (Err(errors), Err(others)) => Err(errors.merge(others)),
        };
        CombinedResult { inner }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if no error has been combined.
    pub const fn is_ok(&self) -> bool {
        self.inner.is_ok()
    }

    /// Returns `true` if at least one error has been combined.
    pub const fn is_err(&self) -> bool {
        self.inner.is_err()
    }

    /// Returns the combined values, if no error has been combined.
    pub const fn values(&self) -> Option<&V> {
        match &self.inner {
            Ok(values) => Some(values),
            Err(_) => None,
        }
    }

    /// Returns the collected errors, if any error has been combined.
    pub const fn errors(&self) -> Option<&ErrorAggregate<E>> {
        match &self.inner {
            Ok(_) => None,
            Err(errors) => Some(errors),
        }
    }

    /// Converts the combination into a plain `Result`.
    ///
    /// # Errors
    ///
    /// Returns every combined error if at least one was combined.
    pub fn into_result(self) -> Result<V, ErrorAggregate<E>> {
        self.inner
    }
}

impl<V, E> From<CombinedResult<V, E>> for Result<V, ErrorAggregate<E>> {
    fn from(combined: CombinedResult<V, E>) -> Self {
        combined.into_result()
    }
}
