//! Extension trait adding collect-all combination to `Result`.

use super::CombinedResult;

/// Collect-all combinators for `Result`.
///
/// # Examples
///
/// ```rust
/// use optres::result::ResultExt;
///
/// let combined = Ok::<_, String>(1)
///     .and_try(Ok("two"))
///     .and_try(Ok(3.0));
/// assert_eq!(combined.into_result(), Ok((1, "two", 3.0)));
///
/// let failed = Err::<i32, _>("first")
///     .and_try(Ok::<_, &str>(2))
///     .and_try(Err::<i32, _>("third"));
/// assert_eq!(failed.into_result().unwrap_err().errors(), &["first", "third"]);
/// ```
pub trait ResultExt<T, E>: Sized {
    /// Combines `self` and `other`, keeping every error.
    ///
    /// If both are `Ok`, the combination holds both values. Otherwise it
    /// holds an [`ErrorAggregate`](crate::error::ErrorAggregate) of every
    /// error among the two, `self`'s first. Further `and_try` calls on the
    /// returned [`CombinedResult`] keep extending the same flat tuple or the
    /// same aggregate.
    fn and_try<U>(self, other: Result<U, E>) -> CombinedResult<(T, U), E>;

    /// Starts a [`CombinedResult`] from this result alone.
    fn into_combined(self) -> CombinedResult<(T,), E>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn and_try<U>(self, other: Result<U, E>) -> CombinedResult<(T, U), E> {
        self.into_combined().and_try(other)
    }

    #[inline]
    fn into_combined(self) -> CombinedResult<(T,), E> {
        CombinedResult::from_result(self)
    }
}
