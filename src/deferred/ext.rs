//! Entry points from plain `Option` and `Result` into the deferred wrappers.

use std::future::Future;

use super::{OptionFuture, ResultFuture};

/// Asynchronous combinators on a plain `Option`.
///
/// Each method lifts the option into an [`OptionFuture`] and continues the
/// chain there.
///
/// # Examples
///
/// ```rust
/// use optres::deferred::OptionAsyncExt;
///
/// #[tokio::main]
/// async fn main() {
///     let doubled = Some(21_i32).map_async(|value| async move { value * 2 }).await;
///     assert_eq!(doubled, Some(42));
/// }
/// ```
pub trait OptionAsyncExt<T: Send + 'static>: Sized {
    /// Lifts the option into an [`OptionFuture`] without changing it.
    fn defer(self) -> OptionFuture<T>;

    /// See [`OptionFuture::map_async`].
    fn map_async<U, F, Fut>(self, function: F) -> OptionFuture<U>
    where
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = U> + Send + 'static,
        U: Send + 'static,
    {
        self.defer().map_async(function)
    }

    /// See [`OptionFuture::and_then_async`].
    fn and_then_async<U, F, Fut>(self, function: F) -> OptionFuture<U>
    where
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = Option<U>> + Send + 'static,
        U: Send + 'static,
    {
        self.defer().and_then_async(function)
    }

    /// See [`OptionFuture::or_else_async`].
    fn or_else_async<F, Fut>(self, function: F) -> OptionFuture<T>
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Option<T>> + Send + 'static,
    {
        self.defer().or_else_async(function)
    }
}

impl<T: Send + 'static> OptionAsyncExt<T> for Option<T> {
    fn defer(self) -> OptionFuture<T> {
        OptionFuture::from(self)
    }
}

/// Asynchronous combinators on a plain `Result`.
pub trait ResultAsyncExt<T: Send + 'static, E: Send + 'static>: Sized {
    /// Lifts the result into a [`ResultFuture`] without changing it.
    fn defer(self) -> ResultFuture<T, E>;

    /// See [`ResultFuture::map_async`].
    fn map_async<U, F, Fut>(self, function: F) -> ResultFuture<U, E>
    where
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = U> + Send + 'static,
        U: Send + 'static,
    {
        self.defer().map_async(function)
    }

    /// See [`ResultFuture::map_err_async`].
    fn map_err_async<R, F, Fut>(self, function: F) -> ResultFuture<T, R>
    where
        F: FnOnce(E) -> Fut + Send + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: Send + 'static,
    {
        self.defer().map_err_async(function)
    }

    /// See [`ResultFuture::and_then_async`].
    fn and_then_async<U, F, Fut>(self, function: F) -> ResultFuture<U, E>
    where
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = Result<U, E>> + Send + 'static,
        U: Send + 'static,
    {
        self.defer().and_then_async(function)
    }

    /// See [`ResultFuture::or_else_async`].
    fn or_else_async<R, F, Fut>(self, function: F) -> ResultFuture<T, R>
    where
        F: FnOnce(E) -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, R>> + Send + 'static,
        R: Send + 'static,
    {
        self.defer().or_else_async(function)
    }
}

impl<T, E> ResultAsyncExt<T, E> for Result<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    fn defer(self) -> ResultFuture<T, E> {
        ResultFuture::from(self)
    }
}
