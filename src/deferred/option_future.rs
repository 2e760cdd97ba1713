//! `OptionFuture` - the `Option` combinator surface over a pending computation.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::{BoxFuture, ready};
use pin_project_lite::pin_project;

use super::ResultFuture;
use crate::error::OptionUnwrapError;
use crate::option::OptionExt;

pin_project! {
    /// A pending computation that resolves to an `Option<T>`.
    ///
    /// Every combinator consumes the wrapper and returns a new one whose
    /// computation first awaits this one, then applies the matching
    /// synchronous `Option` combinator. Chains therefore run strictly in the
    /// order they were written.
    ///
    /// `OptionFuture` implements `Future`, so it is resolved by awaiting it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::deferred::OptionFuture;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let value = OptionFuture::new(async { Some(20_i32) })
    ///         .map(|value| value + 1)
    ///         .filter(|value| value % 2 == 1)
    ///         .map_async(|value| async move { value * 2 })
    ///         .await;
    ///     assert_eq!(value, Some(42));
    /// }
    /// ```
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub struct OptionFuture<T> {
        #[pin]
        future: BoxFuture<'static, Option<T>>,
    }
}

impl<T> Future for OptionFuture<T> {
    type Output = Option<T>;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().future.poll(context)
    }
}

impl<T> std::fmt::Debug for OptionFuture<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("OptionFuture { .. }")
    }
}

// =============================================================================
// Constructors
// =============================================================================

impl<T: Send + 'static> OptionFuture<T> {
    /// Wraps a pending computation.
    pub fn new<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Option<T>> + Send + 'static,
    {
        Self {
            future: Box::pin(future),
        }
    }
}

impl<T: Send + 'static> From<Option<T>> for OptionFuture<T> {
    fn from(option: Option<T>) -> Self {
        Self::new(ready(option))
    }
}

// =============================================================================
// Extraction
// =============================================================================

impl<T: Send + 'static> OptionFuture<T> {
    /// Resolves to `true` if the computation yields `Some`.
    pub async fn is_some(self) -> bool {
        self.await.is_some()
    }

    /// Resolves to `true` if the computation yields `None`.
    pub async fn is_none(self) -> bool {
        self.await.is_none()
    }

    /// Resolves to the value, or to [`OptionUnwrapError`] on `None`.
    ///
    /// # Errors
    ///
    /// Resolves to [`OptionUnwrapError`] if the computation yields `None`.
    pub async fn try_unwrap(self) -> Result<T, OptionUnwrapError> {
        self.await.try_unwrap()
    }

    /// Resolves to the value, or to [`OptionUnwrapError`] carrying `message`
    /// on `None`.
    ///
    /// # Errors
    ///
    /// Resolves to [`OptionUnwrapError`] if the computation yields `None`.
    pub async fn try_expect(self, message: &str) -> Result<T, OptionUnwrapError> {
        self.await.try_expect(message)
    }

    /// Resolves to the value, or to `default` on `None`.
    pub async fn unwrap_or(self, default: T) -> T {
        self.await.unwrap_or(default)
    }

    /// Resolves to the value, or to `function()` on `None`.
    pub async fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.await.unwrap_or_else(function)
    }
}

// =============================================================================
// Synchronous Combinators
// =============================================================================

impl<T: Send + 'static> OptionFuture<T> {
    /// Deferred [`Option::map`].
    pub fn map<U, F>(self, function: F) -> OptionFuture<U>
    where
        F: FnOnce(T) -> U + Send + 'static,
        U: Send + 'static,
    {
        OptionFuture::new(async move { self.await.map(function) })
    }

    /// Deferred [`Option::filter`].
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool + Send + 'static,
    {
        Self::new(async move { self.await.filter(predicate) })
    }

    /// Deferred [`Option::zip`].
    pub fn zip<U>(self, other: Option<U>) -> OptionFuture<(T, U)>
    where
        U: Send + 'static,
    {
        OptionFuture::new(async move { self.await.zip(other) })
    }

    /// Deferred [`Option::and`].
    pub fn and<U>(self, other: Option<U>) -> OptionFuture<U>
    where
        U: Send + 'static,
    {
        OptionFuture::new(async move { self.await.and(other) })
    }

    /// Deferred [`Option::or`].
    pub fn or(self, other: Option<T>) -> Self {
        Self::new(async move { self.await.or(other) })
    }

    /// Deferred [`Option::xor`].
    pub fn xor(self, other: Option<T>) -> Self {
        Self::new(async move { self.await.xor(other) })
    }

    /// Deferred [`Option::and_then`].
    pub fn and_then<U, F>(self, function: F) -> OptionFuture<U>
    where
        F: FnOnce(T) -> Option<U> + Send + 'static,
        U: Send + 'static,
    {
        OptionFuture::new(async move { self.await.and_then(function) })
    }

    /// Deferred [`Option::or_else`].
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Option<T> + Send + 'static,
    {
        Self::new(async move { self.await.or_else(function) })
    }

    /// Deferred [`Option::ok_or`].
    pub fn ok_or<E>(self, error: E) -> ResultFuture<T, E>
    where
        E: Send + 'static,
    {
        ResultFuture::new(async move { self.await.ok_or(error) })
    }

    /// Deferred [`Option::ok_or_else`].
    pub fn ok_or_else<E, F>(self, function: F) -> ResultFuture<T, E>
    where
        F: FnOnce() -> E + Send + 'static,
        E: Send + 'static,
    {
        ResultFuture::new(async move { self.await.ok_or_else(function) })
    }
}

// =============================================================================
// Asynchronous Combinators
// =============================================================================

impl<T: Send + 'static> OptionFuture<T> {
    /// Applies an asynchronous `function` to the value of `Some`.
    ///
    /// `function` is not called on `None`.
    pub fn map_async<U, F, Fut>(self, function: F) -> OptionFuture<U>
    where
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = U> + Send + 'static,
        U: Send + 'static,
    {
        OptionFuture::new(async move {
            match self.await {
                Some(value) => Some(function(value).await),
                None => None,
            }
        })
    }

    /// Chains an asynchronous computation that may itself yield `None`.
    pub fn and_then_async<U, F, Fut>(self, function: F) -> OptionFuture<U>
    where
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = Option<U>> + Send + 'static,
        U: Send + 'static,
    {
        OptionFuture::new(async move {
            match self.await {
                Some(value) => function(value).await,
                None => None,
            }
        })
    }

    /// Runs an asynchronous fallback when the computation yields `None`.
    pub fn or_else_async<F, Fut>(self, function: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Option<T>> + Send + 'static,
    {
        Self::new(async move {
            match self.await {
                Some(value) => Some(value),
                None => function().await,
            }
        })
    }
}

// =============================================================================
// Nested Shapes
// =============================================================================

impl<T: Send + 'static> OptionFuture<Option<T>> {
    /// Deferred [`Option::flatten`].
    pub fn flatten(self) -> OptionFuture<T> {
        OptionFuture::new(async move { self.await.flatten() })
    }
}

impl<T, E> OptionFuture<Result<T, E>>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Deferred [`transpose_option`](crate::option::transpose_option).
    pub fn transpose(self) -> ResultFuture<Option<T>, E> {
        ResultFuture::new(async move { crate::option::transpose_option(self.await) })
    }
}

static_assertions::assert_impl_all!(OptionFuture<String>: Send, Unpin);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn ready_option_passes_through() {
        assert_eq!(OptionFuture::from(Some(1)).await, Some(1));
        assert_eq!(OptionFuture::<i32>::from(None).await, None);
    }

    #[rstest]
    #[tokio::test]
    async fn map_async_skips_function_on_none() {
        let result = OptionFuture::<i32>::from(None)
            .map_async(|_| async { panic!("must not run") })
            .await;
        assert_eq!(result, None::<()>);
    }

    #[rstest]
    #[tokio::test]
    async fn flatten_removes_one_level() {
        assert_eq!(OptionFuture::from(Some(Some(1))).flatten().await, Some(1));
        assert_eq!(OptionFuture::from(Some(None::<i32>)).flatten().await, None);
    }
}
