//! `ResultFuture` - the `Result` combinator surface over a pending computation.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::{BoxFuture, ready};
use pin_project_lite::pin_project;

use super::OptionFuture;

pin_project! {
    /// A pending computation that resolves to a `Result<T, E>`.
    ///
    /// Combinators mirror the synchronous `Result` ones: each consumes the
    /// wrapper, awaits it, then applies the step. A `Ok` path step is skipped
    /// on `Err` and an `Err` path step is skipped on `Ok`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::deferred::ResultFuture;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let parsed = ResultFuture::new(async { "42".parse::<i32>() })
    ///         .map_err(|error| error.to_string())
    ///         .and_then_async(|value| async move { Ok(value + 1) })
    ///         .await;
    ///     assert_eq!(parsed, Ok(43));
    /// }
    /// ```
    #[must_use = "futures do nothing unless you `.await` or poll them"]
    pub struct ResultFuture<T, E> {
        #[pin]
        future: BoxFuture<'static, Result<T, E>>,
    }
}

impl<T, E> Future for ResultFuture<T, E> {
    type Output = Result<T, E>;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().future.poll(context)
    }
}

impl<T, E> std::fmt::Debug for ResultFuture<T, E> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("ResultFuture { .. }")
    }
}

impl<T, E> ResultFuture<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Wraps a pending computation.
    pub fn new<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        Self {
            future: Box::pin(future),
        }
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Resolves to `true` if the computation yields `Ok`.
    pub async fn is_ok(self) -> bool {
        self.await.is_ok()
    }

    /// Resolves to `true` if the computation yields `Err`.
    pub async fn is_err(self) -> bool {
        self.await.is_err()
    }

    /// Resolves to the value, or to `default` on `Err`.
    pub async fn unwrap_or(self, default: T) -> T {
        self.await.unwrap_or(default)
    }

    /// Resolves to the value, or to `function(error)` on `Err`.
    pub async fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        self.await.unwrap_or_else(function)
    }

    // =========================================================================
    // Synchronous Combinators
    // =========================================================================

    /// Deferred [`Result::map`].
    pub fn map<U, F>(self, function: F) -> ResultFuture<U, E>
    where
        F: FnOnce(T) -> U + Send + 'static,
        U: Send + 'static,
    {
        ResultFuture::new(async move { self.await.map(function) })
    }

    /// Deferred [`Result::map_err`].
    pub fn map_err<R, F>(self, function: F) -> ResultFuture<T, R>
    where
        F: FnOnce(E) -> R + Send + 'static,
        R: Send + 'static,
    {
        ResultFuture::new(async move { self.await.map_err(function) })
    }

    /// Deferred [`Result::ok`].
    pub fn ok(self) -> OptionFuture<T> {
        OptionFuture::new(async move { self.await.ok() })
    }

    /// Deferred [`Result::err`].
    pub fn err(self) -> OptionFuture<E> {
        OptionFuture::new(async move { self.await.err() })
    }

    /// Deferred [`Result::and`].
    pub fn and<U>(self, other: Result<U, E>) -> ResultFuture<U, E>
    where
        U: Send + 'static,
    {
        ResultFuture::new(async move { self.await.and(other) })
    }

    /// Deferred [`Result::or`].
    pub fn or<R>(self, other: Result<T, R>) -> ResultFuture<T, R>
    where
        R: Send + 'static,
    {
        ResultFuture::new(async move { self.await.or(other) })
    }

    /// Deferred [`Result::and_then`].
    pub fn and_then<U, F>(self, function: F) -> ResultFuture<U, E>
    where
        F: FnOnce(T) -> Result<U, E> + Send + 'static,
        U: Send + 'static,
    {
        ResultFuture::new(async move { self.await.and_then(function) })
    }

    /// Deferred [`Result::or_else`].
    pub fn or_else<R, F>(self, function: F) -> ResultFuture<T, R>
    where
        F: FnOnce(E) -> Result<T, R> + Send + 'static,
        R: Send + 'static,
    {
        ResultFuture::new(async move { self.await.or_else(function) })
    }

    // =========================================================================
    // Asynchronous Combinators
    // =========================================================================

    /// Applies an asynchronous `function` to the value of `Ok`.
    pub fn map_async<U, F, Fut>(self, function: F) -> ResultFuture<U, E>
    where
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = U> + Send + 'static,
        U: Send + 'static,
    {
        ResultFuture::new(async move {
            match self.await {
                Ok(value) => Ok(function(value).await),
                Err(error) => Err(error),
            }
        })
    }

    /// Applies an asynchronous `function` to the error of `Err`.
    pub fn map_err_async<R, F, Fut>(self, function: F) -> ResultFuture<T, R>
    where
        F: FnOnce(E) -> Fut + Send + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: Send + 'static,
    {
        ResultFuture::new(async move {
            match self.await {
                Ok(value) => Ok(value),
                Err(error) => Err(function(error).await),
            }
        })
    }

    /// Chains an asynchronous computation that may itself fail.
    pub fn and_then_async<U, F, Fut>(self, function: F) -> ResultFuture<U, E>
    where
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = Result<U, E>> + Send + 'static,
        U: Send + 'static,
    {
        ResultFuture::new(async move {
            match self.await {
                Ok(value) => function(value).await,
                Err(error) => Err(error),
            }
        })
    }

    /// Runs an asynchronous recovery when the computation yields `Err`.
    pub fn or_else_async<R, F, Fut>(self, function: F) -> ResultFuture<T, R>
    where
        F: FnOnce(E) -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, R>> + Send + 'static,
        R: Send + 'static,
    {
        ResultFuture::new(async move {
            match self.await {
                Ok(value) => Ok(value),
                Err(error) => function(error).await,
            }
        })
    }
}

impl<T, E> From<Result<T, E>> for ResultFuture<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    fn from(result: Result<T, E>) -> Self {
        Self::new(ready(result))
    }
}

impl<T, E> ResultFuture<Option<T>, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Deferred [`transpose_result`](crate::result::transpose_result).
    pub fn transpose(self) -> OptionFuture<Result<T, E>> {
        OptionFuture::new(async move { crate::result::transpose_result(self.await) })
    }
}

static_assertions::assert_impl_all!(ResultFuture<String, std::io::Error>: Send, Unpin);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn ok_path_step_is_skipped_on_err() {
        let result = ResultFuture::<i32, _>::from(Err("failed"))
            .map_async(|_| async { panic!("must not run") })
            .await;
        assert_eq!(result, Err::<(), _>("failed"));
    }

    #[rstest]
    #[tokio::test]
    async fn err_path_step_is_skipped_on_ok() {
        let result = ResultFuture::<_, &str>::from(Ok(1))
            .or_else_async(|_| async { panic!("must not run") })
            .await;
        assert_eq!(result, Ok::<_, ()>(1));
    }

    #[rstest]
    #[tokio::test]
    async fn ok_and_err_project_to_options() {
        assert_eq!(ResultFuture::<_, &str>::from(Ok(1)).ok().await, Some(1));
        assert_eq!(ResultFuture::<i32, _>::from(Err("e")).err().await, Some("e"));
    }
}
