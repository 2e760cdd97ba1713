//! The panic capture boundary.
//!
//! [`wrap`] and [`wrap_async`] are the only places where this crate turns a
//! panic into a value. Everywhere else errors are returned, never raised,
//! and a panic is left to unwind.

use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::error::PanicError;

/// Runs `function`, returning `Ok` of its value or `Err` of the panic it
/// raised. The panic payload is kept as is inside the [`PanicError`].
///
/// The panic hook still runs, so the panic message is printed as usual
/// before being captured.
///
/// # Errors
///
/// Returns [`PanicError`] if `function` panics.
///
/// # Examples
///
/// ```rust
/// use optres::result::wrap;
///
/// assert_eq!(wrap(|| 5).ok(), Some(5));
///
/// let captured = wrap(|| -> i32 { panic!("boom") }).unwrap_err();
/// assert_eq!(captured.to_string(), "boom");
/// ```
pub fn wrap<T, F>(function: F) -> Result<T, PanicError>
where
    F: FnOnce() -> T,
{
    catch_unwind(AssertUnwindSafe(function)).map_err(captured)
}

/// Runs the future produced by `function`, resolving to `Ok` of its output
/// or `Err` of the panic raised while creating or polling it.
///
/// Nothing runs until the returned [`ResultFuture`](crate::deferred::ResultFuture)
/// is awaited.
///
/// # Errors
///
/// The returned future resolves to [`PanicError`] if `function` or its
/// future panics.
///
/// # Examples
///
/// ```rust
/// use optres::result::wrap_async;
///
/// #[tokio::main]
/// async fn main() {
///     assert_eq!(wrap_async(|| async { 5 }).await.ok(), Some(5));
///
///     let captured: Result<(), _> = wrap_async(|| async { panic!("boom") }).await;
///     assert_eq!(captured.unwrap_err().message(), "boom");
/// }
/// ```
#[cfg(feature = "async")]
pub fn wrap_async<T, F, Fut>(function: F) -> crate::deferred::ResultFuture<T, PanicError>
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: std::future::Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    use futures::FutureExt;

    crate::deferred::ResultFuture::new(async move {
        let future = match catch_unwind(AssertUnwindSafe(function)) {
            Ok(future) => future,
            Err(payload) => return Err(captured(payload)),
        };
        AssertUnwindSafe(future)
            .catch_unwind()
            .await
            .map_err(captured)
    })
}

fn captured(payload: Box<dyn std::any::Any + Send>) -> PanicError {
    let error = PanicError::from_payload(payload);
    tracing::debug!(panic = error.message(), "captured panic at wrap boundary");
    error
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn wrap_returns_ok_for_normal_return() {
        assert_eq!(wrap(|| "value").ok(), Some("value"));
    }

    #[rstest]
    fn wrap_captures_formatted_panic() {
        let code = 7;
        let result: Result<(), _> = wrap(|| panic!("failed with code {code}"));
        assert_eq!(result.unwrap_err().message(), "failed with code 7");
    }

    #[rstest]
    fn wrap_keeps_non_string_payload() {
        let result: Result<(), _> = wrap(|| std::panic::panic_any(42_u32));
        let error = result.unwrap_err();
        assert_eq!(error.message(), "unknown panic payload");
        assert_eq!(error.downcast::<u32>().ok(), Some(42));
    }
}
