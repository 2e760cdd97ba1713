//! Tests for the panic capture boundary (`wrap`, `wrap_async`).

use optres::error::PanicError;
use optres::result::wrap;
use rstest::rstest;

#[rstest]
fn test_wrap_passes_return_value_through() {
    assert_eq!(wrap(|| vec![1, 2]).ok(), Some(vec![1, 2]));
}

#[rstest]
fn test_wrap_captures_panic_message() {
    let result: Result<u8, PanicError> = wrap(|| panic!("division by zero"));
    let error = result.unwrap_err();
    assert_eq!(error.message(), "division by zero");
    assert_eq!(error.to_string(), "division by zero");
}

#[derive(Debug, PartialEq)]
struct Rejected {
    code: u16,
    reason: &'static str,
}

#[rstest]
fn test_wrap_surfaces_thrown_value_as_is() {
    let result: Result<(), PanicError> = wrap(|| {
        std::panic::panic_any(Rejected {
            code: 409,
            reason: "conflict",
        })
    });
    let error = result.unwrap_err();

    assert_eq!(
        error.downcast_ref::<Rejected>(),
        Some(&Rejected {
            code: 409,
            reason: "conflict"
        })
    );
    let rejected = error.downcast::<Rejected>().ok();
    assert_eq!(rejected.map(|rejected| rejected.code), Some(409));
}

#[rstest]
fn test_wrap_does_not_capture_returned_errors() {
    let result = wrap(|| "x".parse::<i32>());
    assert!(matches!(result, Ok(Err(_))));
}

#[rstest]
fn test_wrap_result_composes_with_question_mark() {
    fn checked(divisor: i32) -> Result<i32, PanicError> {
        let quotient = wrap(|| 10 / divisor)?;
        Ok(quotient * 2)
    }

    assert_eq!(checked(5).ok(), Some(4));
    assert!(checked(0).is_err());
}

#[cfg(feature = "async")]
mod async_boundary {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use optres::result::wrap_async;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn test_wrap_async_passes_output_through() {
        assert_eq!(wrap_async(|| async { 5 }).await.ok(), Some(5));
    }

    #[rstest]
    #[tokio::test]
    async fn test_wrap_async_captures_panic_while_polling() {
        let result: Result<(), _> = wrap_async(|| async {
            tokio::task::yield_now().await;
            panic!("failed after yielding");
        })
        .await;
        assert_eq!(result.unwrap_err().message(), "failed after yielding");
    }

    #[rstest]
    #[tokio::test]
    async fn test_wrap_async_captures_panic_while_creating_future() {
        let result = wrap_async(|| -> std::future::Ready<i32> { panic!("no future") }).await;
        assert_eq!(result.unwrap_err().message(), "no future");
    }

    #[rstest]
    #[tokio::test]
    async fn test_wrap_async_keeps_thrown_value() {
        let result: Result<(), _> = wrap_async(|| async {
            tokio::task::yield_now().await;
            std::panic::panic_any(super::Rejected {
                code: 503,
                reason: "unavailable",
            })
        })
        .await;
        let rejected = result.unwrap_err().downcast::<super::Rejected>().ok();
        assert_eq!(rejected.map(|rejected| rejected.reason), Some("unavailable"));
    }

    #[rstest]
    #[tokio::test]
    async fn test_wrap_async_is_lazy() {
        let started = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&started);
        let deferred = wrap_async(move || {
            flag.store(true, Ordering::SeqCst);
            async { 1 }
        });

        assert!(!started.load(Ordering::SeqCst));
        assert_eq!(deferred.await.ok(), Some(1));
        assert!(started.load(Ordering::SeqCst));
    }

    #[rstest]
    #[tokio::test]
    async fn test_wrap_async_chains_like_result_future() {
        let result = wrap_async(|| async { 20 })
            .map(|value| value + 1)
            .map_err(|error| error.message().to_string())
            .await;
        assert_eq!(result, Ok(21));
    }
}
