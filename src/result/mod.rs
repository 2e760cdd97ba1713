//! The `Result` algebra.
//!
//! `Result<T, E>` from the standard library is the two-variant success or
//! failure type this crate works with; its combinators (`map`, `map_err`,
//! `and`, `or`, `and_then`, `or_else`, `ok`, `err`, `unwrap_or_else`, ...)
//! already follow the boolean-style rules: `or` between two `Err`s returns
//! the second one, `and` between two `Err`s returns the first one.
//!
//! This module adds:
//!
//! - constructors usable as plain functions: [`ok`], [`err`]
//! - a runtime type check for type-erased values: [`is_result`]
//! - collect-all pairwise combination: [`ResultExt::and_try`] and
//!   [`CombinedResult`]
//! - group functions: [`all_results`] (fail fast), [`try_all_results`]
//!   (collect all), [`any_results`] (first success)
//! - [`transpose_result`]
//! - the panic capture boundary: [`wrap`] and [`wrap_async`]
//!
//! # Fail Fast vs. Collect All
//!
//! ```rust
//! use optres::result::{all_results, err, ok, try_all_results};
//!
//! let group = || (ok::<i32, &str>(1), err::<i32, _>("a"), err::<i32, _>("b"));
//!
//! assert_eq!(all_results(group()), Err("a"));
//!
//! let errors = try_all_results(group()).unwrap_err();
//! assert_eq!(errors.errors(), &["a", "b"]);
//! ```

mod combined;
mod ext;
mod group;
mod wrap;

use std::any::Any;

pub use combined::CombinedResult;
pub use ext::ResultExt;
pub use group::{ResultGroup, all_results, any_results, try_all_results};
pub use wrap::wrap;
#[cfg(feature = "async")]
pub use wrap::wrap_async;

/// Wraps `value` in `Ok`.
#[inline]
pub const fn ok<T, E>(value: T) -> Result<T, E> {
    Ok(value)
}

/// Wraps `error` in `Err`.
#[inline]
pub const fn err<T, E>(error: E) -> Result<T, E> {
    Err(error)
}

/// Returns `true` if `value` is a `Result<T, E>`.
///
/// # Examples
///
/// ```rust
/// use std::any::Any;
/// use optres::result::is_result;
///
/// let erased: Box<dyn Any> = Box::new(Ok::<u8, String>(1));
/// assert!(is_result::<u8, String>(erased.as_ref()));
/// assert!(!is_result::<u8, ()>(erased.as_ref()));
/// ```
pub fn is_result<T: 'static, E: 'static>(value: &dyn Any) -> bool {
    value.is::<Result<T, E>>()
}

/// Swaps a `Result` of an `Option` into an `Option` of a `Result`.
///
/// - `Ok(None)` becomes `None`
/// - `Ok(Some(v))` becomes `Some(Ok(v))`
/// - `Err(e)` becomes `Some(Err(e))`
///
/// This is the inverse of [`transpose_option`](crate::option::transpose_option).
///
/// # Examples
///
/// ```rust
/// use optres::option::transpose_option;
/// use optres::result::transpose_result;
///
/// let value: Result<Option<i32>, &str> = Ok(Some(3));
/// assert_eq!(transpose_result(value), Some(Ok(3)));
/// assert_eq!(transpose_option(transpose_result(value)), value);
/// ```
#[inline]
pub fn transpose_result<T, E>(result: Result<Option<T>, E>) -> Option<Result<T, E>> {
    match result {
        Ok(None) => None,
        Ok(Some(value)) => Some(Ok(value)),
        Err(error) => Some(Err(error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Ok(None), None)]
    #[case(Ok(Some(1)), Some(Ok(1)))]
    #[case(Err("e"), Some(Err("e")))]
    fn transpose_result_table(
        #[case] input: Result<Option<i32>, &'static str>,
        #[case] expected: Option<Result<i32, &'static str>>,
    ) {
        assert_eq!(transpose_result(input), expected);
    }

    #[rstest]
    fn constructors_build_variants() {
        assert_eq!(ok::<_, ()>(1), Ok(1));
        assert_eq!(err::<(), _>("e"), Err("e"));
    }
}
