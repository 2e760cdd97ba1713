//! The `Option` algebra.
//!
//! `Option<T>` from the standard library already is the closed two-variant
//! type this crate works with: `Some(value)` holds exactly one value and
//! `None` carries no payload and allocates nothing. This module adds
//! what the standard combinator surface lacks:
//!
//! - constructors usable as plain functions: [`some`], [`none`],
//!   [`option_from`]
//! - forced extraction as a value: [`OptionExt::try_unwrap`],
//!   [`OptionExt::try_expect`]
//! - a runtime type check for values crossing a `dyn Any` boundary:
//!   [`is_option`]
//! - group functions: [`all_options`], [`any_options`]
//! - [`transpose_option`]
//!
//! # Combinator Table
//!
//! | Operation | `Some(v)` | `None` |
//! |---|---|---|
//! | `map(f)` | `Some(f(v))` | `None` |
//! | `filter(p)` | `Some(v)` if `p(&v)`, else `None` | `None` |
//! | `and(o)` | `o` | `None` |
//! | `or(o)` | `Some(v)` | `o` |
//! | `xor(o)` | `Some(v)` if `o` is `None`, else `None` | `o` |
//! | `and_then(f)` | `f(v)` | `None` |
//! | `or_else(f)` | `Some(v)` | `f()` |
//! | `ok_or(e)` | `Ok(v)` | `Err(e)` |
//!
//! # Examples
//!
//! ```rust
//! use optres::option::{all_options, any_options, none, some, OptionExt};
//!
//! assert_eq!(all_options((some(1), some("a"))), Some((1, "a")));
//! assert_eq!(all_options((some(1), none::<&str>())), None);
//! assert_eq!(any_options([none(), some(2), some(3)]), Some(2));
//!
//! let missing: Option<i32> = none();
//! assert!(missing.try_unwrap().is_err());
//! ```

mod ext;
mod group;

use std::any::Any;

pub use ext::OptionExt;
pub use group::{OptionGroup, all_options, any_options};

/// Wraps `value` in `Some`.
#[inline]
pub const fn some<T>(value: T) -> Option<T> {
    Some(value)
}

/// Returns the absent value.
///
/// `None` is a constant: no allocation happens and every call yields an
/// equal value.
#[inline]
pub const fn none<T>() -> Option<T> {
    None
}

/// Converts a possibly-absent value into an `Option`.
///
/// A plain value becomes `Some`, an `Option` is passed through unchanged, so
/// absence is always `None`.
///
/// # Examples
///
/// ```rust
/// use optres::option::option_from;
///
/// assert_eq!(option_from(5), Some(5));
/// assert_eq!(option_from::<i32>(None), None);
/// ```
#[inline]
pub fn option_from<T>(value: impl Into<Option<T>>) -> Option<T> {
    value.into()
}

/// Returns `true` if `value` is an `Option<T>`.
///
/// Useful to validate type-erased values, for example those pulled out of a
/// heterogeneous registry.
///
/// # Examples
///
/// ```rust
/// use std::any::Any;
/// use optres::option::is_option;
///
/// let erased: Box<dyn Any> = Box::new(Some(3_i32));
/// assert!(is_option::<i32>(erased.as_ref()));
/// assert!(!is_option::<i32>(&3_i32));
/// ```
pub fn is_option<T: 'static>(value: &dyn Any) -> bool {
    value.is::<Option<T>>()
}

/// Swaps an `Option` of a `Result` into a `Result` of an `Option`.
///
/// - `None` becomes `Ok(None)`
/// - `Some(Ok(v))` becomes `Ok(Some(v))`
/// - `Some(Err(e))` becomes `Err(e)`
///
/// This is the inverse of [`transpose_result`](crate::result::transpose_result).
///
/// # Examples
///
/// ```rust
/// use optres::option::transpose_option;
///
/// assert_eq!(transpose_option::<i32, String>(None), Ok(None));
/// assert_eq!(transpose_option::<i32, String>(Some(Ok(1))), Ok(Some(1)));
/// assert_eq!(transpose_option::<i32, &str>(Some(Err("bad"))), Err("bad"));
/// ```
#[inline]
pub fn transpose_option<T, E>(option: Option<Result<T, E>>) -> Result<Option<T>, E> {
    match option {
        None => Ok(None),
        Some(Ok(value)) => Ok(Some(value)),
        Some(Err(error)) => Err(error),
    }
}
