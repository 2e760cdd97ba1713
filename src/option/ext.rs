//! Extension trait adding value-returning extraction to `Option`.

use crate::error::OptionUnwrapError;

/// Forced extraction that reports absence as a value.
///
/// `Option::unwrap`/`Option::expect` panic on `None`. The methods here
/// return the same outcome as a `Result`, so the caller decides whether and
/// how to fail.
///
/// # Examples
///
/// ```rust
/// use optres::option::OptionExt;
///
/// assert_eq!(Some(3).try_unwrap(), Ok(3));
///
/// let error = None::<i32>.try_expect("port not configured").unwrap_err();
/// assert_eq!(error.to_string(), "port not configured");
/// ```
pub trait OptionExt<T>: Sized {
    /// Returns the contained value, or [`OptionUnwrapError`] with the generic
    /// message if this is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`OptionUnwrapError`] if `self` is `None`.
    fn try_unwrap(self) -> Result<T, OptionUnwrapError>;

    /// Returns the contained value, or [`OptionUnwrapError`] carrying
    /// `message` if this is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`OptionUnwrapError`] with `message` if `self` is `None`.
    fn try_expect(self, message: &str) -> Result<T, OptionUnwrapError>;
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn try_unwrap(self) -> Result<T, OptionUnwrapError> {
        self.ok_or_else(OptionUnwrapError::new)
    }

    #[inline]
    fn try_expect(self, message: &str) -> Result<T, OptionUnwrapError> {
        self.ok_or_else(|| OptionUnwrapError::with_message(message.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn try_unwrap_some() {
        assert_eq!(Some("value").try_unwrap(), Ok("value"));
    }

    #[rstest]
    fn try_unwrap_none_has_generic_message() {
        let error = None::<u8>.try_unwrap().unwrap_err();
        assert_eq!(error.message(), "Cannot unwrap value of a None variant");
    }

    #[rstest]
    fn try_expect_some_ignores_message() {
        assert_eq!(Some(1).try_expect("unused"), Ok(1));
    }

    #[rstest]
    fn try_expect_none_uses_caller_message() {
        let error = None::<u8>.try_expect("no value").unwrap_err();
        assert_eq!(error, OptionUnwrapError::with_message("no value"));
    }
}
