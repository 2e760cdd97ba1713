//! Error produced when the wrap boundary captures a panic.

use std::any::Any;
use std::fmt;

const UNKNOWN_PAYLOAD: &str = "unknown panic payload";

/// A panic captured by [`wrap`](crate::result::wrap) or
/// [`wrap_async`](crate::result::wrap_async).
///
/// The original payload is kept as raised, so a value thrown with
/// [`std::panic::panic_any`] can be recovered with
/// [`downcast_ref`](Self::downcast_ref) or [`downcast`](Self::downcast).
/// The message is derived from it: payloads raised with `panic!("...")`
/// (`&str` or `String`) give their text, any other payload gives
/// `"unknown panic payload"`.
///
/// # Examples
///
/// ```rust
/// use optres::result::wrap;
///
/// let result = wrap(|| -> i32 { panic!("division by zero") });
/// assert_eq!(result.unwrap_err().message(), "division by zero");
/// ```
#[derive(thiserror::Error)]
#[error("{message}")]
pub struct PanicError {
    message: String,
    payload: Box<dyn Any + Send>,
}

impl PanicError {
    /// Creates a `PanicError` carrying `message`, which is also the payload.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            payload: Box::new(message.clone()),
            message,
        }
    }

    /// Builds the error from the payload returned by `catch_unwind`.
    #[must_use]
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| UNKNOWN_PAYLOAD.to_string());
        Self { message, payload }
    }

    /// Returns the panic message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the payload the panic was raised with.
    pub fn payload(&self) -> &(dyn Any + Send) {
        self.payload.as_ref()
    }

    /// Returns the payload if it is a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref()
    }

    /// Takes the payload out if it is a `T`, otherwise returns the error
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns `self` if the payload is not a `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optres::result::wrap;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Rejected(u32);
    ///
    /// let error = wrap(|| std::panic::panic_any(Rejected(9))).unwrap_err();
    /// assert_eq!(error.downcast::<Rejected>().ok(), Some(Rejected(9)));
    /// ```
    pub fn downcast<T: Any>(self) -> Result<T, Self> {
        match self.payload.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(payload) => Err(Self {
                message: self.message,
                payload,
            }),
        }
    }

    /// Consumes the error, returning the payload.
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }
}

impl fmt::Debug for PanicError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("PanicError")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(PanicError: Send, std::error::Error);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, PartialEq)]
    struct Code(u8);

    #[rstest]
    fn str_payload() {
        let error = PanicError::from_payload(Box::new("boom"));
        assert_eq!(error.message(), "boom");
        assert_eq!(error.downcast_ref::<&str>(), Some(&"boom"));
    }

    #[rstest]
    fn string_payload() {
        let error = PanicError::from_payload(Box::new(String::from("boom")));
        assert_eq!(error.message(), "boom");
    }

    #[rstest]
    fn foreign_payload_keeps_value() {
        let error = PanicError::from_payload(Box::new(Code(42)));
        assert_eq!(error.to_string(), UNKNOWN_PAYLOAD);
        assert_eq!(error.downcast_ref::<Code>(), Some(&Code(42)));
        assert!(error.payload().is::<Code>());
    }

    #[rstest]
    fn downcast_to_wrong_type_returns_error_intact() {
        let error = PanicError::from_payload(Box::new(Code(1)));
        let error = error.downcast::<String>().unwrap_err();
        assert_eq!(error.into_payload().downcast::<Code>().ok(), Some(Box::new(Code(1))));
    }

    #[rstest]
    fn new_uses_message_as_payload() {
        let error = PanicError::new("manual");
        assert_eq!(error.downcast_ref::<String>().map(String::as_str), Some("manual"));
    }
}
