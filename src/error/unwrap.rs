//! Error returned when a value is forcibly extracted from `None`.

use std::borrow::Cow;

const DEFAULT_MESSAGE: &str = "Cannot unwrap value of a None variant";

/// The error produced by forced extraction from an absent value.
///
/// [`OptionExt::try_unwrap`](crate::option::OptionExt::try_unwrap) returns it
/// with a generic message, [`OptionExt::try_expect`](crate::option::OptionExt::try_expect)
/// with the message supplied by the caller.
///
/// # Examples
///
/// ```rust
/// use optres::error::OptionUnwrapError;
///
/// assert_eq!(
///     OptionUnwrapError::new().to_string(),
///     "Cannot unwrap value of a None variant"
/// );
/// assert_eq!(OptionUnwrapError::with_message("no user").to_string(), "no user");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{message}")]
pub struct OptionUnwrapError {
    message: Cow<'static, str>,
}

impl OptionUnwrapError {
    /// Creates the error with the generic message.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            message: Cow::Borrowed(DEFAULT_MESSAGE),
        }
    }

    /// Creates the error with a caller-supplied message.
    #[must_use]
    pub fn with_message(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the message carried by this error.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for OptionUnwrapError {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_message() {
        assert_eq!(OptionUnwrapError::default().message(), DEFAULT_MESSAGE);
    }

    #[rstest]
    #[case("missing configuration")]
    #[case("")]
    fn custom_message_is_displayed_verbatim(#[case] message: &'static str) {
        let error = OptionUnwrapError::with_message(message);
        assert_eq!(error.to_string(), message);
    }

    #[rstest]
    fn owned_messages_are_accepted() {
        let error = OptionUnwrapError::with_message(format!("user {} not found", 7));
        assert_eq!(error.message(), "user 7 not found");
    }
}
