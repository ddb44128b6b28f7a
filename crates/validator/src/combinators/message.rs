//! MESSAGE combinator - custom error messages

use crate::foundation::{Validate, ValidationError};
use crate::rules::Message;

// ============================================================================
// WITH MESSAGE COMBINATOR
// ============================================================================

/// Replaces the error message of a validator.
///
/// The code and parameters of the original failure are kept, so callers can
/// still match on `code` while users see the rendered template.
///
/// # Examples
///
/// ```rust,ignore
/// use roster_validator::combinators::WithMessage;
/// use roster_validator::foundation::Validate;
///
/// let validator = WithMessage::new(
///     max_length(50),
///     Message::new("First name: max {0} characters.").with_arg(50),
/// );
///
/// let error = validator.validate(&"a".repeat(51)).unwrap_err();
/// assert_eq!(error.message, "First name: max 50 characters.");
/// assert_eq!(error.code, "max_length");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: Message,
}

impl<V> WithMessage<V> {
    /// Wraps `inner`, reporting `message` on failure.
    pub fn new(inner: V, message: impl Into<Message>) -> Self {
        Self {
            inner,
            message: message.into(),
        }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Returns the custom message.
    pub fn message(&self) -> &Message {
        &self.message
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner
            .validate(input)
            .map_err(|original| original.with_message(self.message.render()))
    }
}

// ============================================================================
// TESTS
// ============================================================================
