//! The `Validate` trait and its fluent extension.

use crate::foundation::ValidationError;
use crate::rules::Message;

pub use crate::combinators::and::And;
pub use crate::combinators::message::WithMessage;
pub use crate::combinators::when::When;

// ============================================================================
// VALIDATE
// ============================================================================

/// A reusable check over values of type [`Input`](Validate::Input).
///
/// Implementations are pure: the same input always yields the same outcome
/// and validating never mutates the validator, so one instance can be shared
/// across threads and calls.
///
/// ```rust,ignore
/// use roster_validator::foundation::{Validate, ValidationError};
///
/// struct NoDigits;
///
/// impl Validate for NoDigits {
///     type Input = str;
///
///     fn validate(&self, input: &str) -> Result<(), ValidationError> {
///         if input.chars().any(|c| c.is_ascii_digit()) {
///             Err(ValidationError::new("digits", "Digits are not allowed."))
///         } else {
///             Ok(())
///         }
///     }
/// }
/// ```
pub trait Validate {
    /// The validated type; unsized types such as `str` and `[T]` are allowed.
    type Input: ?Sized;

    /// Returns `Err` describing the first problem found, if any.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

impl<V> Validate for Box<V>
where
    V: Validate + ?Sized,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

impl<V> Validate for &V
where
    V: Validate + ?Sized,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

// ============================================================================
// VALIDATE EXT
// ============================================================================

/// Combinator methods available on every [`Validate`] implementation.
///
/// ```rust,ignore
/// use roster_validator::prelude::*;
///
/// let nickname = not_whitespace()
///     .and(max_length(20))
///     .with_message("Nickname is invalid.");
///
/// assert!(nickname.validate("ada").is_ok());
/// assert!(nickname.validate("   ").is_err());
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Runs `other` after `self`, stopping at the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Runs `self` only for inputs matching `condition`.
    fn when<C>(self, condition: C) -> When<Self, C>
    where
        C: Fn(&Self::Input) -> bool,
    {
        When::new(self, condition)
    }

    /// Replaces the message of any failure, keeping its code and params.
    fn with_message(self, message: impl Into<Message>) -> WithMessage<Self> {
        WithMessage::new(self, message)
    }
}

impl<T: Validate> ValidateExt for T {}
