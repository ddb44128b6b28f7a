//! Allowed-value validator for closed sets of strings.

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

/// Validates that a string is one of a fixed set of values.
///
/// Matching is exact and case-sensitive. The set keeps its declaration order
/// so the list reported on failure is stable.
///
/// # Examples
///
/// ```rust,ignore
/// use roster_validator::validators::allowed_set;
/// use roster_validator::foundation::Validate;
///
/// let validator = allowed_set(["United States", "Canada"]);
/// assert!(validator.validate("Canada").is_ok());
/// assert!(validator.validate("canada").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedSet {
    allowed: Vec<Cow<'static, str>>,
}

impl AllowedSet {
    /// Creates a validator accepting exactly the given values.
    pub fn new<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the allowed values in declaration order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.allowed.iter().map(AsRef::as_ref)
    }

    /// Joins the allowed values with a separator, e.g. `"United States, Canada"`.
    #[must_use]
    pub fn joined(&self, separator: &str) -> String {
        self.values().collect::<Vec<_>>().join(separator)
    }

    /// Returns true if the value is allowed.
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.allowed.iter().any(|allowed| allowed == value)
    }
}

impl Validate for AllowedSet {
    type Input = str;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if self.contains(input) {
            Ok(())
        } else {
            Err(ValidationError::not_allowed(self.joined(", ")))
        }
    }
}

/// Creates an [`AllowedSet`] validator.
pub fn allowed_set<I, S>(allowed: I) -> AllowedSet
where
    I: IntoIterator<Item = S>,
    S: Into<Cow<'static, str>>,
{
    AllowedSet::new(allowed)
}
