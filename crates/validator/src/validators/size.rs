//! Collection size validators

use crate::foundation::{Validate, ValidationError};
use std::marker::PhantomData;

// ============================================================================
// MIN COUNT
// ============================================================================

/// Validates that a collection has at least a minimum number of elements.
///
/// Rule chains validate a missing collection as an empty one, so a null list
/// and an empty list fail with the same error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MinCount<T> {
    min: usize,
    _phantom: PhantomData<fn(&T)>,
}

impl<T> MinCount<T> {
    /// Returns the configured minimum.
    #[must_use]
    pub fn min(&self) -> usize {
        self.min
    }
}

impl<T> Validate for MinCount<T> {
    type Input = [T];

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let count = input.len();
        if count >= self.min {
            Ok(())
        } else {
            Err(ValidationError::min_count(self.min, count))
        }
    }
}

/// Creates a validator that checks if a collection has at least `min` elements.
///
/// # Examples
///
/// ```
/// use roster_validator::validators::min_count;
/// use roster_validator::foundation::Validate;
///
/// let validator = min_count::<i32>(1);
/// assert!(validator.validate(&[7]).is_ok());
/// assert!(validator.validate(&[]).is_err());
/// ```
#[must_use]
pub fn min_count<T>(min: usize) -> MinCount<T> {
    MinCount {
        min,
        _phantom: PhantomData,
    }
}
