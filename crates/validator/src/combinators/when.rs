//! Conditional application of a validator.

use crate::foundation::{Validate, ValidationError};

/// Runs the inner validator only when `condition(input)` holds; otherwise passes.
///
/// Entity-level conditions (a predicate over the whole record rather than the
/// value) live on [`FieldRules::when`](crate::rules::FieldRules::when).
///
/// ```rust,ignore
/// let validator = When::new(phone(), |s: &str| !s.is_empty());
/// assert!(validator.validate("").is_ok());
/// assert!(validator.validate("(111)222").is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct When<V, C> {
    validator: V,
    condition: C,
}

impl<V, C> When<V, C> {
    pub fn new(validator: V, condition: C) -> Self {
        Self {
            validator,
            condition,
        }
    }

    pub fn validator(&self) -> &V {
        &self.validator
    }

    pub fn into_parts(self) -> (V, C) {
        (self.validator, self.condition)
    }
}

impl<V, C> Validate for When<V, C>
where
    V: Validate,
    C: Fn(&V::Input) -> bool,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if (self.condition)(input) {
            self.validator.validate(input)
        } else {
            Ok(())
        }
    }
}
