//! Sequential conjunction: run validators in order, stop at the first failure.
//!
//! [`And`] is the typed form of a rule chain with stop-on-failure cascade:
//! `not_whitespace().and(max_length(50))` never reports a length error for a
//! whitespace-only value.

use crate::foundation::{Validate, ValidationError};

/// Runs `left`, then `right` only if `left` passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    left: L,
    right: R,
}

impl<L, R> And<L, R> {
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    pub fn left(&self) -> &L {
        &self.left
    }

    pub fn right(&self) -> &R {
        &self.right
    }

    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)
    }
}
