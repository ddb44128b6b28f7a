//! String length validators
//!
//! Length is measured in Unicode scalar values (chars).

use crate::foundation::ValidationError;

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::validator! {
    /// Validates that a string does not exceed a maximum length.
    ///
    /// Counts chars, not UTF-16 code units: a character outside the Basic
    /// Multilingual Plane such as an emoji counts once here where UTF-16
    /// based limits count it twice.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize } for str;
    rule(self, input) { input.chars().count() <= self.max }
    error(self, input) { ValidationError::max_length(self.max, input.chars().count()) }
    fn max_length(max: usize);
}
