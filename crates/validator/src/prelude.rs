//! Prelude module for convenient imports.
//!
//! Provides a single `use roster_validator::prelude::*;` import that brings
//! in the traits, primitives, combinators and rule builder.
//!
//! # Examples
//!
//! ```rust,ignore
//! use roster_validator::prelude::*;
//!
//! let city = required().and(not_whitespace()).and(max_length(50));
//! let notes = min_count::<Option<String>>(1).and(no_blank_elements());
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{Validate, ValidateExt, ValidationError};
pub use crate::result::ValidationResult;

// ============================================================================
// VALIDATORS: Built-in rule primitives
// ============================================================================

pub use crate::validators::{
    AllowedSet, Email, MatchesRegex, MaxLength, MinCount, NoBlankElements, NotWhitespace, Phone,
    Required, allowed_set, email, is_blank, is_whitespace, matches_regex, max_length, min_count,
    no_blank_elements, not_whitespace, phone, required,
};

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{And, When, WithMessage};

// ============================================================================
// RULES: Declarative entity rule sets
// ============================================================================

pub use crate::rules::{Cascade, FieldRules, FieldValue, Message, RuleSet};
