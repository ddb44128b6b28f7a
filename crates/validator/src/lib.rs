//! # roster-validator
//!
//! A composable, type-safe field validation engine.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use roster_validator::prelude::*;
//!
//! // Compose primitives with .and() / .when() / .with_message()
//! let name = not_whitespace().and(max_length(50));
//! assert!(name.validate("Ada").is_ok());
//! ```
//!
//! ## Declaring entity validators
//!
//! [`RuleSet`](rules::RuleSet) collects one [`FieldRules`](rules::FieldRules)
//! chain per field. Chains stop at the first failing rule by default, while the
//! set always evaluates every field, so a single run reports every problem:
//!
//! ```rust,ignore
//! let rules = RuleSet::<Person>::new("person")
//!     .field(
//!         FieldRules::new("last_name", |p: &Person| p.last_name.as_deref())
//!             .required().with_message("Last name is required.")
//!             .must(not_whitespace()).with_message("Last name cannot be blank.")
//!             .must(max_length(50)).with_message(Message::new("max {0}").with_arg(50)),
//!     );
//!
//! let result = rules.evaluate(&person);
//! for message in result.messages() {
//!     println!("{message}");
//! }
//! ```
//!
//! ## Built-in Rule Primitives
//!
//! - **Text**: [`Required`](validators::Required), [`NotWhitespace`](validators::NotWhitespace),
//!   [`MaxLength`](validators::MaxLength), [`AllowedSet`](validators::AllowedSet),
//!   [`MatchesRegex`](validators::MatchesRegex), [`Email`](validators::Email),
//!   [`Phone`](validators::Phone)
//! - **Collection**: [`MinCount`](validators::MinCount),
//!   [`NoBlankElements`](validators::NoBlankElements)

// ValidationError is returned by value from every validator.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod result;
pub mod rules;
pub mod validators;

pub use foundation::{Validate, ValidateExt, ValidationError};
pub use result::ValidationResult;
