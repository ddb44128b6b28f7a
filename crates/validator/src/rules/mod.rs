//! Declarative rule sets for entity validation.
//!
//! A [`RuleSet`] holds one [`FieldRules`] chain per field. Each chain reads its
//! field through an accessor, resolves a missing value to an empty one, and runs
//! its rules in order until one fails (see [`Cascade`]).
//!
//! # Examples
//!
//! ```rust,ignore
//! use roster_validator::prelude::*;
//!
//! let rules = RuleSet::new("Address")
//!     .field(
//!         FieldRules::new("city", |a: &Address| a.city.as_deref())
//!             .required()
//!             .with_message("City is required.")
//!             .must(max_length(50))
//!             .with_message(Message::new("City: max {0} characters.").with_arg(50)),
//!     );
//!
//! let result = rules.evaluate(&address);
//! for message in result.messages() {
//!     println!("{message}");
//! }
//! ```

pub mod field;
pub mod message;
pub mod set;

pub use field::{Cascade, FieldCheck, FieldRules, FieldValue};
pub use message::{Message, format_template};
pub use set::RuleSet;
