//! Built-in rule primitives
//!
//! Small, stateless checks that field rule chains are assembled from.
//!
//! # Categories
//!
//! - **Text presence**: [`Required`], [`NotWhitespace`] and the
//!   [`is_whitespace`] / [`is_blank`] predicates
//! - **Text shape**: [`MaxLength`], [`AllowedSet`], [`MatchesRegex`],
//!   [`Email`], [`Phone`]
//! - **Collection**: [`MinCount`], [`NoBlankElements`]
//!
//! # Examples
//!
//! ```rust,ignore
//! use roster_validator::prelude::*;
//!
//! let city = required().and(not_whitespace()).and(max_length(50));
//! let country = required().and(allowed_set(["United States", "Canada"]));
//! let notes = min_count::<Option<String>>(1).and(no_blank_elements());
//! ```

pub mod allowed;
pub mod content;
pub mod elements;
pub mod length;
pub mod size;
pub mod whitespace;

pub use allowed::{AllowedSet, allowed_set};
pub use content::{
    EMAIL_PATTERN, Email, MatchesRegex, PHONE_E164_PATTERN, Phone, anchored, email, matches_regex,
    phone,
};
pub use elements::{NoBlankElements, no_blank_elements};
pub use length::{MaxLength, max_length};
pub use size::{MinCount, min_count};
pub use whitespace::{NotWhitespace, Required, is_blank, is_whitespace, not_whitespace, required};
