//! The validation contract: [`Validate`], [`ValidateExt`] and [`ValidationError`].
//!
//! A validator is a small immutable value that checks one input type:
//!
//! ```rust,ignore
//! use roster_validator::foundation::{Validate, ValidateExt};
//!
//! let city = not_whitespace().and(max_length(50));
//! assert!(city.validate("Toronto").is_ok());
//! ```
//!
//! Failures are structured. Each carries a stable `code`, the `field` it was
//! reported for and the parameters its message was rendered from:
//!
//! ```rust,ignore
//! let error = ValidationError::max_length(50, 61).with_field("city");
//! assert_eq!(error.param("max"), Some("50"));
//! ```

pub mod error;
pub mod traits;

pub use error::ValidationError;
pub use traits::{Validate, ValidateExt};
