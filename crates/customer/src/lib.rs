//! # roster-customer
//!
//! Validation rules for customer records and their postal addresses.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use roster_customer::{Address, Customer, validate_customer};
//!
//! let customer = Customer::default()
//!     .with_last_name("Doe")
//!     .with_address(Address::default().with_city("Austin"))
//!     .with_note("prefers email");
//!
//! let result = validate_customer(&customer);
//! assert!(!result.has_errors());
//! ```
//!
//! ## Custom rules
//!
//! Limits, the allowed country list and the phone and email patterns come from
//! a [`RulesConfig`], which can be loaded from JSON:
//!
//! ```rust,ignore
//! let config = RulesConfig::from_json(r#"{ "allowed_countries": ["Mexico"] }"#)?;
//! let validator = AddressValidator::new(&config)?;
//! let result = validator.validate(&address);
//! ```

pub mod address;
pub mod config;
pub mod customer;
pub mod entity;
pub mod error;
pub mod messages;

pub use address::{AddressValidator, validate_address};
pub use config::RulesConfig;
pub use customer::{CustomerValidator, validate_customer};
pub use entity::{Address, AddressType, Customer, Person};
pub use error::ConfigError;
pub use messages::MessageKey;
