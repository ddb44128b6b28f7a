//! Validator combinators
//!
//! Combinators build new validators out of existing ones:
//!
//! - [`And`]: run two validators in order, stop at the first failure
//! - [`When`]: apply a validator only when a predicate holds
//! - [`WithMessage`]: replace the message of a failure
//!
//! All of them are also reachable through
//! [`ValidateExt`](crate::foundation::ValidateExt).

pub mod and;
pub mod message;
pub mod when;

pub use and::And;
pub use message::WithMessage;
pub use when::When;
