//! Customer validation.

use std::sync::LazyLock;

use roster_validator::ValidationResult;
use roster_validator::foundation::Validate;
use roster_validator::rules::{FieldRules, RuleSet};
use roster_validator::validators::{
    email, max_length, min_count, no_blank_elements, not_whitespace, phone,
};

use crate::config::RulesConfig;
use crate::entity::{Address, Customer};
use crate::error::ConfigError;
use crate::messages::MessageKey;

static DEFAULT_VALIDATOR: LazyLock<CustomerValidator> = LazyLock::new(CustomerValidator::default);

/// Validates a customer with the default [`RulesConfig`].
///
/// Fields are checked in the order first name, last name, addresses, phone
/// number, email, notes, so a run yields at most six messages. Addresses are
/// only counted here; use [`validate_address`](crate::validate_address) for
/// their fields.
pub fn validate_customer(customer: &Customer) -> ValidationResult {
    DEFAULT_VALIDATOR.validate(customer)
}

/// Field rules for [`Customer`], built once and reused.
#[derive(Debug)]
pub struct CustomerValidator {
    rules: RuleSet<Customer>,
}

impl CustomerValidator {
    /// Builds the validator after checking the customer settings of `config`
    /// and compiling its patterns. Address settings are not consulted.
    pub fn new(config: &RulesConfig) -> Result<Self, ConfigError> {
        config.customer_limits()?;
        Ok(Self::build(config, config.phone_rule()?, config.email_rule()?))
    }

    fn build<P, M>(config: &RulesConfig, phone_rule: P, email_rule: M) -> Self
    where
        P: Validate<Input = str> + Send + Sync + 'static,
        M: Validate<Input = str> + Send + Sync + 'static,
    {
        let name_max = config.name_max_length;

        let rules = RuleSet::new("Customer")
            .field(
                FieldRules::new("first_name", |c: &Customer| c.first_name.as_deref())
                    .when_present()
                    .must(not_whitespace())
                    .with_message(MessageKey::FirstNameWhitespace)
                    .must(max_length(name_max))
                    .with_message(MessageKey::FirstNameMaxLength.with_arg(name_max)),
            )
            .field(
                FieldRules::new("last_name", |c: &Customer| c.last_name.as_deref())
                    .required()
                    .with_message(MessageKey::LastNameRequired)
                    .must(not_whitespace())
                    .with_message(MessageKey::LastNameWhitespace)
                    .must(max_length(name_max))
                    .with_message(MessageKey::LastNameMaxLength.with_arg(name_max)),
            )
            .field(
                FieldRules::new("addresses", |c: &Customer| c.addresses.as_deref())
                    .must(min_count::<Address>(config.addresses_count_min))
                    .with_message(
                        MessageKey::AddressesCountMin.with_arg(config.addresses_count_min),
                    ),
            )
            .field(
                FieldRules::new("phone_number", |c: &Customer| c.phone_number.as_deref())
                    .when_present()
                    .must(not_whitespace())
                    .with_message(MessageKey::PhoneNumberWhitespace)
                    .must(phone_rule)
                    .with_message(
                        MessageKey::PhoneNumberFormat.with_arg(&config.phone_number_format),
                    ),
            )
            .field(
                FieldRules::new("email", |c: &Customer| c.email.as_deref())
                    .when_present()
                    .must(not_whitespace())
                    .with_message(MessageKey::EmailWhitespace)
                    .must(email_rule)
                    .with_message(MessageKey::EmailFormat),
            )
            .field(
                FieldRules::new("notes", |c: &Customer| c.notes.as_deref())
                    .must(min_count::<Option<String>>(config.notes_count_min))
                    .with_message(MessageKey::NotesCountMin.with_arg(config.notes_count_min))
                    .must(no_blank_elements())
                    .with_message(MessageKey::NotesBlankElement),
            );

        tracing::debug!(fields = rules.len(), "customer validator built");
        Self { rules }
    }

    /// Runs every field chain against `customer`.
    pub fn validate(&self, customer: &Customer) -> ValidationResult {
        self.rules.evaluate(customer)
    }

    /// Returns the underlying rule set.
    #[must_use]
    pub fn rules(&self) -> &RuleSet<Customer> {
        &self.rules
    }
}

impl Default for CustomerValidator {
    fn default() -> Self {
        Self::build(&RulesConfig::default(), phone(), email())
    }
}
