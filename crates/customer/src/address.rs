//! Address validation.

use std::sync::LazyLock;

use roster_validator::ValidationResult;
use roster_validator::rules::{FieldRules, RuleSet};
use roster_validator::validators::{allowed_set, max_length, not_whitespace};

use crate::config::RulesConfig;
use crate::entity::Address;
use crate::error::ConfigError;
use crate::messages::MessageKey;

static DEFAULT_VALIDATOR: LazyLock<AddressValidator> = LazyLock::new(AddressValidator::default);

/// Validates an address with the default [`RulesConfig`].
///
/// Fields are checked in the order line, line2, city, postal code, state,
/// country. Each field reports at most one failure.
///
/// # Examples
///
/// ```rust,ignore
/// let address = Address::default().with_line("1 Main St").with_country("Japan");
/// let result = validate_address(&address);
/// assert!(result.has_errors());
/// ```
pub fn validate_address(address: &Address) -> ValidationResult {
    DEFAULT_VALIDATOR.validate(address)
}

/// Field rules for [`Address`], built once and reused.
#[derive(Debug)]
pub struct AddressValidator {
    rules: RuleSet<Address>,
}

impl AddressValidator {
    /// Builds the validator after checking the address settings of `config`.
    pub fn new(config: &RulesConfig) -> Result<Self, ConfigError> {
        config.address_limits()?;
        Ok(Self::build(config))
    }

    fn build(config: &RulesConfig) -> Self {
        let line_max = config.address_line_max_length;
        let countries = allowed_set(config.allowed_countries.clone());
        let country_list = countries.joined(", ");

        let rules = RuleSet::new("Address")
            .field(
                FieldRules::new("line", |a: &Address| a.line.as_deref())
                    .required()
                    .with_message(MessageKey::AddressLineRequired)
                    .must(not_whitespace())
                    .with_message(MessageKey::AddressLineWhitespace)
                    .must(max_length(line_max))
                    .with_message(MessageKey::AddressLineMaxLength.with_arg(line_max)),
            )
            .field(
                FieldRules::new("line2", |a: &Address| a.line2.as_deref())
                    .when_present()
                    .must(not_whitespace())
                    .with_message(MessageKey::AddressLine2Whitespace)
                    .must(max_length(line_max))
                    .with_message(MessageKey::AddressLine2MaxLength.with_arg(line_max)),
            )
            .field(required_text(
                "city",
                |a| a.city.as_deref(),
                config.city_max_length,
                [MessageKey::CityRequired, MessageKey::CityWhitespace, MessageKey::CityMaxLength],
            ))
            .field(required_text(
                "postal_code",
                |a| a.postal_code.as_deref(),
                config.postal_code_max_length,
                [
                    MessageKey::PostalCodeRequired,
                    MessageKey::PostalCodeWhitespace,
                    MessageKey::PostalCodeMaxLength,
                ],
            ))
            .field(required_text(
                "state",
                |a| a.state.as_deref(),
                config.state_max_length,
                [MessageKey::StateRequired, MessageKey::StateWhitespace, MessageKey::StateMaxLength],
            ))
            .field(
                FieldRules::new("country", |a: &Address| a.country.as_deref())
                    .required()
                    .with_message(MessageKey::CountryRequired)
                    .must(not_whitespace())
                    .with_message(MessageKey::CountryWhitespace)
                    .must(countries)
                    .with_message(MessageKey::CountryAllowed.with_arg(country_list)),
            );

        tracing::debug!(fields = rules.len(), "address validator built");
        Self { rules }
    }

    /// Runs every field chain against `address`.
    pub fn validate(&self, address: &Address) -> ValidationResult {
        self.rules.evaluate(address)
    }

    /// Returns the underlying rule set.
    #[must_use]
    pub fn rules(&self) -> &RuleSet<Address> {
        &self.rules
    }
}

impl Default for AddressValidator {
    fn default() -> Self {
        Self::build(&RulesConfig::default())
    }
}

/// Required -> not whitespace -> max length, with one message per step.
fn required_text(
    name: &'static str,
    accessor: fn(&Address) -> Option<&str>,
    max: usize,
    [required, whitespace, too_long]: [MessageKey; 3],
) -> FieldRules<Address, str> {
    FieldRules::new(name, accessor)
        .required()
        .with_message(required)
        .must(not_whitespace())
        .with_message(whitespace)
        .must(max_length(max))
        .with_message(too_long.with_arg(max))
}
