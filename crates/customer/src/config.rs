//! Limits, allowed values and patterns used by the validators.

use serde::{Deserialize, Serialize};

use roster_validator::validators::{EMAIL_PATTERN, MatchesRegex, PHONE_E164_PATTERN, matches_regex};

use crate::error::ConfigError;

/// Rule configuration shared by [`AddressValidator`](crate::AddressValidator)
/// and [`CustomerValidator`](crate::CustomerValidator).
///
/// Missing JSON fields fall back to the defaults:
///
/// ```rust,ignore
/// let config = RulesConfig::from_json(r#"{ "allowed_countries": ["Mexico"] }"#)?;
/// assert_eq!(config.city_max_length, 50);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Max characters in first and last names.
    pub name_max_length: usize,
    /// Max characters in both address lines.
    pub address_line_max_length: usize,
    pub city_max_length: usize,
    pub postal_code_max_length: usize,
    pub state_max_length: usize,
    /// Accepted countries, in the order they are listed in messages.
    pub allowed_countries: Vec<String>,
    pub addresses_count_min: usize,
    pub notes_count_min: usize,
    /// Format name shown in the phone number message.
    pub phone_number_format: String,
    pub phone_number_pattern: String,
    pub email_pattern: String,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            name_max_length: 50,
            address_line_max_length: 100,
            city_max_length: 50,
            postal_code_max_length: 6,
            state_max_length: 20,
            allowed_countries: vec!["United States".to_owned(), "Canada".to_owned()],
            addresses_count_min: 1,
            notes_count_min: 1,
            phone_number_format: "E.164".to_owned(),
            phone_number_pattern: PHONE_E164_PATTERN.to_owned(),
            email_pattern: EMAIL_PATTERN.to_owned(),
        }
    }
}

impl RulesConfig {
    /// Parses and validates a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks limits, the country set and both patterns.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.customer_limits()?;
        self.address_limits()?;
        self.phone_rule()?;
        self.email_rule()?;
        Ok(())
    }

    /// Compiles [`phone_number_pattern`](Self::phone_number_pattern) into a
    /// whole-string rule reporting [`phone_number_format`](Self::phone_number_format).
    pub fn phone_rule(&self) -> Result<MatchesRegex, ConfigError> {
        compile("phone_number_pattern", &self.phone_number_pattern)
            .map(|rule| rule.named(self.phone_number_format.clone()))
    }

    /// Compiles [`email_pattern`](Self::email_pattern) into a whole-string rule.
    pub fn email_rule(&self) -> Result<MatchesRegex, ConfigError> {
        compile("email_pattern", &self.email_pattern).map(|rule| rule.named("email"))
    }

    /// Limits read by [`CustomerValidator`](crate::CustomerValidator).
    pub(crate) fn customer_limits(&self) -> Result<(), ConfigError> {
        non_zero(&[
            ("name_max_length", self.name_max_length),
            ("addresses_count_min", self.addresses_count_min),
            ("notes_count_min", self.notes_count_min),
        ])
    }

    /// Limits and the country set read by [`AddressValidator`](crate::AddressValidator).
    pub(crate) fn address_limits(&self) -> Result<(), ConfigError> {
        non_zero(&[
            ("address_line_max_length", self.address_line_max_length),
            ("city_max_length", self.city_max_length),
            ("postal_code_max_length", self.postal_code_max_length),
            ("state_max_length", self.state_max_length),
        ])?;
        if self.allowed_countries.is_empty() {
            return Err(ConfigError::NoAllowedCountries);
        }
        Ok(())
    }
}

fn non_zero(limits: &[(&'static str, usize)]) -> Result<(), ConfigError> {
    match limits.iter().find(|(_, limit)| *limit == 0) {
        Some(&(name, _)) => Err(ConfigError::ZeroLimit { name }),
        None => Ok(()),
    }
}

fn compile(name: &'static str, pattern: &str) -> Result<MatchesRegex, ConfigError> {
    matches_regex(pattern).map_err(|source| ConfigError::InvalidPattern { name, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_validator::foundation::Validate;

    #[test]
    fn test_default_is_valid() {
        assert!(RulesConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = RulesConfig::from_json(r#"{ "city_max_length": 30 }"#).unwrap();
        assert_eq!(config.city_max_length, 30);
        assert_eq!(config.postal_code_max_length, 6);
        assert_eq!(config.allowed_countries, vec!["United States", "Canada"]);
    }

    #[test]
    fn test_zero_limit_rejected() {
        let config = RulesConfig {
            state_max_length: 0,
            ..RulesConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroLimit {
                name: "state_max_length"
            })
        ));
    }

    #[test]
    fn test_empty_countries_rejected() {
        let error = RulesConfig::from_json(r#"{ "allowed_countries": [] }"#).unwrap_err();
        assert!(matches!(error, ConfigError::NoAllowedCountries));
    }

    #[test]
    fn test_bad_pattern_rejected() {
        let error = RulesConfig::from_json(r#"{ "email_pattern": "([a-z" }"#).unwrap_err();
        assert!(matches!(
            error,
            ConfigError::InvalidPattern {
                name: "email_pattern",
                ..
            }
        ));
    }

    #[test]
    fn test_patterns_match_whole_value() {
        let json = r#"{ "phone_number_pattern": "\\d{3}-\\d{3}-\\d{4}" }"#;
        let config = RulesConfig::from_json(json).unwrap();
        let rule = config.phone_rule().unwrap();
        assert!(rule.validate("555-123-4567").is_ok());
        assert!(rule.validate("call 555-123-4567 now").is_err());
    }

    #[test]
    fn test_entity_limits_are_independent() {
        let config = RulesConfig {
            allowed_countries: Vec::new(),
            city_max_length: 0,
            ..RulesConfig::default()
        };
        assert!(config.customer_limits().is_ok());
        assert!(config.address_limits().is_err());

        let config = RulesConfig {
            notes_count_min: 0,
            ..RulesConfig::default()
        };
        assert!(config.address_limits().is_ok());
        assert!(matches!(
            config.customer_limits(),
            Err(ConfigError::ZeroLimit {
                name: "notes_count_min"
            })
        ));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let error = RulesConfig::from_json("{ not json").unwrap_err();
        assert_eq!(error.code(), "CONFIG_JSON");
    }
}
