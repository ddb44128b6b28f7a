/// Error raised while building validators from a [`RulesConfig`](crate::RulesConfig).
///
/// Validation failures are never reported through this type; they are data in
/// a [`ValidationResult`](roster_validator::ValidationResult).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A configured pattern does not compile.
    #[error("invalid `{name}` pattern: {source}")]
    InvalidPattern {
        name: &'static str,
        #[source]
        source: regex::Error,
    },

    /// A length or count limit is zero.
    #[error("`{name}` must be greater than zero")]
    ZeroLimit { name: &'static str },

    /// No country is allowed, so every address would fail.
    #[error("`allowed_countries` must not be empty")]
    NoAllowedCountries,

    /// The JSON document could not be parsed.
    #[error("malformed rules config: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConfigError {
    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::InvalidPattern { .. } => "CONFIG_INVALID_PATTERN",
            Self::ZeroLimit { .. } => "CONFIG_ZERO_LIMIT",
            Self::NoAllowedCountries => "CONFIG_NO_COUNTRIES",
            Self::Json(_) => "CONFIG_JSON",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let error = ConfigError::ZeroLimit {
            name: "city_max_length",
        };
        assert_eq!(error.to_string(), "`city_max_length` must be greater than zero");
        assert_eq!(error.code(), "CONFIG_ZERO_LIMIT");
    }

    #[test]
    fn test_pattern_error_keeps_source() {
        let source = regex::Regex::new("(").unwrap_err();
        let error = ConfigError::InvalidPattern {
            name: "email_pattern",
            source,
        };
        assert!(error.to_string().starts_with("invalid `email_pattern` pattern:"));
        assert!(std::error::Error::source(&error).is_some());
    }
}
