//! String format validators
//!
//! Validators that require a string to match a regular expression in full.

use std::borrow::Cow;
use std::sync::LazyLock;

use crate::foundation::ValidationError;

/// E.164 telephone number: optional leading `+`, a non-zero first digit and
/// 2 to 15 digits in total.
pub const PHONE_E164_PATTERN: &str = r"^\+?[1-9]\d{1,14}$";

/// Case-insensitive e-mail address.
///
/// The local part is either a quoted string or an unquoted run that starts and
/// ends with an ASCII letter or digit and never contains two dots in a row.
/// The domain is either a bracketed IPv4 literal or dot-separated labels
/// ending in a 2 to 17 character top-level label.
pub const EMAIL_PATTERN: &str = concat!(
    r#"(?i)^(?:"[^"]+"@|[0-9a-z](?:(?:\.?[-!#$%&'*+/=?^`{}|~\w])*\.?[0-9a-z])?@)"#,
    r"(?:\[(?:\d{1,3}\.){3}\d{1,3}\]|(?:[0-9a-z][-\w]*[0-9a-z]*\.)+[a-z0-9]{2,17})$",
);

static EMAIL_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(EMAIL_PATTERN).unwrap());

static PHONE_E164_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(PHONE_E164_PATTERN).unwrap());

// ============================================================================
// REGEX VALIDATOR
// ============================================================================

/// Compiles `pattern` so that it only matches an entire string.
///
/// An already anchored pattern is unaffected: `^\d+$` and `\d+` accept the
/// same inputs once wrapped.
pub fn anchored(pattern: &str) -> Result<regex::Regex, regex::Error> {
    regex::Regex::new(&format!("^(?:{pattern})$"))
}

crate::validator! {
    /// Validates that a whole string matches a regular expression.
    ///
    /// `format` names the expected format in the error (e.g. `"E.164"`).
    pub MatchesRegex { pattern: regex::Regex, source: String, format: Cow<'static, str> } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) {
        ValidationError::invalid_format(self.format.clone())
            .with_param("pattern", self.source.clone())
    }
    new(pattern: &str) -> regex::Error {
        Ok(Self {
            pattern: anchored(pattern)?,
            source: pattern.to_owned(),
            format: Cow::Borrowed("regex"),
        })
    }
    fn matches_regex(pattern: &str) -> regex::Error;
}

impl MatchesRegex {
    /// Returns the pattern as written, before anchoring.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Sets the format name reported on failure.
    #[must_use = "builder methods must be chained or built"]
    pub fn named(mut self, format: impl Into<Cow<'static, str>>) -> Self {
        self.format = format.into();
        self
    }
}

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates email format.
    pub Email { pattern: regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) { ValidationError::invalid_format("email") }
    new() {
        Self {
            pattern: EMAIL_REGEX.clone(),
        }
    }
    fn email();
}

// ============================================================================
// PHONE VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates an E.164 phone number.
    pub Phone { pattern: regex::Regex } for str;
    rule(self, input) { self.pattern.is_match(input) }
    error(self, input) { ValidationError::invalid_format("E.164") }
    new() {
        Self {
            pattern: PHONE_E164_REGEX.clone(),
        }
    }
    fn phone();
}

// ============================================================================
// TESTS
// ============================================================================
