//! Structured validation failures.
//!
//! Codes and default messages are `&'static str`; only rendered templates and
//! parameters allocate.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// One failed rule: what failed (`code`), what to tell the user (`message`),
/// where (`field`) and the values involved (`params`).
///
/// ```rust,ignore
/// let error = ValidationError::new("max_length", "City: max 50 characters.")
///     .with_field("city")
///     .with_param("max", "50")
///     .with_param("actual", "61");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Stable code such as `required`, `whitespace` or `max_length`.
    pub code: Cow<'static, str>,

    /// User-facing message.
    pub message: Cow<'static, str>,

    /// Field identifier such as `last_name`, set by the rule set.
    pub field: Option<Cow<'static, str>>,

    /// Ordered key-value pairs, e.g. `[("max", "50"), ("actual", "61")]`.
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,

    /// Per-field errors when this error stands for a whole entity.
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates an error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
            nested: Vec::new(),
        }
    }

    /// Sets the field identifier.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Appends a parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Replaces the message, keeping code, field and parameters.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Replaces the nested errors.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested(mut self, errors: Vec<ValidationError>) -> Self {
        self.nested = errors;
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns the field identifier, if any.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Returns true if the error nests other errors.
    #[must_use]
    pub fn has_nested(&self) -> bool {
        !self.nested.is_empty()
    }
}

/// Renders as `field: message [code; key=value, ...]`, nested errors one per
/// indented line.
impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.field() {
            Some(field) => write!(f, "{field}: {} [{}", self.message, self.code)?,
            None => write!(f, "{} [{}", self.message, self.code)?,
        }
        let mut separator = "; ";
        for (key, value) in &self.params {
            write!(f, "{separator}{key}={value}")?;
            separator = ", ";
        }
        f.write_str("]")?;

        for inner in &self.nested {
            write!(f, "\n  - {inner}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// PRIMITIVE FAILURES
// ============================================================================

impl ValidationError {
    /// Missing or empty value.
    pub fn required() -> Self {
        Self::new("required", "Value is required")
    }

    /// Whitespace-only value.
    pub fn whitespace() -> Self {
        Self::new("whitespace", "Value cannot consist of white-space characters")
    }

    /// Text longer than `max` characters.
    pub fn max_length(max: usize, actual: usize) -> Self {
        Self::new("max_length", format!("Must be at most {max} characters"))
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Text not in the `expected` format.
    pub fn invalid_format(expected: impl Into<Cow<'static, str>>) -> Self {
        let expected = expected.into();
        Self::new("invalid_format", format!("Must be in {expected} format"))
            .with_param("expected", expected)
    }

    /// Value outside the allowed set; `allowed` is the joined list.
    pub fn not_allowed(allowed: impl Into<Cow<'static, str>>) -> Self {
        let allowed = allowed.into();
        Self::new("not_allowed", format!("Allowed only {allowed}")).with_param("allowed", allowed)
    }

    /// Collection with fewer than `min` elements.
    pub fn min_count(min: usize, actual: usize) -> Self {
        Self::new("min_count", format!("At least {min} required"))
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Null, empty or whitespace-only element at `index`.
    pub fn blank_element(index: usize) -> Self {
        Self::new(
            "blank_element",
            "Elements cannot be empty or consist of white-space characters",
        )
        .with_param("index", index.to_string())
    }
}

// ============================================================================
// TESTS
// ============================================================================
