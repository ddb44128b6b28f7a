//! Message templates with a single positional placeholder.

use std::borrow::Cow;
use std::fmt;

/// The placeholder substituted by [`Message::render`].
pub const PLACEHOLDER: &str = "{0}";

/// A user-facing message: a template plus at most one argument.
///
/// Templates use `{0}` for the argument, e.g. `"City: max {0} characters."`.
/// A template without an argument renders unchanged.
///
/// ```rust,ignore
/// let message = Message::new("City: max {0} characters.").with_arg(50);
/// assert_eq!(message.render(), "City: max 50 characters.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    template: Cow<'static, str>,
    arg: Option<String>,
}

impl Message {
    /// Creates a message from a template.
    pub fn new(template: impl Into<Cow<'static, str>>) -> Self {
        Self {
            template: template.into(),
            arg: None,
        }
    }

    /// Sets the value substituted for `{0}`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_arg(mut self, arg: impl fmt::Display) -> Self {
        self.arg = Some(arg.to_string());
        self
    }

    /// Returns the raw template.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Returns the argument, if any.
    #[must_use]
    pub fn arg(&self) -> Option<&str> {
        self.arg.as_deref()
    }

    /// Renders the template. Static templates without an argument are not copied.
    #[must_use]
    pub fn render(&self) -> Cow<'static, str> {
        match &self.arg {
            Some(arg) => Cow::Owned(format_template(&self.template, arg)),
            None => self.template.clone(),
        }
    }
}

impl From<&'static str> for Message {
    fn from(template: &'static str) -> Self {
        Self::new(template)
    }
}

impl From<String> for Message {
    fn from(template: String) -> Self {
        Self::new(template)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Substitutes `arg` for every `{0}` in `template`.
#[must_use]
pub fn format_template(template: &str, arg: impl fmt::Display) -> String {
    template.replace(PLACEHOLDER, &arg.to_string())
}
