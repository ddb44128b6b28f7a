//! Whitespace classification and the text presence rules built on it.
//!
//! "Whitespace-only" is narrower than "blank": an empty string is
//! *not* whitespace, it is absent. Rule chains report absence through
//! [`Required`] and whitespace through [`NotWhitespace`], so a value never
//! triggers both.

use crate::foundation::ValidationError;

/// Returns `true` if the text is non-empty and consists only of whitespace.
///
/// Accepts both `&str` and `Option<&str>`; `None` and `""` are never
/// whitespace.
///
/// # Examples
///
/// ```rust,ignore
/// use roster_validator::validators::is_whitespace;
///
/// assert!(is_whitespace(" \t\n"));
/// assert!(!is_whitespace(""));
/// assert!(!is_whitespace(None));
/// assert!(!is_whitespace(" a "));
/// ```
#[must_use]
pub fn is_whitespace<'a>(text: impl Into<Option<&'a str>>) -> bool {
    match text.into() {
        Some(text) => !text.is_empty() && text.chars().all(char::is_whitespace),
        None => false,
    }
}

/// Returns `true` if the text is absent, empty or whitespace-only.
#[must_use]
pub fn is_blank<'a>(text: impl Into<Option<&'a str>>) -> bool {
    match text.into() {
        Some(text) => text.chars().all(char::is_whitespace),
        None => true,
    }
}

// ============================================================================
// REQUIRED
// ============================================================================

crate::validator! {
    /// Validates that a text value is present.
    ///
    /// Rule chains resolve a missing value to `""` before running their rules,
    /// so this fails for both null and empty input.
    pub Required for str;
    rule(input) { !input.is_empty() }
    error(input) { ValidationError::required() }
    fn required();
}

// ============================================================================
// NOT WHITESPACE
// ============================================================================

crate::validator! {
    /// Validates that a text value does not consist of whitespace only.
    ///
    /// Empty input passes; pair with [`Required`] to reject it.
    pub NotWhitespace for str;
    rule(input) { !is_whitespace(input) }
    error(input) { ValidationError::whitespace() }
    fn not_whitespace();
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;

    #[rstest]
    #[case::space(" ", true)]
    #[case::mixed("\t \n\r", true)]
    #[case::unicode("\u{2003}\u{00A0}", true)]
    #[case::empty("", false)]
    #[case::text("a", false)]
    #[case::padded(" a ", false)]
    fn test_is_whitespace(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_whitespace(input), expected);
    }

    #[test]
    fn test_is_whitespace_none() {
        assert!(!is_whitespace(None));
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(None));
        assert!(is_blank(""));
        assert!(is_blank("  "));
        assert!(!is_blank(" x"));
    }

    #[test]
    fn test_required() {
        assert!(required().validate("x").is_ok());
        assert!(required().validate(" ").is_ok());
        assert_eq!(required().validate("").unwrap_err().code, "required");
    }

    #[test]
    fn test_not_whitespace() {
        assert!(not_whitespace().validate("x").is_ok());
        assert!(not_whitespace().validate("").is_ok());
        assert_eq!(not_whitespace().validate("  ").unwrap_err().code, "whitespace");
    }
}
