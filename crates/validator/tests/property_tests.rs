//! Property-based tests for roster-validator.

use roster_validator::prelude::*;
use proptest::prelude::*;

// ============================================================================
// WHITESPACE PREDICATE
// ============================================================================

proptest! {
    #[test]
    fn whitespace_iff_all_chars_whitespace(s in "[ \t\r\n\u{00A0}a-z]{0,12}") {
        let expected = !s.is_empty() && s.chars().all(char::is_whitespace);
        prop_assert_eq!(is_whitespace(s.as_str()), expected);
    }

    #[test]
    fn whitespace_is_never_empty(s in "\\s*") {
        prop_assert_eq!(is_whitespace(s.as_str()), !s.is_empty());
    }

    #[test]
    fn blank_covers_empty_and_whitespace(s in ".{0,16}") {
        prop_assert_eq!(is_blank(s.as_str()), s.is_empty() || is_whitespace(s.as_str()));
    }
}

// ============================================================================
// IDEMPOTENCY: validate(x) == validate(x)
// ============================================================================

proptest! {
    #[test]
    fn max_length_idempotent(s in ".*") {
        let v = max_length(10);
        prop_assert_eq!(v.validate(&*s), v.validate(&*s));
    }

    #[test]
    fn email_idempotent(s in ".*") {
        let v = email();
        prop_assert_eq!(v.validate(&*s).is_ok(), v.validate(&*s).is_ok());
    }

    #[test]
    fn phone_idempotent(s in "\\+?[0-9]{0,18}") {
        let v = phone();
        prop_assert_eq!(v.validate(&*s).is_ok(), v.validate(&*s).is_ok());
    }
}

// ============================================================================
// PRIMITIVE LAWS
// ============================================================================

proptest! {
    #[test]
    fn max_length_counts_chars(s in "\\PC{0,20}") {
        let ok = max_length(10).validate(&*s).is_ok();
        prop_assert_eq!(ok, s.chars().count() <= 10);
    }

    #[test]
    fn e164_accepts_well_formed_numbers(first in 1u8..=9, rest in "[0-9]{1,14}", plus in any::<bool>()) {
        let number = format!("{}{first}{rest}", if plus { "+" } else { "" });
        prop_assert!(phone().validate(&*number).is_ok());
    }

    #[test]
    fn e164_rejects_leading_zero(rest in "[0-9]{1,14}") {
        let number = format!("+0{rest}");
        prop_assert!(phone().validate(&*number).is_err());
    }

    #[test]
    fn and_fails_iff_either_fails(s in ".{0,30}") {
        let a = not_whitespace();
        let b = max_length(10);
        let combined = a.and(b);

        let a_ok = a.validate(&*s).is_ok();
        let b_ok = b.validate(&*s).is_ok();
        prop_assert_eq!(combined.validate(&*s).is_ok(), a_ok && b_ok);
    }

    #[test]
    fn min_count_law(items in prop::collection::vec(any::<u8>(), 0..5), min in 0usize..5) {
        prop_assert_eq!(min_count::<u8>(min).validate(&items).is_ok(), items.len() >= min);
    }
}
