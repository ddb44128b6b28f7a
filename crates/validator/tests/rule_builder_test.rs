//! Integration tests for declarative rule sets.

use pretty_assertions::assert_eq;
use roster_validator::prelude::*;
use rstest::rstest;

#[derive(Debug, Default, Clone)]
struct Account {
    handle: Option<String>,
    contact_email: Option<String>,
    phone: Option<String>,
    wants_sms: bool,
    labels: Option<Vec<Option<String>>>,
}

fn account_rules() -> RuleSet<Account> {
    RuleSet::new("Account")
        .field(
            FieldRules::new("handle", |a: &Account| a.handle.as_deref())
                .required()
                .with_message("Handle is required.")
                .must(not_whitespace())
                .with_message("Handle: cannot contain only whitespaces.")
                .must(max_length(8))
                .with_message(Message::new("Handle: max {0} characters.").with_arg(8)),
        )
        .field(
            FieldRules::new("contact_email", |a: &Account| a.contact_email.as_deref())
                .when_present()
                .must(not_whitespace())
                .with_message("Email: cannot contain only whitespaces.")
                .must(email())
                .with_message("Invalid email."),
        )
        .field(
            FieldRules::new("phone", |a: &Account| a.phone.as_deref())
                .when(|a: &Account| a.wants_sms)
                .required()
                .with_message("Phone is required for SMS.")
                .must(phone())
                .with_message(Message::new("Phone: must be in {0} format.").with_arg("E.164")),
        )
        .field(
            FieldRules::new("labels", |a: &Account| a.labels.as_deref())
                .must(min_count::<Option<String>>(1))
                .with_message(Message::new("Labels: at least {0} required.").with_arg(1))
                .must(no_blank_elements())
                .with_message("Labels: each label must have a value."),
        )
}

fn valid_account() -> Account {
    Account {
        handle: Some("ada".into()),
        contact_email: Some("ada@example.com".into()),
        phone: Some("+123456".into()),
        wants_sms: true,
        labels: Some(vec![Some("vip".into())]),
    }
}

#[test]
fn valid_account_has_no_errors() {
    let result = account_rules().evaluate(&valid_account());
    assert!(result.is_valid(), "{result}");
}

#[test]
fn every_field_is_evaluated() {
    let account = Account {
        handle: Some("   ".into()),
        contact_email: Some("@nope".into()),
        phone: Some("(111)222".into()),
        wants_sms: true,
        labels: None,
    };
    let result = account_rules().evaluate(&account);
    assert_eq!(
        result.messages(),
        vec![
            "Handle: cannot contain only whitespaces.",
            "Invalid email.",
            "Phone: must be in E.164 format.",
            "Labels: at least 1 required.",
        ]
    );
    let fields: Vec<_> = result.errors().iter().filter_map(|e| e.field()).collect();
    assert_eq!(fields, vec!["handle", "contact_email", "phone", "labels"]);
}

#[rstest]
#[case::missing(None)]
#[case::empty(Some(Vec::new()))]
fn missing_and_empty_labels_match(#[case] labels: Option<Vec<Option<String>>>) {
    let account = Account {
        labels,
        ..valid_account()
    };
    assert_eq!(
        account_rules().evaluate(&account).messages(),
        vec!["Labels: at least 1 required."]
    );
}

#[rstest]
#[case::null(None)]
#[case::empty(Some(String::new()))]
#[case::blank(Some(" \t".to_owned()))]
fn blank_label_reported(#[case] label: Option<String>) {
    let account = Account {
        labels: Some(vec![Some("ok".into()), label]),
        ..valid_account()
    };
    assert_eq!(
        account_rules().evaluate(&account).messages(),
        vec!["Labels: each label must have a value."]
    );
}

#[test]
fn conditional_field_skipped_when_predicate_false() {
    let account = Account {
        phone: None,
        wants_sms: false,
        ..valid_account()
    };
    assert!(account_rules().evaluate(&account).is_valid());

    let account = Account {
        phone: None,
        ..valid_account()
    };
    assert_eq!(
        account_rules().evaluate(&account).messages(),
        vec!["Phone is required for SMS."]
    );
}

#[test]
fn optional_field_skipped_when_absent() {
    for contact_email in [None, Some(String::new())] {
        let account = Account {
            contact_email,
            ..valid_account()
        };
        assert!(account_rules().evaluate(&account).is_valid());
    }
}

#[test]
fn each_field_reports_at_most_one_error() {
    let account = Account {
        handle: Some(" ".repeat(20)),
        contact_email: Some("  ".into()),
        labels: Some(vec![]),
        ..valid_account()
    };
    let result = account_rules().evaluate(&account);
    for field in ["handle", "contact_email", "phone", "labels"] {
        assert!(result.for_field(field).count() <= 1, "{field}");
    }
    assert_eq!(result.len(), 3);
}

#[test]
fn continue_cascade_collects_all_failures() {
    let rules = RuleSet::new("Account").field(
        FieldRules::new("handle", |a: &Account| a.handle.as_deref())
            .cascade(Cascade::Continue)
            .must(not_whitespace())
            .with_message("blank")
            .must(max_length(8))
            .with_message("long"),
    );
    let account = Account {
        handle: Some(" ".repeat(20)),
        ..Account::default()
    };
    assert_eq!(rules.evaluate(&account).messages(), vec!["blank", "long"]);
}

#[test]
fn repeated_evaluation_is_identical() {
    let rules = account_rules();
    let account = Account::default();
    assert_eq!(rules.evaluate(&account), rules.evaluate(&account));
}
