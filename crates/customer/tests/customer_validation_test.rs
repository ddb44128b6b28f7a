//! Integration tests for customer validation.

use pretty_assertions::assert_eq;
use roster_customer::{Address, Customer, validate_customer};
use rstest::rstest;

fn valid_address() -> Address {
    Address::default()
        .with_line("line")
        .with_city("city")
        .with_postal_code("code")
        .with_state("state")
        .with_country("United States")
}

fn valid_filled_customer() -> Customer {
    Customer::default()
        .with_first_name("MyName")
        .with_last_name("MyName")
        .with_address(valid_address())
        .with_phone_number("+123456")
        .with_email("my@email.com")
        .with_note("my note")
}

fn messages(customer: &Customer) -> Vec<String> {
    validate_customer(customer)
        .messages()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

// ============================================================================
// VALID
// ============================================================================

#[test]
fn filled_customer_is_valid() {
    assert!(!validate_customer(&valid_filled_customer()).has_errors());
}

#[test]
fn minimal_customer_is_valid() {
    let customer = Customer::default()
        .with_last_name("Doe")
        .with_address(valid_address())
        .with_note("ok");
    assert!(validate_customer(&customer).is_valid());
}

#[rstest]
#[case::null(None)]
#[case::empty(Some(String::new()))]
fn optional_fields_accept_null_and_empty(#[case] value: Option<String>) {
    let mut customer = valid_filled_customer();
    customer.first_name = value.clone();
    customer.phone_number = value.clone();
    customer.email = value;
    assert!(validate_customer(&customer).is_valid());
}

// ============================================================================
// INVALID: WHOLE RECORD
// ============================================================================

#[test]
fn missing_required_fields_in_field_order() {
    let mut customer = Customer::default();
    customer.addresses = Some(Vec::new());
    assert_eq!(
        messages(&customer),
        vec![
            "Last name is required.",
            "Addresses: at least 1 required.",
            "Notes: at least 1 required.",
        ]
    );
}

#[test]
fn every_field_invalid_yields_six_errors() {
    let mut customer = Customer::default()
        .with_first_name("a".repeat(51))
        .with_last_name(" ")
        .with_phone_number("(111)222")
        .with_email("@my.email");
    customer.addresses = Some(Vec::new());
    customer.notes = Some(Vec::new());

    let result = validate_customer(&customer);
    assert_eq!(result.len(), 6);
    assert_eq!(
        result.messages(),
        vec![
            "First name: max 50 characters.",
            "Last name cannot consist of white-space characters.",
            "Addresses: at least 1 required.",
            "Phone number: must be in E.164 format.",
            "Invalid email.",
            "Notes: at least 1 required.",
        ]
    );
    let fields: Vec<_> = result.errors().iter().filter_map(|e| e.field()).collect();
    assert_eq!(
        fields,
        vec!["first_name", "last_name", "addresses", "phone_number", "email", "notes"]
    );
}

// ============================================================================
// INVALID: SINGLE FIELD
// ============================================================================

#[test]
fn first_name_too_long() {
    let customer = valid_filled_customer().with_first_name("a".repeat(51));
    assert_eq!(messages(&customer), vec!["First name: max 50 characters."]);
}

#[test]
fn first_name_at_limit_is_valid() {
    let customer = valid_filled_customer().with_first_name("a".repeat(50));
    assert!(validate_customer(&customer).is_valid());
}

#[test]
fn first_name_whitespace() {
    let customer = valid_filled_customer().with_first_name(" ");
    assert_eq!(
        messages(&customer),
        vec!["First name cannot consist of white-space characters."]
    );
}

#[test]
fn long_whitespace_name_reports_whitespace_only() {
    let customer = valid_filled_customer()
        .with_first_name(" ".repeat(60))
        .with_last_name(" ".repeat(60));
    assert_eq!(
        messages(&customer),
        vec![
            "First name cannot consist of white-space characters.",
            "Last name cannot consist of white-space characters.",
        ]
    );
}

#[test]
fn last_name_too_long() {
    let customer = valid_filled_customer().with_last_name("a".repeat(51));
    assert_eq!(messages(&customer), vec!["Last name: max 50 characters."]);
}

#[rstest]
#[case::null(None)]
#[case::empty(Some(String::new()))]
fn last_name_required(#[case] last_name: Option<String>) {
    let mut customer = valid_filled_customer();
    customer.last_name = last_name;
    assert_eq!(messages(&customer), vec!["Last name is required."]);
}

#[test]
fn last_name_whitespace() {
    let customer = valid_filled_customer().with_last_name("\t \n");
    assert_eq!(
        messages(&customer),
        vec!["Last name cannot consist of white-space characters."]
    );
}

#[rstest]
#[case::null(None)]
#[case::empty(Some(Vec::new()))]
fn addresses_count_min(#[case] addresses: Option<Vec<Address>>) {
    let mut customer = valid_filled_customer();
    customer.addresses = addresses;
    assert_eq!(messages(&customer), vec!["Addresses: at least 1 required."]);
}

#[test]
fn invalid_address_fields_are_not_checked() {
    let customer = Customer {
        addresses: Some(vec![Address::default()]),
        ..valid_filled_customer()
    };
    assert!(validate_customer(&customer).is_valid());
}

#[test]
fn phone_number_format() {
    let customer = valid_filled_customer().with_phone_number("(111)222");
    assert_eq!(messages(&customer), vec!["Phone number: must be in E.164 format."]);
}

#[test]
fn phone_number_whitespace() {
    let customer = valid_filled_customer().with_phone_number(" ");
    assert_eq!(
        messages(&customer),
        vec!["Phone number cannot contain white-space characters."]
    );
}

#[test]
fn email_format() {
    let customer = valid_filled_customer().with_email("@my.email");
    assert_eq!(messages(&customer), vec!["Invalid email."]);
}

#[test]
fn email_whitespace() {
    let customer = valid_filled_customer().with_email("  ");
    assert_eq!(
        messages(&customer),
        vec!["Email cannot contain white-space characters."]
    );
}

#[rstest]
#[case::null(None)]
#[case::empty(Some(Vec::new()))]
fn notes_count_min(#[case] notes: Option<Vec<Option<String>>>) {
    let mut customer = valid_filled_customer();
    customer.notes = notes;
    assert_eq!(messages(&customer), vec!["Notes: at least 1 required."]);
}

#[rstest]
#[case::whitespace(vec![Some(" ".to_owned())])]
#[case::empty(vec![Some(String::new())])]
#[case::null(vec![None])]
#[case::after_valid(vec![Some("ok".to_owned()), Some("\t".to_owned())])]
fn notes_blank_element(#[case] notes: Vec<Option<String>>) {
    let mut customer = valid_filled_customer();
    customer.notes = Some(notes);
    assert_eq!(
        messages(&customer),
        vec!["Notes cannot be empty or consist of white-space characters."]
    );
}

#[test]
fn total_purchases_amount_is_ignored() {
    let customer =
        valid_filled_customer().with_total_purchases_amount(rust_decimal::Decimal::NEGATIVE_ONE);
    assert!(validate_customer(&customer).is_valid());
}
