//! Message catalogue for customer and address failures.

use std::fmt;

use roster_validator::rules::{Message, format_template};

/// Identifies one user-facing failure message.
///
/// Templates with a `{0}` placeholder take the limit, format name or allowed
/// list as their argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    // Person
    FirstNameWhitespace,
    FirstNameMaxLength,
    LastNameRequired,
    LastNameWhitespace,
    LastNameMaxLength,

    // Customer
    AddressesCountMin,
    PhoneNumberWhitespace,
    PhoneNumberFormat,
    EmailWhitespace,
    EmailFormat,
    NotesCountMin,
    NotesBlankElement,

    // Address
    AddressLineRequired,
    AddressLineWhitespace,
    AddressLineMaxLength,
    AddressLine2Whitespace,
    AddressLine2MaxLength,
    CityRequired,
    CityWhitespace,
    CityMaxLength,
    PostalCodeRequired,
    PostalCodeWhitespace,
    PostalCodeMaxLength,
    StateRequired,
    StateWhitespace,
    StateMaxLength,
    CountryRequired,
    CountryWhitespace,
    CountryAllowed,
}

impl MessageKey {
    /// Every key, in catalogue order.
    pub const ALL: [Self; 29] = [
        Self::FirstNameWhitespace,
        Self::FirstNameMaxLength,
        Self::LastNameRequired,
        Self::LastNameWhitespace,
        Self::LastNameMaxLength,
        Self::AddressesCountMin,
        Self::PhoneNumberWhitespace,
        Self::PhoneNumberFormat,
        Self::EmailWhitespace,
        Self::EmailFormat,
        Self::NotesCountMin,
        Self::NotesBlankElement,
        Self::AddressLineRequired,
        Self::AddressLineWhitespace,
        Self::AddressLineMaxLength,
        Self::AddressLine2Whitespace,
        Self::AddressLine2MaxLength,
        Self::CityRequired,
        Self::CityWhitespace,
        Self::CityMaxLength,
        Self::PostalCodeRequired,
        Self::PostalCodeWhitespace,
        Self::PostalCodeMaxLength,
        Self::StateRequired,
        Self::StateWhitespace,
        Self::StateMaxLength,
        Self::CountryRequired,
        Self::CountryWhitespace,
        Self::CountryAllowed,
    ];

    /// Returns the raw template.
    #[must_use]
    pub const fn template(self) -> &'static str {
        match self {
            Self::FirstNameWhitespace => "First name cannot consist of white-space characters.",
            Self::FirstNameMaxLength => "First name: max {0} characters.",
            Self::LastNameRequired => "Last name is required.",
            Self::LastNameWhitespace => "Last name cannot consist of white-space characters.",
            Self::LastNameMaxLength => "Last name: max {0} characters.",
            Self::AddressesCountMin => "Addresses: at least {0} required.",
            Self::PhoneNumberWhitespace => "Phone number cannot contain white-space characters.",
            Self::PhoneNumberFormat => "Phone number: must be in {0} format.",
            Self::EmailWhitespace => "Email cannot contain white-space characters.",
            Self::EmailFormat => "Invalid email.",
            Self::NotesCountMin => "Notes: at least {0} required.",
            Self::NotesBlankElement => {
                "Notes cannot be empty or consist of white-space characters."
            }
            Self::AddressLineRequired => "Address line is required.",
            Self::AddressLineWhitespace => "Address line cannot consist of white-space characters.",
            Self::AddressLineMaxLength => "Address line: max {0} characters.",
            Self::AddressLine2Whitespace => {
                "Address line2 cannot consist of white-space characters."
            }
            Self::AddressLine2MaxLength => "Address line2: max {0} characters.",
            Self::CityRequired => "City is required.",
            Self::CityWhitespace => "City cannot consist of white-space characters.",
            Self::CityMaxLength => "City: max {0} characters.",
            Self::PostalCodeRequired => "Postal code is required.",
            Self::PostalCodeWhitespace => "Postal code cannot consist of white-space characters.",
            Self::PostalCodeMaxLength => "Postal code: max {0} characters.",
            Self::StateRequired => "State is required.",
            Self::StateWhitespace => "State cannot consist of white-space characters.",
            Self::StateMaxLength => "State: max {0} characters.",
            Self::CountryRequired => "Country is required.",
            Self::CountryWhitespace => "Country cannot consist of white-space characters.",
            Self::CountryAllowed => "Country: allowed only {0}.",
        }
    }

    /// Returns true if the template takes an argument.
    #[must_use]
    pub fn takes_arg(self) -> bool {
        self.template().contains("{0}")
    }

    /// Renders the template with `arg`.
    #[must_use]
    pub fn render(self, arg: impl fmt::Display) -> String {
        format_template(self.template(), arg)
    }

    /// Builds a [`Message`] carrying `arg`.
    pub fn with_arg(self, arg: impl fmt::Display) -> Message {
        Message::new(self.template()).with_arg(arg)
    }
}

impl From<MessageKey> for Message {
    fn from(key: MessageKey) -> Self {
        Message::new(key.template())
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template())
    }
}
