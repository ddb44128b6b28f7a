//! Records checked by the validators.
//!
//! These are plain data containers. Every text field is `Option<String>` so a
//! missing value and an empty one can both be represented.

use std::ops::{Deref, DerefMut};

use rust_decimal::Decimal;

// ============================================================================
// PERSON
// ============================================================================

/// Name fields shared by people-like records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl Person {
    /// Sets the first name.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Sets the last name.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }
}

// ============================================================================
// ADDRESS
// ============================================================================

/// Kind of postal address. Never validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AddressType {
    #[default]
    Shipping,
    Billing,
}

/// A postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    pub line: Option<String>,
    pub line2: Option<String>,
    pub address_type: AddressType,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

impl Address {
    #[must_use = "builder methods must be chained or built"]
    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.line = Some(line.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_line2(mut self, line2: impl Into<String>) -> Self {
        self.line2 = Some(line2.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_address_type(mut self, address_type: AddressType) -> Self {
        self.address_type = address_type;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }
}

// ============================================================================
// CUSTOMER
// ============================================================================

/// A customer: a [`Person`] with contact details, addresses and notes.
///
/// Name fields are reached through `Deref`, so `customer.last_name` works.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Customer {
    pub person: Person,
    pub addresses: Option<Vec<Address>>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    /// Free-form notes. Elements may be `None`.
    pub notes: Option<Vec<Option<String>>>,
    /// Carried along, never validated.
    pub total_purchases_amount: Option<Decimal>,
}

impl Customer {
    #[must_use = "builder methods must be chained or built"]
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.person.first_name = Some(first_name.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.person.last_name = Some(last_name.into());
        self
    }

    /// Appends an address, creating the list if needed.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_address(mut self, address: Address) -> Self {
        self.addresses.get_or_insert_with(Vec::new).push(address);
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Appends a note, creating the list if needed.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.get_or_insert_with(Vec::new).push(Some(note.into()));
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_total_purchases_amount(mut self, amount: Decimal) -> Self {
        self.total_purchases_amount = Some(amount);
        self
    }
}

impl Deref for Customer {
    type Target = Person;

    fn deref(&self) -> &Person {
        &self.person
    }
}

impl DerefMut for Customer {
    fn deref_mut(&mut self) -> &mut Person {
        &mut self.person
    }
}
