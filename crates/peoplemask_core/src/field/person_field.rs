//! Attribute vocabulary of person resources.

use super::MaskField;
use std::fmt::{Display, Formatter};

/// Wire key for postal addresses.
pub const PERSON_FIELD_ADDRESSES: &str = "addresses";
/// Wire key for birthdays.
pub const PERSON_FIELD_BIRTHDAYS: &str = "birthdays";
/// Wire key for email addresses.
pub const PERSON_FIELD_EMAIL_ADDRESSES: &str = "emailAddresses";
/// Wire key for events (anniversaries and similar dates).
pub const PERSON_FIELD_EVENTS: &str = "events";
/// Wire key for names.
pub const PERSON_FIELD_NAMES: &str = "names";
/// Wire key for phone numbers.
pub const PERSON_FIELD_PHONE_NUMBERS: &str = "phoneNumbers";

/// Requestable attributes of a person.
///
/// Only attributes with typed accessors are listed. Everything else in a
/// person document is carried through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PersonField {
    Addresses,
    Birthdays,
    EmailAddresses,
    Events,
    Names,
    PhoneNumbers,
}

const ALL_PERSON_FIELDS: &[PersonField] = &[
    PersonField::Addresses,
    PersonField::Birthdays,
    PersonField::EmailAddresses,
    PersonField::Events,
    PersonField::Names,
    PersonField::PhoneNumbers,
];

impl MaskField for PersonField {
    fn wire_key(self) -> &'static str {
        match self {
            Self::Addresses => PERSON_FIELD_ADDRESSES,
            Self::Birthdays => PERSON_FIELD_BIRTHDAYS,
            Self::EmailAddresses => PERSON_FIELD_EMAIL_ADDRESSES,
            Self::Events => PERSON_FIELD_EVENTS,
            Self::Names => PERSON_FIELD_NAMES,
            Self::PhoneNumbers => PERSON_FIELD_PHONE_NUMBERS,
        }
    }

    fn all() -> &'static [Self] {
        ALL_PERSON_FIELDS
    }
}

impl Display for PersonField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.wire_key())
    }
}
