//! Person facade over a masked person document.
//!
//! # Responsibility
//! - Wire each typed list attribute to its wire key and item kind.
//! - Expose identity and change tracking of the underlying model.
//!
//! # Invariants
//! - Every accessor is gated by the field mask. Read accessors never
//!   create attributes.
//! - Attributes outside the typed vocabulary are carried through untouched.
//!
//! # See also
//! - `crate::list` for the projection and removal API.
//! - `crate::field::PersonField` for the vocabulary.

use crate::field::{FieldMask, PersonField};
use crate::list::{ItemKind, ListAttribute, ListView};
use crate::model::{MaskedModel, ModelResult};
use serde_json::Value;
use std::fmt::{Display, Formatter};

pub mod addresses;
pub mod birthdays;
pub mod email_addresses;
pub mod events;
pub mod names;
pub mod phone_numbers;

pub use addresses::{Address, Addresses};
pub use birthdays::{Birthday, Birthdays};
pub use email_addresses::{EmailAddress, EmailAddresses};
pub use events::{Event, Events};
pub use names::{Name, Names};
pub use phone_numbers::{PhoneNumber, PhoneNumbers};

/// One person record plus the mask it was fetched with.
#[derive(Debug, Clone)]
pub struct Person {
    model: MaskedModel<PersonField>,
}

impl Person {
    /// Wraps a fetched person document.
    ///
    /// # Errors
    /// - `InvalidDocument` when `document` is not an object with a string
    ///   `resourceName`.
    pub fn new(document: Value, field_mask: FieldMask<PersonField>) -> ModelResult<Self> {
        Ok(Self {
            model: MaskedModel::new(document, field_mask)?,
        })
    }

    pub fn identifier(&self) -> &str {
        self.model.identifier()
    }

    pub fn field_mask(&self) -> &FieldMask<PersonField> {
        self.model.field_mask()
    }

    /// Deep copy of the current document, ready to send back.
    pub fn model_snapshot(&self) -> Value {
        self.model.snapshot()
    }

    pub fn has_changes(&self) -> bool {
        self.model.has_changes()
    }

    /// Display name when names are requested and set, identifier otherwise.
    pub fn display_label(&self) -> &str {
        self.names()
            .ok()
            .and_then(|names| names.display_name())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| self.identifier())
    }

    pub fn addresses(&self) -> ModelResult<ListView<'_, Addresses>> {
        self.list(PersonField::Addresses)
    }

    pub fn addresses_mut(&mut self) -> ModelResult<ListAttribute<'_, Addresses>> {
        self.list_mut(PersonField::Addresses)
    }

    pub fn birthdays(&self) -> ModelResult<ListView<'_, Birthdays>> {
        self.list(PersonField::Birthdays)
    }

    pub fn birthdays_mut(&mut self) -> ModelResult<ListAttribute<'_, Birthdays>> {
        self.list_mut(PersonField::Birthdays)
    }

    pub fn email_addresses(&self) -> ModelResult<ListView<'_, EmailAddresses>> {
        self.list(PersonField::EmailAddresses)
    }

    pub fn email_addresses_mut(&mut self) -> ModelResult<ListAttribute<'_, EmailAddresses>> {
        self.list_mut(PersonField::EmailAddresses)
    }

    pub fn events(&self) -> ModelResult<ListView<'_, Events>> {
        self.list(PersonField::Events)
    }

    pub fn events_mut(&mut self) -> ModelResult<ListAttribute<'_, Events>> {
        self.list_mut(PersonField::Events)
    }

    pub fn names(&self) -> ModelResult<ListView<'_, Names>> {
        self.list(PersonField::Names)
    }

    pub fn names_mut(&mut self) -> ModelResult<ListAttribute<'_, Names>> {
        self.list_mut(PersonField::Names)
    }

    pub fn phone_numbers(&self) -> ModelResult<ListView<'_, PhoneNumbers>> {
        self.list(PersonField::PhoneNumbers)
    }

    pub fn phone_numbers_mut(&mut self) -> ModelResult<ListAttribute<'_, PhoneNumbers>> {
        self.list_mut(PersonField::PhoneNumbers)
    }

    fn list<K: ItemKind>(&self, field: PersonField) -> ModelResult<ListView<'_, K>> {
        Ok(ListView::new(self.model.read(field)?))
    }

    fn list_mut<K: ItemKind>(&mut self, field: PersonField) -> ModelResult<ListAttribute<'_, K>> {
        let slot = self.model.write_slot(field, Value::Array(Vec::new()))?;
        Ok(ListAttribute::new(slot))
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.model)
    }
}
