//! Name items and the single-name shortcuts.
//!
//! # Responsibility
//! - Expose the structured name parts of a person.
//! - Offer list-level getters and setters that act on the one name element.
//!
//! # Invariants
//! - A person holds at most one name element.
//! - List-level setters create the element on first write. Getters never do.

use crate::list::{Item, ItemKind, ListAttribute, ListView};
use crate::model::ModelResult;
use serde_json::{Map, Value};
use std::ops::{Deref, DerefMut};

/// Remote-computed display form. Read-only.
pub const NAME_FIELD_DISPLAY_NAME: &str = "displayName";
/// Remote-computed "Last, First" form. Read-only.
pub const NAME_FIELD_DISPLAY_NAME_LAST_FIRST: &str = "displayNameLastFirst";
pub const NAME_FIELD_UNSTRUCTURED_NAME: &str = "unstructuredName";
pub const NAME_FIELD_FAMILY_NAME: &str = "familyName";
pub const NAME_FIELD_GIVEN_NAME: &str = "givenName";
pub const NAME_FIELD_MIDDLE_NAME: &str = "middleName";
pub const NAME_FIELD_HONORIFIC_PREFIX: &str = "honorificPrefix";
pub const NAME_FIELD_HONORIFIC_SUFFIX: &str = "honorificSuffix";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Names;

impl ItemKind for Names {
    const NAME: &'static str = "names";
    const SINGLE_VALUED: bool = true;
}

pub type Name<E> = Item<E, Names>;

impl<E: Deref<Target = Value>> Item<E, Names> {
    pub fn display_name(&self) -> &str {
        self.string(NAME_FIELD_DISPLAY_NAME)
    }

    pub fn display_name_last_first(&self) -> &str {
        self.string(NAME_FIELD_DISPLAY_NAME_LAST_FIRST)
    }

    pub fn unstructured_name(&self) -> &str {
        self.string(NAME_FIELD_UNSTRUCTURED_NAME)
    }

    pub fn family_name(&self) -> &str {
        self.string(NAME_FIELD_FAMILY_NAME)
    }

    pub fn given_name(&self) -> &str {
        self.string(NAME_FIELD_GIVEN_NAME)
    }

    pub fn middle_name(&self) -> &str {
        self.string(NAME_FIELD_MIDDLE_NAME)
    }

    pub fn honorific_prefix(&self) -> &str {
        self.string(NAME_FIELD_HONORIFIC_PREFIX)
    }

    pub fn honorific_suffix(&self) -> &str {
        self.string(NAME_FIELD_HONORIFIC_SUFFIX)
    }
}

impl<E: DerefMut<Target = Value>> Item<E, Names> {
    pub fn set_unstructured_name(&mut self, value: &str) {
        self.set_string(NAME_FIELD_UNSTRUCTURED_NAME, value);
    }

    pub fn set_family_name(&mut self, value: &str) {
        self.set_string(NAME_FIELD_FAMILY_NAME, value);
    }

    pub fn set_given_name(&mut self, value: &str) {
        self.set_string(NAME_FIELD_GIVEN_NAME, value);
    }

    pub fn set_middle_name(&mut self, value: &str) {
        self.set_string(NAME_FIELD_MIDDLE_NAME, value);
    }

    pub fn set_honorific_prefix(&mut self, value: &str) {
        self.set_string(NAME_FIELD_HONORIFIC_PREFIX, value);
    }

    pub fn set_honorific_suffix(&mut self, value: &str) {
        self.set_string(NAME_FIELD_HONORIFIC_SUFFIX, value);
    }
}

impl<'a> ListView<'a, Names> {
    fn part(&self, key: &str) -> Option<&'a str> {
        self.first().map(|name| name.string_in_document(key))
    }

    /// Display name of the name element; `None` when there is none.
    pub fn display_name(&self) -> Option<&'a str> {
        self.part(NAME_FIELD_DISPLAY_NAME)
    }

    pub fn display_name_last_first(&self) -> Option<&'a str> {
        self.part(NAME_FIELD_DISPLAY_NAME_LAST_FIRST)
    }

    pub fn unstructured_name(&self) -> Option<&'a str> {
        self.part(NAME_FIELD_UNSTRUCTURED_NAME)
    }

    pub fn family_name(&self) -> Option<&'a str> {
        self.part(NAME_FIELD_FAMILY_NAME)
    }

    pub fn given_name(&self) -> Option<&'a str> {
        self.part(NAME_FIELD_GIVEN_NAME)
    }

    pub fn middle_name(&self) -> Option<&'a str> {
        self.part(NAME_FIELD_MIDDLE_NAME)
    }

    pub fn honorific_prefix(&self) -> Option<&'a str> {
        self.part(NAME_FIELD_HONORIFIC_PREFIX)
    }

    pub fn honorific_suffix(&self) -> Option<&'a str> {
        self.part(NAME_FIELD_HONORIFIC_SUFFIX)
    }
}

impl<'a> ListAttribute<'a, Names> {
    pub fn display_name(&self) -> Option<&str> {
        self.view().display_name()
    }

    pub fn display_name_last_first(&self) -> Option<&str> {
        self.view().display_name_last_first()
    }

    pub fn unstructured_name(&self) -> Option<&str> {
        self.view().unstructured_name()
    }

    pub fn family_name(&self) -> Option<&str> {
        self.view().family_name()
    }

    pub fn given_name(&self) -> Option<&str> {
        self.view().given_name()
    }

    pub fn middle_name(&self) -> Option<&str> {
        self.view().middle_name()
    }

    pub fn honorific_prefix(&self) -> Option<&str> {
        self.view().honorific_prefix()
    }

    pub fn honorific_suffix(&self) -> Option<&str> {
        self.view().honorific_suffix()
    }

    pub fn set_unstructured_name(&mut self, value: &str) -> ModelResult<()> {
        self.set_part(NAME_FIELD_UNSTRUCTURED_NAME, value)
    }

    pub fn set_family_name(&mut self, value: &str) -> ModelResult<()> {
        self.set_part(NAME_FIELD_FAMILY_NAME, value)
    }

    pub fn set_given_name(&mut self, value: &str) -> ModelResult<()> {
        self.set_part(NAME_FIELD_GIVEN_NAME, value)
    }

    pub fn set_middle_name(&mut self, value: &str) -> ModelResult<()> {
        self.set_part(NAME_FIELD_MIDDLE_NAME, value)
    }

    pub fn set_honorific_prefix(&mut self, value: &str) -> ModelResult<()> {
        self.set_part(NAME_FIELD_HONORIFIC_PREFIX, value)
    }

    pub fn set_honorific_suffix(&mut self, value: &str) -> ModelResult<()> {
        self.set_part(NAME_FIELD_HONORIFIC_SUFFIX, value)
    }

    /// Writes `key` on the name element, appending the element first when
    /// the list is empty.
    fn set_part(&mut self, key: &str, value: &str) -> ModelResult<()> {
        if let Some(mut name) = self.first_mut() {
            name.set_string(key, value);
            return Ok(());
        }

        let mut entry = Map::new();
        entry.insert(key.to_string(), Value::from(value));
        self.append(entry)?;
        Ok(())
    }
}
