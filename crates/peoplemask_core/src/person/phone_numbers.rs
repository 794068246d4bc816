//! Phone number items.

use crate::list::{
    HasStringValue, HasTypeTag, Item, ItemKind, ItemMut, ListAttribute, ITEM_FIELD_TYPE,
    ITEM_FIELD_VALUE,
};
use crate::model::ModelResult;
use serde_json::{Map, Value};
use std::ops::Deref;

/// E.164 form computed remotely. Read-only.
pub const PHONE_FIELD_CANONICAL_FORM: &str = "canonicalForm";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneNumbers;

impl ItemKind for PhoneNumbers {
    const NAME: &'static str = "phoneNumbers";
}

impl HasStringValue for PhoneNumbers {}
impl HasTypeTag for PhoneNumbers {}

pub type PhoneNumber<E> = Item<E, PhoneNumbers>;

impl<E: Deref<Target = Value>> Item<E, PhoneNumbers> {
    pub fn canonical_form(&self) -> &str {
        self.string(PHONE_FIELD_CANONICAL_FORM)
    }
}

impl<'a> ListAttribute<'a, PhoneNumbers> {
    pub fn append_phone_number(
        &mut self,
        type_tag: &str,
        value: &str,
    ) -> ModelResult<ItemMut<'_, PhoneNumbers>> {
        let mut entry = Map::new();
        entry.insert(ITEM_FIELD_TYPE.to_string(), Value::from(type_tag));
        entry.insert(ITEM_FIELD_VALUE.to_string(), Value::from(value));
        self.append(entry)
    }
}
