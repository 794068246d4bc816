//! Email address items.

use crate::list::{
    HasStringValue, HasTypeTag, Item, ItemKind, ItemMut, ListAttribute, ITEM_FIELD_TYPE,
    ITEM_FIELD_VALUE,
};
use crate::model::ModelResult;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailAddresses;

impl ItemKind for EmailAddresses {
    const NAME: &'static str = "emailAddresses";
}

impl HasStringValue for EmailAddresses {}
impl HasTypeTag for EmailAddresses {}

pub type EmailAddress<E> = Item<E, EmailAddresses>;

impl<'a> ListAttribute<'a, EmailAddresses> {
    pub fn append_email_address(
        &mut self,
        type_tag: &str,
        value: &str,
    ) -> ModelResult<ItemMut<'_, EmailAddresses>> {
        let mut entry = Map::new();
        entry.insert(ITEM_FIELD_TYPE.to_string(), Value::from(type_tag));
        entry.insert(ITEM_FIELD_VALUE.to_string(), Value::from(value));
        self.append(entry)
    }
}
