//! Dated event items (anniversaries and the like).

use crate::list::{
    HasDateValue, HasTypeTag, Item, ItemKind, ItemMut, ListAttribute, ITEM_FIELD_DATE,
    ITEM_FIELD_TYPE,
};
use crate::model::{DateValue, ModelResult};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Events;

impl ItemKind for Events {
    const NAME: &'static str = "events";
}

impl HasTypeTag for Events {}
impl HasDateValue for Events {}

pub type Event<E> = Item<E, Events>;

impl<'a> ListAttribute<'a, Events> {
    pub fn append_event(
        &mut self,
        type_tag: &str,
        date: &DateValue,
    ) -> ModelResult<ItemMut<'_, Events>> {
        let mut entry = Map::new();
        entry.insert(ITEM_FIELD_TYPE.to_string(), Value::from(type_tag));
        entry.insert(ITEM_FIELD_DATE.to_string(), date.to_wire().to_json());
        self.append(entry)
    }
}
