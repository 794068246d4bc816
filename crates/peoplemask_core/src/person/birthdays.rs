//! Birthday items.
//!
//! The remote source keeps birthdays as a list even though a person has one
//! birthday. `replace_with_single` is the usual write path.

use crate::list::{HasDateValue, Item, ItemKind, ItemMut, ListAttribute, ITEM_FIELD_DATE};
use crate::model::{DateValue, ModelResult};
use serde_json::Map;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthdays;

impl ItemKind for Birthdays {
    const NAME: &'static str = "birthdays";
}

impl HasDateValue for Birthdays {}

pub type Birthday<E> = Item<E, Birthdays>;

impl<'a> ListAttribute<'a, Birthdays> {
    pub fn append_birthday(&mut self, date: &DateValue) -> ModelResult<ItemMut<'_, Birthdays>> {
        let mut entry = Map::new();
        entry.insert(ITEM_FIELD_DATE.to_string(), date.to_wire().to_json());
        self.append(entry)
    }

    /// Removes every birthday, then appends one with `date`.
    pub fn replace_with_single(&mut self, date: &DateValue) -> ModelResult<ItemMut<'_, Birthdays>> {
        self.remove_all()?;
        self.append_birthday(date)
    }
}
