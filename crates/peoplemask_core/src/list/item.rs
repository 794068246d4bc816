//! Item views and their capability mixins.
//!
//! An [`Item`] wraps one list entry plus a zero-sized kind marker. Read
//! accessors need the entry to deref to a `Value`, write accessors need it
//! to deref mutably, so the same accessor set serves `ItemRef` and
//! `ItemMut`.
//!
//! Capabilities are marker traits on the kind. Kinds opt in with an empty
//! impl and pick up the matching accessors, each of which reads its own
//! key from the backing entry.

use crate::model::{DateValue, WireDate};
use log::warn;
use serde_json::{Map, Value};
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

pub const ITEM_FIELD_VALUE: &str = "value";
pub const ITEM_FIELD_TYPE: &str = "type";
/// Localized type label computed remotely. Read-only.
pub const ITEM_FIELD_FORMATTED_TYPE: &str = "formattedType";
pub const ITEM_FIELD_DATE: &str = "date";

/// Marker for one kind of list element.
pub trait ItemKind: 'static {
    /// Name used in log lines.
    const NAME: &'static str;
    /// At most one element may exist.
    const SINGLE_VALUED: bool = false;
}

/// Item carries a free-form string under `value`.
pub trait HasStringValue: ItemKind {}

/// Item carries a type tag under `type`.
pub trait HasTypeTag: ItemKind {}

/// Item carries a partial date under `date`.
pub trait HasDateValue: ItemKind {}

/// View over one list entry.
pub struct Item<E, K> {
    entry: E,
    kind: PhantomData<fn() -> K>,
}

pub type ItemRef<'v, K> = Item<&'v Value, K>;
pub type ItemMut<'v, K> = Item<&'v mut Value, K>;

impl<E, K> Item<E, K> {
    pub(crate) fn new(entry: E) -> Self {
        Self {
            entry,
            kind: PhantomData,
        }
    }
}

impl<'v, K> Clone for ItemRef<'v, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'v, K> Copy for ItemRef<'v, K> {}

impl<E: Deref<Target = Value>, K: ItemKind> Debug for Item<E, K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Item")
            .field("kind", &K::NAME)
            .field("entry", &*self.entry)
            .finish()
    }
}

impl<E: Deref<Target = Value>, K> Item<E, K> {
    /// Raw backing entry.
    pub fn entry(&self) -> &Value {
        &self.entry
    }

    /// String under `key`; empty when absent or not a string.
    pub fn string(&self, key: &str) -> &str {
        self.entry
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Reborrows as a read-only view.
    pub fn as_view(&self) -> ItemRef<'_, K> {
        Item::new(&*self.entry)
    }
}

impl<'v, K> ItemRef<'v, K> {
    /// Like [`Item::string`] but tied to the document borrow instead of the
    /// view.
    pub(crate) fn string_in_document(&self, key: &str) -> &'v str {
        let entry: &'v Value = self.entry;
        entry
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }
}

impl<E: DerefMut<Target = Value>, K> Item<E, K> {
    /// Stores `value` under `key`. A non-object entry is replaced by an
    /// empty object first.
    pub fn set_string(&mut self, key: &str, value: &str) {
        object_mut(&mut self.entry).insert(key.to_string(), Value::String(value.to_string()));
    }

    pub(crate) fn set_raw(&mut self, key: &str, value: Value) {
        object_mut(&mut self.entry).insert(key.to_string(), value);
    }
}

fn object_mut(entry: &mut Value) -> &mut Map<String, Value> {
    if !entry.is_object() {
        *entry = Value::Object(Map::new());
    }
    match entry {
        Value::Object(map) => map,
        _ => unreachable!("entry was normalized to an object"),
    }
}

impl<E: Deref<Target = Value>, K: HasStringValue> Item<E, K> {
    pub fn value(&self) -> &str {
        self.string(ITEM_FIELD_VALUE)
    }
}

impl<E: DerefMut<Target = Value>, K: HasStringValue> Item<E, K> {
    pub fn set_value(&mut self, value: &str) {
        self.set_string(ITEM_FIELD_VALUE, value);
    }
}

impl<E: Deref<Target = Value>, K: HasTypeTag> Item<E, K> {
    /// Type tag such as `home` or `work`. Empty when unset.
    pub fn type_tag(&self) -> &str {
        self.string(ITEM_FIELD_TYPE)
    }

    pub fn formatted_type(&self) -> &str {
        self.string(ITEM_FIELD_FORMATTED_TYPE)
    }

    /// Type tag equal to `tag`. An unset tag equals `""`.
    pub fn has_type(&self, tag: &str) -> bool {
        self.type_tag() == tag
    }
}

impl<E: DerefMut<Target = Value>, K: HasTypeTag> Item<E, K> {
    pub fn set_type_tag(&mut self, tag: &str) {
        self.set_string(ITEM_FIELD_TYPE, tag);
    }
}

impl<E: Deref<Target = Value>, K: HasDateValue> Item<E, K> {
    /// Decoded `date` sub-document. `None` when absent, all-zero or
    /// malformed; malformed components are logged.
    pub fn date_value(&self) -> Option<DateValue> {
        let wire = WireDate::from_json(self.entry.get(ITEM_FIELD_DATE)?)?;
        if wire == WireDate::default() {
            return None;
        }
        match DateValue::from_wire(&wire) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(
                    "event=date_decode module=list status=error kind={} error={}",
                    K::NAME,
                    err
                );
                None
            }
        }
    }
}

impl<E: DerefMut<Target = Value>, K: HasDateValue> Item<E, K> {
    pub fn set_date_value(&mut self, value: &DateValue) {
        self.set_raw(ITEM_FIELD_DATE, value.to_wire().to_json());
    }
}
