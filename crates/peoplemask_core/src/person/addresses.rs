//! Postal address items.

use crate::list::{HasTypeTag, Item, ItemKind, ItemMut, ListAttribute, ITEM_FIELD_TYPE};
use crate::model::ModelResult;
use serde_json::{Map, Value};
use std::ops::{Deref, DerefMut};

/// Remote-computed single-line rendering. Read-only.
pub const ADDRESS_FIELD_FORMATTED_VALUE: &str = "formattedValue";
pub const ADDRESS_FIELD_PO_BOX: &str = "poBox";
pub const ADDRESS_FIELD_STREET_ADDRESS: &str = "streetAddress";
pub const ADDRESS_FIELD_EXTENDED_ADDRESS: &str = "extendedAddress";
pub const ADDRESS_FIELD_CITY: &str = "city";
pub const ADDRESS_FIELD_REGION: &str = "region";
pub const ADDRESS_FIELD_POSTAL_CODE: &str = "postalCode";
pub const ADDRESS_FIELD_COUNTRY: &str = "country";
/// ISO 3166-1 alpha-2 country code.
pub const ADDRESS_FIELD_COUNTRY_CODE: &str = "countryCode";

/// Kind marker for `addresses` elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Addresses;

impl ItemKind for Addresses {
    const NAME: &'static str = "addresses";
}

impl HasTypeTag for Addresses {}

pub type Address<E> = Item<E, Addresses>;

impl<E: Deref<Target = Value>> Item<E, Addresses> {
    pub fn formatted_value(&self) -> &str {
        self.string(ADDRESS_FIELD_FORMATTED_VALUE)
    }

    pub fn po_box(&self) -> &str {
        self.string(ADDRESS_FIELD_PO_BOX)
    }

    pub fn street_address(&self) -> &str {
        self.string(ADDRESS_FIELD_STREET_ADDRESS)
    }

    pub fn extended_address(&self) -> &str {
        self.string(ADDRESS_FIELD_EXTENDED_ADDRESS)
    }

    pub fn city(&self) -> &str {
        self.string(ADDRESS_FIELD_CITY)
    }

    pub fn region(&self) -> &str {
        self.string(ADDRESS_FIELD_REGION)
    }

    pub fn postal_code(&self) -> &str {
        self.string(ADDRESS_FIELD_POSTAL_CODE)
    }

    pub fn country(&self) -> &str {
        self.string(ADDRESS_FIELD_COUNTRY)
    }

    pub fn country_code(&self) -> &str {
        self.string(ADDRESS_FIELD_COUNTRY_CODE)
    }
}

impl<E: DerefMut<Target = Value>> Item<E, Addresses> {
    pub fn set_po_box(&mut self, value: &str) {
        self.set_string(ADDRESS_FIELD_PO_BOX, value);
    }

    pub fn set_street_address(&mut self, value: &str) {
        self.set_string(ADDRESS_FIELD_STREET_ADDRESS, value);
    }

    pub fn set_extended_address(&mut self, value: &str) {
        self.set_string(ADDRESS_FIELD_EXTENDED_ADDRESS, value);
    }

    pub fn set_city(&mut self, value: &str) {
        self.set_string(ADDRESS_FIELD_CITY, value);
    }

    pub fn set_region(&mut self, value: &str) {
        self.set_string(ADDRESS_FIELD_REGION, value);
    }

    pub fn set_postal_code(&mut self, value: &str) {
        self.set_string(ADDRESS_FIELD_POSTAL_CODE, value);
    }

    pub fn set_country(&mut self, value: &str) {
        self.set_string(ADDRESS_FIELD_COUNTRY, value);
    }

    pub fn set_country_code(&mut self, value: &str) {
        self.set_string(ADDRESS_FIELD_COUNTRY_CODE, value);
    }
}

impl<'a> ListAttribute<'a, Addresses> {
    /// Appends an address with type tag and city; other parts stay unset.
    pub fn append_address(
        &mut self,
        type_tag: &str,
        city: &str,
    ) -> ModelResult<ItemMut<'_, Addresses>> {
        let mut entry = Map::new();
        entry.insert(ITEM_FIELD_TYPE.to_string(), Value::from(type_tag));
        entry.insert(ADDRESS_FIELD_CITY.to_string(), Value::from(city));
        self.append(entry)
    }
}
