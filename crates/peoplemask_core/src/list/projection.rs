//! Read-only and mutable projections of one list attribute.
//!
//! # Responsibility
//! - `ListView` iterates and queries a list without touching the document.
//! - `ListAttribute` adds append and removal on top of a mask-checked
//!   write slot.
//!
//! # Invariants
//! - An absent attribute projects as an empty list and stays absent until
//!   the first append.
//! - Index removal validates every position before deleting anything.
//! - Appending to a single-valued kind that already holds an element fails
//!   without mutation.

use super::item::{
    HasDateValue, HasStringValue, HasTypeTag, Item, ItemKind, ItemMut, ItemRef, ITEM_FIELD_VALUE,
};
use super::removal::{
    select_candidates, MatchAll, MatchDateValue, MatchStringValue, MatchTypeTag, Removal,
    RemovalStrategy, RemoveCriterion,
};
use crate::model::{DateValue, FieldSlot, ModelError, ModelResult};
use log::{debug, warn};
use serde_json::{Map, Value};
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;

/// Read-only projection of a list attribute.
pub struct ListView<'a, K> {
    items: &'a [Value],
    present: bool,
    kind: PhantomData<fn() -> K>,
}

impl<'a, K> Clone for ListView<'a, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, K> Copy for ListView<'a, K> {}

impl<'a, K: ItemKind> Debug for ListView<'a, K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListView")
            .field("kind", &K::NAME)
            .field("present", &self.present)
            .field("items", &self.items)
            .finish()
    }
}

impl<'a, K: ItemKind> ListView<'a, K> {
    /// Projects the raw attribute value. Anything but an array reads as
    /// empty.
    pub fn new(current: Option<&'a Value>) -> Self {
        match current {
            Some(Value::Array(items)) => Self::over(items, true),
            None | Some(Value::Null) => Self::over(&[], false),
            Some(_) => {
                warn!(
                    "event=list_project module=list status=unexpected_shape kind={}",
                    K::NAME
                );
                Self::over(&[], true)
            }
        }
    }

    fn over(items: &'a [Value], present: bool) -> Self {
        Self {
            items,
            present,
            kind: PhantomData,
        }
    }

    /// Whether the attribute key exists in the document.
    pub fn is_present(&self) -> bool {
        self.present
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ItemRef<'a, K>> + 'a {
        self.items.iter().map(Item::new)
    }

    pub fn first(&self) -> Option<ItemRef<'a, K>> {
        self.get(0)
    }

    pub fn get(&self, index: usize) -> Option<ItemRef<'a, K>> {
        self.items.get(index).map(Item::new)
    }

    /// Positions of items the criterion applies to.
    pub fn candidates<C>(&self, criterion: &C) -> Vec<usize>
    where
        C: RemoveCriterion<K> + ?Sized,
    {
        select_candidates(criterion, self.iter())
    }
}

impl<'a, K: HasStringValue> ListView<'a, K> {
    /// `value` of every item in list order; unset values read as empty.
    pub fn all_values(&self) -> impl Iterator<Item = &'a str> + 'a {
        self.iter()
            .map(|item| item.string_in_document(ITEM_FIELD_VALUE))
    }
}

impl<'a, K: HasTypeTag> ListView<'a, K> {
    pub fn first_of_type(&self, tag: &str) -> Option<ItemRef<'a, K>> {
        self.iter().find(|item| item.has_type(tag))
    }

    /// Every item tagged `tag`. Items without a tag never match.
    pub fn all_of_type(&self, tag: &str) -> impl Iterator<Item = ItemRef<'a, K>> + 'a {
        let tag = tag.to_string();
        self.iter().filter(move |item| item.has_type(&tag))
    }
}

impl<'a, K: HasDateValue> ListView<'a, K> {
    /// Decoded date of every item in list order.
    pub fn all_date_values(&self) -> impl Iterator<Item = Option<DateValue>> + 'a {
        self.iter().map(|item| item.date_value())
    }
}

/// Mutable projection of a list attribute backed by a write slot.
pub struct ListAttribute<'a, K> {
    slot: FieldSlot<'a>,
    kind: PhantomData<fn() -> K>,
}

impl<'a, K: ItemKind> Debug for ListAttribute<'a, K> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListAttribute")
            .field("kind", &K::NAME)
            .field("slot", &self.slot)
            .finish()
    }
}

impl<'a, K: ItemKind> ListAttribute<'a, K> {
    pub fn new(slot: FieldSlot<'a>) -> Self {
        Self {
            slot,
            kind: PhantomData,
        }
    }

    /// Read-only view of the current contents.
    pub fn view(&self) -> ListView<'_, K> {
        ListView::new(self.slot.current())
    }

    pub fn is_present(&self) -> bool {
        self.view().is_present()
    }

    pub fn len(&self) -> usize {
        self.view().len()
    }

    pub fn is_empty(&self) -> bool {
        self.view().is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ItemRef<'_, K>> + '_ {
        self.view().iter()
    }

    pub fn first(&self) -> Option<ItemRef<'_, K>> {
        self.view().first()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = ItemMut<'_, K>> + '_ {
        self.items_mut()
            .into_iter()
            .flat_map(|items| items.iter_mut().map(Item::new))
    }

    pub fn first_mut(&mut self) -> Option<ItemMut<'_, K>> {
        self.get_mut(0)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<ItemMut<'_, K>> {
        self.items_mut()?.get_mut(index).map(Item::new)
    }

    /// Appends `entry` and returns a view of it. Creates the attribute when
    /// absent.
    pub fn append(&mut self, entry: Map<String, Value>) -> ModelResult<ItemMut<'_, K>> {
        if K::SINGLE_VALUED && !self.is_empty() {
            warn!(
                "event=list_append module=list status=rejected kind={} reason=single_valued",
                K::NAME
            );
            return Err(ModelError::MultipleNamesNotAllowed);
        }

        let field = self.slot.key();
        let items = self
            .slot
            .ensure()
            .as_array_mut()
            .ok_or(ModelError::UnexpectedShape {
                field,
                expected: "a list",
            })?;
        items.push(Value::Object(entry));
        debug!(
            "event=list_append module=list status=ok kind={} len={}",
            K::NAME,
            items.len()
        );
        let index = items.len() - 1;
        Ok(Item::new(&mut items[index]))
    }

    /// Removes the items at `indices`. Duplicates are ignored and order does
    /// not matter. Nothing is removed if any index is out of range or the
    /// attribute is not a list.
    pub fn remove_by_index(&mut self, indices: &[usize]) -> ModelResult<()> {
        if indices.is_empty() {
            return Ok(());
        }

        let mut ordered = indices.to_vec();
        ordered.sort_unstable_by(|left, right| right.cmp(left));
        ordered.dedup();

        let field = self.slot.key();
        let items = match self.slot.current_mut() {
            Some(Value::Array(items)) => items,
            Some(_) => {
                return Err(ModelError::UnexpectedShape {
                    field,
                    expected: "a list",
                })
            }
            None => {
                return Err(ModelError::IndexOutOfRange {
                    index: ordered[0],
                    len: 0,
                })
            }
        };
        if ordered[0] >= items.len() {
            return Err(ModelError::IndexOutOfRange {
                index: ordered[0],
                len: items.len(),
            });
        }
        for index in ordered {
            items.remove(index);
        }
        Ok(())
    }

    /// Removes the items the criterion suggests, narrowed by `strategy`.
    /// Returns the removed positions as they were before removal.
    pub fn remove_matching<C, S>(&mut self, criterion: &C, strategy: &S) -> ModelResult<Vec<usize>>
    where
        C: RemoveCriterion<K> + ?Sized,
        S: RemovalStrategy + ?Sized,
    {
        let suggested = self.view().candidates(criterion);
        let selected = strategy.narrow(&suggested);
        if selected.iter().any(|index| !suggested.contains(index)) {
            warn!(
                "event=list_remove module=list status=rejected kind={} selected={:?} suggested={:?}",
                K::NAME,
                selected,
                suggested
            );
            return Err(ModelError::InvalidRemovalSet {
                selected,
                suggested,
            });
        }

        self.remove_by_index(&selected)?;
        debug!(
            "event=list_remove module=list status=ok kind={} removed={:?}",
            K::NAME,
            selected
        );
        Ok(selected)
    }

    /// Empties the list. An absent attribute stays absent.
    pub fn remove_all(&mut self) -> ModelResult<Vec<usize>> {
        self.remove_matching(&MatchAll, &Removal::All)
    }

    fn items_mut(&mut self) -> Option<&mut Vec<Value>> {
        self.slot.current_mut().and_then(Value::as_array_mut)
    }
}

impl<'a, K: HasStringValue> ListAttribute<'a, K> {
    pub fn all_values(&self) -> impl Iterator<Item = &str> + '_ {
        self.view().all_values()
    }

    pub fn remove_by_value<S: RemovalStrategy>(
        &mut self,
        value: &str,
        strategy: S,
    ) -> ModelResult<Vec<usize>> {
        self.remove_matching(&MatchStringValue(value.to_string()), &strategy)
    }
}

impl<'a, K: HasTypeTag> ListAttribute<'a, K> {
    pub fn first_of_type(&self, tag: &str) -> Option<ItemRef<'_, K>> {
        self.view().first_of_type(tag)
    }

    pub fn all_of_type(&self, tag: &str) -> impl Iterator<Item = ItemRef<'_, K>> + '_ {
        self.view().all_of_type(tag)
    }

    pub fn first_of_type_mut(&mut self, tag: &str) -> Option<ItemMut<'_, K>> {
        let index = self.view().iter().position(|item| item.has_type(tag))?;
        self.get_mut(index)
    }

    pub fn remove_by_type<S: RemovalStrategy>(
        &mut self,
        tag: &str,
        strategy: S,
    ) -> ModelResult<Vec<usize>> {
        self.remove_matching(&MatchTypeTag(tag.to_string()), &strategy)
    }
}

impl<'a, K: HasDateValue> ListAttribute<'a, K> {
    pub fn all_date_values(&self) -> impl Iterator<Item = Option<DateValue>> + '_ {
        self.view().all_date_values()
    }

    pub fn remove_by_date_value<S: RemovalStrategy>(
        &mut self,
        value: &DateValue,
        strategy: S,
    ) -> ModelResult<Vec<usize>> {
        self.remove_matching(&MatchDateValue(*value), &strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::{ListAttribute, ListView};
    use crate::field::{FieldMask, PersonField};
    use crate::list::item::{HasStringValue, HasTypeTag, ItemKind};
    use crate::list::removal::{MatchStringValue, Removal};
    use crate::model::{MaskedModel, ModelError};
    use serde_json::{json, Map, Value};

    struct Email;
    impl ItemKind for Email {
        const NAME: &'static str = "email";
    }
    impl HasStringValue for Email {}
    impl HasTypeTag for Email {}

    struct Single;
    impl ItemKind for Single {
        const NAME: &'static str = "single";
        const SINGLE_VALUED: bool = true;
    }

    fn model(document: Value) -> MaskedModel<PersonField> {
        MaskedModel::new(document, FieldMask::all()).expect("valid document")
    }

    fn emails(model: &mut MaskedModel<PersonField>) -> ListAttribute<'_, Email> {
        ListAttribute::new(
            model
                .write_slot(PersonField::EmailAddresses, json!([]))
                .expect("in mask"),
        )
    }

    fn entry(value: &str) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("value".to_string(), json!(value));
        map
    }

    #[test]
    fn view_of_absent_attribute_is_empty_and_not_present() {
        let view: ListView<'_, Email> = ListView::new(None);
        assert!(view.is_empty());
        assert!(!view.is_present());
        assert!(view.first().is_none());
    }

    #[test]
    fn view_of_non_list_reads_as_empty() {
        let raw = json!({"value": "x"});
        let view: ListView<'_, Email> = ListView::new(Some(&raw));
        assert!(view.is_empty());
        assert!(view.is_present());
    }

    #[test]
    fn append_creates_absent_list() {
        let mut model = model(json!({"resourceName": "people/c1"}));
        {
            let mut list = emails(&mut model);
            assert!(!list.is_present());
            let mut added = list.append(entry("a@example.com")).expect("append");
            added.set_type_tag("home");
        }
        assert_eq!(
            model.snapshot()["emailAddresses"],
            json!([{"value": "a@example.com", "type": "home"}])
        );
    }

    #[test]
    fn read_only_operations_do_not_create_attribute() {
        let mut model = model(json!({"resourceName": "people/c1"}));
        {
            let mut list = emails(&mut model);
            assert_eq!(list.all_values().count(), 0);
            assert!(list.first_of_type("home").is_none());
            assert!(list.first_mut().is_none());
            assert!(list.remove_all().expect("remove").is_empty());
            list.remove_by_index(&[]).expect("empty removal");
        }
        assert!(!model.has_changes());
    }

    #[test]
    fn remove_by_index_is_atomic() {
        let mut model = model(json!({
            "resourceName": "people/c1",
            "emailAddresses": [{"value": "a"}, {"value": "b"}, {"value": "c"}]
        }));
        let mut list = emails(&mut model);
        let err = list
            .remove_by_index(&[0, 7])
            .expect_err("out of range must fail");
        assert_eq!(err, ModelError::IndexOutOfRange { index: 7, len: 3 });
        assert_eq!(list.len(), 3);

        list.remove_by_index(&[2, 0, 0]).expect("valid removal");
        assert_eq!(list.all_values().collect::<Vec<_>>(), vec!["b"]);
    }

    #[test]
    fn remove_by_index_on_absent_list_fails() {
        let mut model = model(json!({"resourceName": "people/c1"}));
        let mut list = emails(&mut model);
        let err = list.remove_by_index(&[0]).expect_err("absent list");
        assert_eq!(err, ModelError::IndexOutOfRange { index: 0, len: 0 });
    }

    fn rogue(_suggested: &[usize]) -> Vec<usize> {
        vec![1]
    }

    #[test]
    fn strategy_outside_suggestion_is_rejected() {
        let mut model = model(json!({
            "resourceName": "people/c1",
            "emailAddresses": [{"value": "a"}, {"value": "b"}]
        }));
        let mut list = emails(&mut model);
        let err = list
            .remove_matching(&MatchStringValue("a".to_string()), &rogue)
            .expect_err("unsuggested index");
        assert_eq!(
            err,
            ModelError::InvalidRemovalSet {
                selected: vec![1],
                suggested: vec![0],
            }
        );
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn remove_by_value_strategies() {
        let document = json!({
            "resourceName": "people/c1",
            "emailAddresses": [
                {"value": "dup"}, {"value": "x"}, {"value": "dup"}, {"value": "dup"}
            ]
        });

        let mut first_only = model(document.clone());
        let removed = emails(&mut first_only)
            .remove_by_value("dup", Removal::FirstOnly)
            .expect("remove");
        assert_eq!(removed, vec![0]);
        assert_eq!(
            emails(&mut first_only).all_values().collect::<Vec<_>>(),
            vec!["x", "dup", "dup"]
        );

        let mut except_first = model(document);
        let removed = emails(&mut except_first)
            .remove_by_value("dup", Removal::AllExceptFirst)
            .expect("remove");
        assert_eq!(removed, vec![2, 3]);
        assert_eq!(
            emails(&mut except_first).all_values().collect::<Vec<_>>(),
            vec!["dup", "x"]
        );
    }

    #[test]
    fn single_valued_kind_rejects_second_append() {
        let mut model = model(json!({"resourceName": "people/c1"}));
        let mut list: ListAttribute<'_, Single> = ListAttribute::new(
            model
                .write_slot(PersonField::Names, json!([]))
                .expect("in mask"),
        );
        list.append(Map::new()).expect("first append");
        let err = list.append(Map::new()).expect_err("second append");
        assert_eq!(err, ModelError::MultipleNamesNotAllowed);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn append_to_non_list_attribute_fails() {
        let mut model = model(json!({"resourceName": "people/c1", "emailAddresses": "x"}));
        let mut list = emails(&mut model);
        let err = list.append(entry("a")).expect_err("non-list");
        assert!(matches!(err, ModelError::UnexpectedShape { .. }));
        assert_eq!(
            model.snapshot()["emailAddresses"],
            json!("x")
        );
    }

    #[test]
    fn remove_from_non_list_attribute_fails() {
        let document = json!({"resourceName": "people/c1", "emailAddresses": {"oops": 1}});
        let mut model = model(document.clone());
        let err = emails(&mut model)
            .remove_by_index(&[0])
            .expect_err("non-list");
        assert_eq!(
            err,
            ModelError::UnexpectedShape {
                field: "emailAddresses",
                expected: "a list",
            }
        );
        assert_eq!(model.snapshot(), document);
    }

    fn last_match(suggested: &[usize]) -> Vec<usize> {
        suggested.last().copied().into_iter().collect()
    }

    #[test]
    fn remove_by_value_accepts_custom_strategy() {
        let mut model = model(json!({
            "resourceName": "people/c1",
            "emailAddresses": [{"value": "dup"}, {"value": "x"}, {"value": "dup"}]
        }));
        let removed = emails(&mut model)
            .remove_by_value("dup", last_match)
            .expect("remove");
        assert_eq!(removed, vec![2]);
        assert_eq!(
            emails(&mut model).all_values().collect::<Vec<_>>(),
            vec!["dup", "x"]
        );
    }

    #[test]
    fn iter_mut_writes_through() {
        let mut model = model(json!({
            "resourceName": "people/c1",
            "emailAddresses": [{"value": "a"}, {"value": "b"}]
        }));
        {
            let mut list = emails(&mut model);
            for mut item in list.iter_mut() {
                item.set_type_tag("work");
            }
        }
        assert_eq!(
            model.snapshot()["emailAddresses"],
            json!([{"value": "a", "type": "work"}, {"value": "b", "type": "work"}])
        );
    }
}
