//! Duplicate cleanup for person records.
//!
//! # Responsibility
//! - Remove repeated entries from the list attributes a person was fetched
//!   with, keeping the first occurrence.
//!
//! # Invariants
//! - Attributes outside the mask are skipped, never reported as errors.
//! - Items with an empty value or an undecodable date are never duplicates.
//! - Removal always goes through `Removal::AllExceptFirst`, so the first
//!   occurrence of every value survives in place.

use crate::field::{MaskField, PersonField};
use crate::list::{
    HasDateValue, HasStringValue, ItemRef, ListAttribute, Removal, RemoveCriterion,
};
use crate::model::{DateValue, ModelResult};
use crate::person::{Events, Person};
use log::info;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Outcome of one cleanup run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleanupReport {
    /// Removed item count per attribute wire key. Skipped attributes are
    /// absent.
    pub removed: BTreeMap<&'static str, usize>,
    /// Whether the person differs from its fetched state after cleanup.
    pub changed: bool,
}

impl CleanupReport {
    pub fn total_removed(&self) -> usize {
        self.removed.values().sum()
    }

    fn record(&mut self, field: PersonField, removed: usize) {
        self.removed.insert(field.wire_key(), removed);
    }
}

/// De-duplicates contact attributes.
#[derive(Debug, Clone, Copy, Default)]
pub struct CleanupService;

impl CleanupService {
    pub fn new() -> Self {
        Self
    }

    /// Removes repeated email addresses, phone numbers, birthdays and
    /// events from `person`.
    ///
    /// # Contract
    /// - Email addresses and phone numbers compare by `value`.
    /// - Birthdays compare by date.
    /// - Events compare by type tag and date together.
    pub fn dedupe(&self, person: &mut Person) -> ModelResult<CleanupReport> {
        let mut report = CleanupReport::default();

        if requested(person, PersonField::EmailAddresses) {
            let removed = dedupe_by_value(&mut person.email_addresses_mut()?)?;
            report.record(PersonField::EmailAddresses, removed);
        }
        if requested(person, PersonField::PhoneNumbers) {
            let removed = dedupe_by_value(&mut person.phone_numbers_mut()?)?;
            report.record(PersonField::PhoneNumbers, removed);
        }
        if requested(person, PersonField::Birthdays) {
            let removed = dedupe_by_date(&mut person.birthdays_mut()?)?;
            report.record(PersonField::Birthdays, removed);
        }
        if requested(person, PersonField::Events) {
            let removed = dedupe_events(&mut person.events_mut()?)?;
            report.record(PersonField::Events, removed);
        }

        report.changed = person.has_changes();
        info!(
            "event=person_dedupe module=service status=ok person={} removed={} changed={}",
            person.identifier(),
            report.total_removed(),
            report.changed
        );
        Ok(report)
    }
}

fn requested(person: &Person, field: PersonField) -> bool {
    person.field_mask().contains(field)
}

fn dedupe_by_value<K: HasStringValue>(list: &mut ListAttribute<'_, K>) -> ModelResult<usize> {
    let repeated = repeated_keys(
        list.all_values()
            .filter(|value| !value.is_empty())
            .map(str::to_string),
    );
    let mut removed = 0;
    for value in repeated {
        removed += list.remove_by_value(&value, Removal::AllExceptFirst)?.len();
    }
    Ok(removed)
}

fn dedupe_by_date<K: HasDateValue>(list: &mut ListAttribute<'_, K>) -> ModelResult<usize> {
    let repeated = repeated_keys(list.all_date_values().flatten());
    let mut removed = 0;
    for date in repeated {
        removed += list
            .remove_by_date_value(&date, Removal::AllExceptFirst)?
            .len();
    }
    Ok(removed)
}

/// Same type tag and same date.
struct SameEvent {
    type_tag: String,
    date: DateValue,
}

impl RemoveCriterion<Events> for SameEvent {
    fn applies(&self, item: &ItemRef<'_, Events>) -> bool {
        item.type_tag() == self.type_tag && item.date_value() == Some(self.date)
    }
}

fn dedupe_events(list: &mut ListAttribute<'_, Events>) -> ModelResult<usize> {
    let repeated = repeated_keys(list.iter().filter_map(|event| {
        event
            .date_value()
            .map(|date| (event.type_tag().to_string(), date))
    }));
    let mut removed = 0;
    for (type_tag, date) in repeated {
        let criterion = SameEvent { type_tag, date };
        removed += list
            .remove_matching(&criterion, &Removal::AllExceptFirst)?
            .len();
    }
    Ok(removed)
}

/// Keys seen more than once, in order of first repetition.
fn repeated_keys<T: Ord + Clone>(keys: impl Iterator<Item = T>) -> Vec<T> {
    let mut seen = BTreeSet::new();
    let mut repeated = Vec::new();
    for key in keys {
        if !seen.insert(key.clone()) && !repeated.contains(&key) {
            repeated.push(key);
        }
    }
    repeated
}
