mod common;

use common::{person, tester_duplicates_document, tester_empty_document, tester_extensive_document};
use peoplemask_core::list::Removal;
use peoplemask_core::DateValue;
use serde_json::json;

fn full(year: i32, month: u32, day: u32) -> DateValue {
    DateValue::from_full_date(year, month, day).expect("valid date")
}

#[test]
fn reads_birthday_wire_components() {
    let person = person(tester_extensive_document());
    let birthdays = person.birthdays().expect("birthdays in mask");
    let birthday = birthdays.first().expect("one birthday");
    let wire = birthday.date_value().expect("decodable date").to_wire();
    assert_eq!((wire.year, wire.month, wire.day), (1935, 6, 16));
    assert!(!person.has_changes());
}

#[test]
fn missing_birthdays_read_as_empty() {
    let person = person(tester_empty_document());
    assert!(person.birthdays().expect("in mask").first().is_none());
    assert!(!person.has_changes());
}

#[test]
fn all_date_values_keep_list_order() {
    let person = person(tester_duplicates_document());
    let values: Vec<_> = person
        .birthdays()
        .expect("in mask")
        .all_date_values()
        .collect();
    assert_eq!(
        values,
        vec![
            Some(full(1935, 6, 16)),
            Some(full(1935, 7, 16)),
            Some(full(1935, 6, 16)),
        ]
    );
}

#[test]
fn set_date_value_rewrites_wire_form() {
    let mut person = person(tester_extensive_document());
    {
        let mut birthdays = person.birthdays_mut().expect("in mask");
        let mut birthday = birthdays.first_mut().expect("one birthday");
        birthday.set_date_value(&full(2014, 6, 14));
        assert_eq!(birthday.date_value(), Some(full(2014, 6, 14)));
    }
    assert_eq!(
        person.model_snapshot()["birthdays"][0]["date"],
        json!({"year": 2014, "month": 6, "day": 14})
    );
    assert!(person.has_changes());
}

#[test]
fn append_birthday_keeps_existing_entries() {
    let mut person = person(tester_extensive_document());
    person
        .birthdays_mut()
        .expect("in mask")
        .append_birthday(&full(1978, 6, 14))
        .expect("append");
    let values: Vec<_> = person
        .birthdays()
        .expect("in mask")
        .all_date_values()
        .flatten()
        .collect();
    assert_eq!(values, vec![full(1935, 6, 16), full(1978, 6, 14)]);
}

#[test]
fn remove_by_date_value_strategies() {
    let target = full(1935, 6, 16);

    let mut all = person(tester_duplicates_document());
    let removed = all
        .birthdays_mut()
        .expect("in mask")
        .remove_by_date_value(&target, Removal::All)
        .expect("remove");
    assert_eq!(removed, vec![0, 2]);
    let left: Vec<_> = all.birthdays().expect("in mask").all_date_values().collect();
    assert_eq!(left, vec![Some(full(1935, 7, 16))]);

    let mut first = person(tester_duplicates_document());
    first
        .birthdays_mut()
        .expect("in mask")
        .remove_by_date_value(&target, Removal::FirstOnly)
        .expect("remove");
    let left: Vec<_> = first.birthdays().expect("in mask").all_date_values().collect();
    assert_eq!(left, vec![Some(full(1935, 7, 16)), Some(full(1935, 6, 16))]);

    let mut except_first = person(tester_duplicates_document());
    except_first
        .birthdays_mut()
        .expect("in mask")
        .remove_by_date_value(&target, Removal::AllExceptFirst)
        .expect("remove");
    let left: Vec<_> = except_first
        .birthdays()
        .expect("in mask")
        .all_date_values()
        .collect();
    assert_eq!(left, vec![Some(full(1935, 6, 16)), Some(full(1935, 7, 16))]);
}

#[test]
fn replace_with_single_leaves_one_birthday() {
    let mut person = person(tester_duplicates_document());
    let month_day = DateValue::from_month_day(9, 17).expect("valid date");
    {
        let mut birthdays = person.birthdays_mut().expect("in mask");
        assert_eq!(birthdays.len(), 3);
        let replaced = birthdays
            .replace_with_single(&month_day)
            .expect("replace");
        assert_eq!(replaced.date_value(), Some(month_day));
    }
    assert_eq!(
        person.model_snapshot()["birthdays"],
        json!([{"date": {"year": 0, "month": 9, "day": 17}}])
    );
}

#[test]
fn replace_with_single_on_empty_person_creates_list() {
    let mut person = person(tester_empty_document());
    let year_only = DateValue::from_year_only(1990).expect("valid date");
    person
        .birthdays_mut()
        .expect("in mask")
        .replace_with_single(&year_only)
        .expect("replace");
    let birthdays = person.birthdays().expect("in mask");
    assert_eq!(birthdays.len(), 1);
    assert_eq!(
        birthdays.first().and_then(|birthday| birthday.date_value()),
        Some(year_only)
    );
}

#[test]
fn reads_event_type_and_date() {
    let person = person(tester_extensive_document());
    let events = person.events().expect("events in mask");
    let event = events.first().expect("one event");
    assert_eq!(event.type_tag(), "wedding");
    assert_eq!(event.date_value(), Some(full(1966, 6, 16)));
    assert!(!person.has_changes());
}

#[test]
fn append_event_to_existing_and_absent_list() {
    let mut person_with_events = person(tester_extensive_document());
    let anniversary = full(1978, 6, 14);
    person_with_events
        .events_mut()
        .expect("in mask")
        .append_event("anniversary", &anniversary)
        .expect("append");
    let values: Vec<_> = person_with_events
        .events()
        .expect("in mask")
        .all_date_values()
        .flatten()
        .collect();
    assert_eq!(values.len(), 2);
    assert!(values.contains(&anniversary));

    let mut empty = person(tester_empty_document());
    empty
        .events_mut()
        .expect("in mask")
        .append_event("wedding", &anniversary)
        .expect("append");
    let events = empty.events().expect("in mask");
    assert_eq!(events.len(), 1);
    assert_eq!(
        events.first_of_type("wedding").and_then(|event| event.date_value()),
        Some(anniversary)
    );
    assert!(empty.has_changes());
}

#[test]
fn remove_events_by_type() {
    let mut person = person(tester_duplicates_document());
    let removed = person
        .events_mut()
        .expect("in mask")
        .remove_by_type("wedding", Removal::All)
        .expect("remove");
    assert_eq!(removed, vec![0, 2]);
    let events = person.events().expect("in mask");
    assert_eq!(events.len(), 1);
    assert_eq!(events.first().expect("one event left").type_tag(), "anniversary");
}

#[test]
fn malformed_date_reads_as_none() {
    let mut document = tester_empty_document();
    document["birthdays"] = json!([
        {"date": {"year": 1980, "month": 14, "day": 2}},
        {"text": "sometime in spring"},
        {"date": {"month": 5, "day": 1}}
    ]);
    let person = person(document);
    let values: Vec<_> = person
        .birthdays()
        .expect("in mask")
        .all_date_values()
        .collect();
    assert_eq!(
        values,
        vec![
            None,
            None,
            Some(DateValue::from_month_day(5, 1).expect("valid date"))
        ]
    );
}
