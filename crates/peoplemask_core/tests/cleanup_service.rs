mod common;

use common::{person, person_with, tester_duplicates_document, tester_extensive_document};
use peoplemask_core::{CleanupService, PersonField};
use serde_json::json;

#[test]
fn dedupe_keeps_first_occurrence_of_each_value() {
    let mut person = person(tester_duplicates_document());
    let report = CleanupService::new().dedupe(&mut person).expect("dedupe");

    assert_eq!(report.removed.get("emailAddresses"), Some(&2));
    assert_eq!(report.removed.get("phoneNumbers"), Some(&1));
    assert_eq!(report.removed.get("birthdays"), Some(&1));
    assert_eq!(report.removed.get("events"), Some(&1));
    assert_eq!(report.total_removed(), 5);
    assert!(report.changed);

    let snapshot = person.model_snapshot();
    assert_eq!(
        snapshot["emailAddresses"],
        json!([
            {"value": "eva@example.com", "type": "home"},
            {"value": "eva.tester@example.org", "type": "work"}
        ])
    );
    assert_eq!(
        snapshot["phoneNumbers"],
        json!([{"value": "+49 30 1234567", "type": "home"}, {"value": ""}, {"value": ""}])
    );
    assert_eq!(
        snapshot["birthdays"],
        json!([
            {"date": {"year": 1935, "month": 6, "day": 16}},
            {"date": {"year": 1935, "month": 7, "day": 16}}
        ])
    );
    assert_eq!(
        snapshot["events"],
        json!([
            {"date": {"year": 1966, "month": 6, "day": 16}, "type": "wedding"},
            {"date": {"year": 1966, "month": 6, "day": 16}, "type": "anniversary"}
        ])
    );
}

#[test]
fn dedupe_skips_unrequested_attributes() {
    let mut person = person_with(
        tester_duplicates_document(),
        &[PersonField::Birthdays, PersonField::Names],
    );
    let report = CleanupService::new().dedupe(&mut person).expect("dedupe");

    assert_eq!(report.removed.len(), 1);
    assert_eq!(report.removed.get("birthdays"), Some(&1));
    assert_eq!(
        person.model_snapshot()["emailAddresses"],
        tester_duplicates_document()["emailAddresses"]
    );
}

#[test]
fn dedupe_without_duplicates_reports_no_change() {
    let mut person = person(tester_extensive_document());
    let report = CleanupService::new().dedupe(&mut person).expect("dedupe");
    assert_eq!(report.total_removed(), 0);
    assert!(!report.changed);
    assert_eq!(person.model_snapshot(), tester_extensive_document());
}

#[test]
fn report_serializes_for_cli_output() {
    let mut person = person(tester_duplicates_document());
    let report = CleanupService::new().dedupe(&mut person).expect("dedupe");
    let json = serde_json::to_value(&report).expect("report serializes");
    assert_eq!(json["changed"], json!(true));
    assert_eq!(json["removed"]["emailAddresses"], json!(2));
}
