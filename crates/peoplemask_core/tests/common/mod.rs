#![allow(dead_code)]

use peoplemask_core::{FieldMask, Person, PersonField};
use serde_json::{json, Value};

pub fn tester_extensive_document() -> Value {
    json!({
        "resourceName": "people/c2093857263",
        "etag": "%EgcBAgMJLi43GgQBAgUHIgxXYVFmR3BJOXZzdz0=",
        "names": [{
            "metadata": {"primary": true, "source": {"type": "CONTACT", "id": "1d0f"}},
            "displayName": "Klaus Tester",
            "displayNameLastFirst": "Tester, Klaus",
            "unstructuredName": "Klaus Dieter Tester",
            "familyName": "Tester",
            "givenName": "Klaus",
            "middleName": "Dieter",
            "honorificPrefix": "Dr.",
            "honorificSuffix": "MA"
        }],
        "addresses": [{
            "formattedValue": "Teststr. 1\n12345 Berlin\nDE",
            "type": "home",
            "formattedType": "Home",
            "streetAddress": "Teststr. 1",
            "city": "Berlin",
            "postalCode": "12345",
            "countryCode": "DE"
        }],
        "birthdays": [{"date": {"year": 1935, "month": 6, "day": 16}}],
        "events": [{
            "date": {"year": 1966, "month": 6, "day": 16},
            "type": "wedding",
            "formattedType": "wedding"
        }],
        "emailAddresses": [
            {"value": "klaus@example.com", "type": "home", "formattedType": "Home"},
            {"value": "k.tester@example.org", "type": "work", "formattedType": "Work"}
        ],
        "phoneNumbers": [
            {"value": "+49 30 1234567", "canonicalForm": "+49301234567", "type": "home", "formattedType": "Home"},
            {"value": "0171 7654321", "canonicalForm": "+491717654321", "type": "mobile", "formattedType": "Mobile"}
        ],
        "organizations": [{"name": "Test GmbH", "title": "Tester"}]
    })
}

pub fn tester_duplicates_document() -> Value {
    json!({
        "resourceName": "people/c7741101",
        "birthdays": [
            {"date": {"year": 1935, "month": 6, "day": 16}},
            {"date": {"year": 1935, "month": 7, "day": 16}},
            {"date": {"year": 1935, "month": 6, "day": 16}}
        ],
        "events": [
            {"date": {"year": 1966, "month": 6, "day": 16}, "type": "wedding"},
            {"date": {"year": 1966, "month": 6, "day": 16}, "type": "anniversary"},
            {"date": {"year": 1966, "month": 6, "day": 16}, "type": "wedding"}
        ],
        "emailAddresses": [
            {"value": "eva@example.com", "type": "home"},
            {"value": "eva@example.com", "type": "work"},
            {"value": "eva.tester@example.org", "type": "work"},
            {"value": "eva@example.com"}
        ],
        "phoneNumbers": [
            {"value": "+49 30 1234567", "type": "home"},
            {"value": "+49 30 1234567", "type": "work"},
            {"value": ""},
            {"value": ""}
        ]
    })
}

pub fn tester_empty_document() -> Value {
    json!({"resourceName": "people/c900001", "etag": "%EgUBAgMJLhoEAQIFBw=="})
}

pub fn person(document: Value) -> Person {
    Person::new(document, FieldMask::all()).expect("fixture should be a valid person")
}

pub fn person_with(document: Value, fields: &[PersonField]) -> Person {
    Person::new(document, FieldMask::new(fields.iter().copied()))
        .expect("fixture should be a valid person")
}
