//! Validating JSON documents and serializing error trees back to JSON

#![cfg(feature = "serde")]

use checkmate::prelude::*;
use serde_json::json;

fn signup_schema() -> Schema {
    Schema::new()
        .field("username", |v| v.is_string().min_length(3).is_alpha_numeric())
        .field("email", |v| v.is_email())
        .field("age", |v| v.is_number())
        .nested(
            "address",
            Schema::new()
                .field("zip", |v| v.is_postal_code())
                .field("country", |v| v.is_in(["US", "CA"])),
        )
}

#[test]
fn valid_json_document() {
    let data = Value::from(json!({
        "username": "alice42",
        "email": "alice@example.com",
        "age": 31,
        "address": { "zip": "94105", "country": "US" },
        "ignored": [1, 2, 3]
    }));

    assert_eq!(signup_schema().validate(&data), None);
}

#[test]
fn error_tree_serializes_like_the_input_shape() {
    let data = Value::from(json!({
        "username": "a!",
        "email": "alice@example.com",
        "age": null,
        "address": { "zip": "9410", "country": "MX" }
    }));

    let errors = signup_schema().validate(&data).unwrap();
    assert_eq!(
        serde_json::to_value(&errors).unwrap(),
        json!({
            "username": [
                "Value must have at least 3 characters.",
                "Value must contain only alphanumeric characters."
            ],
            "age": ["Value must be a number."],
            "address": {
                "zip": ["Value must be a valid postal code."],
                "country": ["Value must be one of: US, CA"]
            }
        })
    );
}

#[test]
fn serialized_keys_follow_schema_order() {
    let data = Value::from(json!({}));
    let errors = signup_schema().validate(&data).unwrap();
    let text = serde_json::to_string(&errors).unwrap();

    let username = text.find("\"username\"").unwrap();
    let email = text.find("\"email\"").unwrap();
    let age = text.find("\"age\"").unwrap();
    let address = text.find("\"address\"").unwrap();
    assert!(username < email && email < age && age < address);
}

#[test]
fn json_null_behaves_like_missing() {
    let schema = Schema::new().field("note", |v| v.is_empty());
    let with_null = schema.validate(&Value::from(json!({ "note": null })));
    let missing = schema.validate(&Value::from(json!({})));
    assert_eq!(with_null, missing);
}

#[test]
fn value_serializes_back_to_json() {
    let original = json!({ "a": [true, "x", 1.5], "b": null });
    let value = Value::from(original.clone());
    assert_eq!(serde_json::to_value(&value).unwrap(), original);
}
