//! Integration tests for the validation engine.
//!
//! These tests exercise end-to-end validation scenarios using a complete
//! user schema with a constrained account identifier.

use records_core::{
    Constraint, ErrorKind, FieldBuilder, FieldType, FieldValue, RawRecord, RawValue, Schema,
    SchemaBuilder,
};
use records_validator::RecordValidator;

/// Creates a user schema with a custom window constraint on account_id.
fn create_user_schema() -> Schema {
    SchemaBuilder::new("user")
        .field(
            FieldBuilder::new("name", FieldType::Text)
                .description("Display name")
                .build(),
        )
        .field(
            FieldBuilder::new("email", FieldType::Email)
                .description("Primary contact address")
                .build(),
        )
        .field(
            FieldBuilder::new("account_id", FieldType::Integer)
                .description("Unique account identifier")
                .constraint(Constraint::custom("account_id_window", |value| {
                    match value.as_int() {
                        Some(id) if id > 10030 && id < 20000 => Ok(()),
                        Some(id) => Err(format!(
                            "account_id must be between 10030 and 20000, got {id}"
                        )),
                        None => Err("account_id must be an integer".to_string()),
                    }
                }))
                .build(),
        )
        .build()
}

fn create_input(name: &str, email: &str, account_id: RawValue) -> RawRecord {
    let mut raw = RawRecord::new();
    raw.insert("name".to_string(), name.into());
    raw.insert("email".to_string(), email.into());
    raw.insert("account_id".to_string(), account_id);
    raw
}

#[test]
fn test_valid_input_produces_exact_record() {
    let schema = create_user_schema();
    let raw = create_input("Karl", "john.smith@example.com", RawValue::Int(11303));
    let mut validator = RecordValidator::new();

    let record = validator.validate(&schema, &raw).expect("input is valid");

    assert_eq!(record.len(), 3);
    assert_eq!(record.get("name"), Some(&FieldValue::Text("Karl".into())));
    assert_eq!(
        record.get("email"),
        Some(&FieldValue::Text("john.smith@example.com".into()))
    );
    assert_eq!(record.get("account_id"), Some(&FieldValue::Int(11303)));
    assert_eq!(
        record.to_string(),
        "name='Karl' email='john.smith@example.com' account_id=11303"
    );
}

#[test]
fn test_account_id_outside_window_is_value_error() {
    let schema = create_user_schema();
    let raw = create_input("Karl", "john.smith@example.com", RawValue::Int(123));
    let mut validator = RecordValidator::new();

    let failure = validator.validate(&schema, &raw).unwrap_err();

    assert_eq!(failure.len(), 1);
    let error = &failure.errors()[0];
    assert_eq!(error.field(), "account_id");
    assert_eq!(error.kind(), ErrorKind::ValueError);
    assert_eq!(error.input(), Some(&RawValue::Int(123)));
    assert!(
        error
            .to_string()
            .contains("account_id must be between 10030 and 20000, got 123")
    );
}

#[test]
fn test_unparsable_account_id_is_type_error() {
    let schema = create_user_schema();
    let raw = create_input(
        "Karl",
        "john.smith@example.com",
        RawValue::Text("Hi".to_string()),
    );
    let mut validator = RecordValidator::new();

    let failure = validator.validate(&schema, &raw).unwrap_err();

    assert_eq!(failure.len(), 1);
    let error = &failure.errors()[0];
    assert_eq!(error.field(), "account_id");
    assert_eq!(error.kind(), ErrorKind::TypeParsing);
    assert_eq!(error.expected(), FieldType::Integer);
    assert!(error.to_string().contains("integer"));
}

#[test]
fn test_account_id_string_within_window_coerces() {
    let schema = create_user_schema();
    let raw = create_input(
        "Karl",
        "john.smith@example.com",
        RawValue::Text("11303".to_string()),
    );
    let mut validator = RecordValidator::new();

    let record = validator.validate(&schema, &raw).unwrap();
    assert_eq!(record.get("account_id"), Some(&FieldValue::Int(11303)));
}

#[test]
fn test_invalid_email_is_value_error() {
    let schema = create_user_schema();
    let raw = create_input("Karl", "abcd", RawValue::Int(11303));
    let mut validator = RecordValidator::new();

    let failure = validator.validate(&schema, &raw).unwrap_err();

    assert_eq!(failure.len(), 1);
    let error = &failure.errors()[0];
    assert_eq!(error.field(), "email");
    assert_eq!(error.kind(), ErrorKind::ValueError);
    assert!(error.to_string().contains("@-sign"));
}

#[test]
fn test_every_problem_reported_at_once() {
    let schema = create_user_schema();
    // All three fields are wrong in different ways
    let mut raw = RawRecord::new();
    raw.insert("name".to_string(), RawValue::Bool(true));
    raw.insert("email".to_string(), "nobody@".into());
    raw.insert("account_id".to_string(), RawValue::Int(20001));
    let mut validator = RecordValidator::new();

    let failure = validator.validate(&schema, &raw).unwrap_err();

    assert_eq!(failure.len(), 3);
    assert_eq!(
        failure.iter().map(|e| e.field()).collect::<Vec<_>>(),
        vec!["name", "email", "account_id"]
    );
    assert_eq!(
        failure.iter().map(|e| e.kind()).collect::<Vec<_>>(),
        vec![
            ErrorKind::TypeParsing,
            ErrorKind::ValueError,
            ErrorKind::ValueError
        ]
    );
}

#[test]
fn test_validator_reusable_across_outcomes() {
    let schema = create_user_schema();
    let mut validator = RecordValidator::new();

    let good = create_input("Karl", "john.smith@example.com", RawValue::Int(11303));
    let bad = create_input("Karl", "abcd", RawValue::Int(11303));

    assert!(validator.validate(&schema, &good).is_ok());
    assert!(validator.validate(&schema, &bad).is_err());
    assert!(validator.validate(&schema, &good).is_ok());
}
