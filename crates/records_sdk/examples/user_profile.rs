//! Validating and round-tripping a user profile record.
//!
//! Builds a user schema with a constrained account identifier, validates a
//! few candidate inputs, and round-trips the accepted record through JSON.
//!
//! Run with: cargo run --example user_profile

use anyhow::Result;
use records_sdk::{
    from_json, to_json, Constraint, FieldBuilder, FieldType, RawRecord, RawValue, RecordValidator,
    Schema, SchemaBuilder,
};

fn user_schema() -> Schema {
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

fn input(name: &str, email: &str, account_id: RawValue) -> RawRecord {
    let mut raw = RawRecord::new();
    raw.insert("name".to_string(), name.into());
    raw.insert("email".to_string(), email.into());
    raw.insert("account_id".to_string(), account_id);
    raw
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let schema = user_schema();
    let mut validator = RecordValidator::new();

    // A valid profile
    let record = validator
        .validate(&schema, &input("Karl", "john.smith@example.com", RawValue::Int(11303)))
        .expect("input is valid");
    println!("accepted: {record}");
    println!("as json:  {}", to_json(&record)?);

    // account_id outside the allowed window
    if let Err(failure) =
        validator.validate(&schema, &input("Karl", "john.smith@example.com", RawValue::Int(123)))
    {
        print!("rejected:\n{failure}");
    }

    // account_id not parseable as an integer, and a bad email, in one pass
    if let Err(failure) =
        validator.validate(&schema, &input("Karl", "abcd", RawValue::Text("Hi".to_string())))
    {
        print!("rejected:\n{failure}");
    }

    // Round trip through the wire format
    let payload = r#"{"name":"Karl","email":"john.smith@example.com","account_id":11303}"#;
    let decoded = from_json(&schema, payload)?;
    println!("decoded:  {decoded}");

    Ok(())
}
