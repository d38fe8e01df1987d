//! JSON wire format for validated records.
//!
//! Records encode to a flat JSON object whose members appear in schema
//! field order, with strings quoted and integers bare. Decoding parses the
//! text, converts the members to raw values, and delegates field validation
//! to the engine, so a decoded record satisfies exactly the same guarantees
//! as one built from an in-memory mapping.
//!
//! # Example
//!
//! ```rust
//! use records_core::{FieldBuilder, FieldType, SchemaBuilder};
//! use records_json::{from_json, to_json};
//!
//! let schema = SchemaBuilder::new("user")
//!     .field(FieldBuilder::new("name", FieldType::Text).build())
//!     .field(FieldBuilder::new("account_id", FieldType::Integer).build())
//!     .build();
//!
//! let record = from_json(&schema, r#"{"name":"Karl","account_id":11303}"#).unwrap();
//! assert_eq!(to_json(&record).unwrap(), r#"{"name":"Karl","account_id":11303}"#);
//! ```

use std::collections::HashMap;

use thiserror::Error;

use records_core::{ErrorKind, RawRecord, RawValue, Record, Schema, ValidationFailure};
use records_validator::RecordValidator;

/// Errors that can occur when encoding a record to JSON.
#[derive(Debug, Error)]
#[error("failed to encode record: {0}")]
pub struct EncodeError(#[from] serde_json::Error);

/// Errors that can occur when decoding a record from JSON.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The text is not well-formed JSON
    #[error("malformed record payload: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The payload parsed but the top level is not an object
    #[error("record payload must be a JSON object, found {found}")]
    NotAnObject {
        /// JSON type of the top-level value
        found: &'static str,
    },

    /// The payload parsed but one or more fields failed validation
    #[error(transparent)]
    Invalid(#[from] ValidationFailure),
}

impl DecodeError {
    /// Returns the error category of the failure.
    ///
    /// A malformed container is `parse_error`; field-level problems carry
    /// their own kinds inside the validation failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeError::Malformed(_) | DecodeError::NotAnObject { .. } => ErrorKind::ParseError,
            DecodeError::Invalid(failure) => failure
                .errors()
                .first()
                .map(|e| e.kind())
                .unwrap_or(ErrorKind::ValueError),
        }
    }

    /// Returns true when the payload itself was malformed, as opposed to
    /// field-level validation errors.
    pub fn is_parse_error(&self) -> bool {
        !matches!(self, DecodeError::Invalid(_))
    }
}

/// Encodes a record as a flat JSON object in schema field order.
pub fn to_json(record: &Record) -> Result<String, EncodeError> {
    Ok(serde_json::to_string(record)?)
}

/// Decodes a record from JSON, validating it against the schema.
///
/// A fresh validator is created for the call; use [`from_json_with`] to
/// reuse a validator (and its compiled-pattern cache) across calls.
pub fn from_json(schema: &Schema, text: &str) -> Result<Record, DecodeError> {
    let mut validator = RecordValidator::new();
    from_json_with(&mut validator, schema, text)
}

/// Decodes a record from JSON using the given validator.
///
/// Parsing failures short-circuit before any field validation begins: a
/// malformed container cannot be field-checked.
pub fn from_json_with(
    validator: &mut RecordValidator,
    schema: &Schema,
    text: &str,
) -> Result<Record, DecodeError> {
    let value: serde_json::Value = serde_json::from_str(text)?;

    let serde_json::Value::Object(members) = value else {
        return Err(DecodeError::NotAnObject {
            found: json_type_name(&value),
        });
    };

    let raw: RawRecord = members
        .into_iter()
        .map(|(name, member)| (name, raw_from_json(member)))
        .collect();

    Ok(validator.validate(schema, &raw)?)
}

/// Converts a parsed JSON value into a raw candidate value.
fn raw_from_json(value: serde_json::Value) -> RawValue {
    match value {
        serde_json::Value::Null => RawValue::Null,
        serde_json::Value::Bool(b) => RawValue::Bool(b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => RawValue::Int(i),
            // Out-of-range and fractional numbers fall through as floats
            None => RawValue::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        serde_json::Value::String(s) => RawValue::Text(s),
        serde_json::Value::Array(items) => {
            RawValue::List(items.into_iter().map(raw_from_json).collect())
        }
        serde_json::Value::Object(members) => RawValue::Map(
            members
                .into_iter()
                .map(|(name, member)| (name, raw_from_json(member)))
                .collect::<HashMap<_, _>>(),
        ),
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
