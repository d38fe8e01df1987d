//! # Records SDK
//!
//! Public API for the Record Validation Engine. This crate re-exports the
//! schema and record types, the validation engine, and the JSON wire
//! format behind a single dependency.
//!
//! ## Example
//!
//! ```rust
//! use records_sdk::{
//!     from_json, to_json, FieldBuilder, FieldType, RawRecord, RecordValidator, SchemaBuilder,
//! };
//!
//! let schema = SchemaBuilder::new("user")
//!     .field(FieldBuilder::new("name", FieldType::Text).build())
//!     .field(FieldBuilder::new("email", FieldType::Email).build())
//!     .field(FieldBuilder::new("account_id", FieldType::Integer).build())
//!     .build();
//!
//! let mut raw = RawRecord::new();
//! raw.insert("name".to_string(), "Karl".into());
//! raw.insert("email".to_string(), "john.smith@example.com".into());
//! raw.insert("account_id".to_string(), 11303i64.into());
//!
//! let mut validator = RecordValidator::new();
//! let record = validator.validate(&schema, &raw).expect("input is valid");
//!
//! let payload = to_json(&record).unwrap();
//! let decoded = from_json(&schema, &payload).unwrap();
//! assert_eq!(decoded, record);
//! ```

pub use records_core::{
    builder::{FieldBuilder, SchemaBuilder},
    error::{ErrorKind, FieldError, SchemaError, ValidationFailure},
    record::{FieldValue, RawRecord, RawValue, Record},
    schema::{CheckFn, Constraint, FieldSpec, FieldType, Schema},
};
pub use records_json::{from_json, from_json_with, to_json, DecodeError, EncodeError};
pub use records_validator::RecordValidator;
