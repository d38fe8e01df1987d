//! # Records Validator
//!
//! Validation engine for the Record Validation Engine. This crate provides
//! the core validation logic for checking untyped candidate mappings
//! against a schema, including:
//!
//! - Presence checks (every schema field must be provided)
//! - Type coercion (integers, text, validated email addresses)
//! - Constraint evaluation (allowed values, ranges, patterns, custom predicates)
//!
//! All field errors from a validation pass are collected and reported
//! together; a record is only produced when every field passed.
//!
//! ## Example
//!
//! ```rust
//! use records_core::{FieldBuilder, FieldType, RawRecord, SchemaBuilder};
//! use records_validator::RecordValidator;
//!
//! let schema = SchemaBuilder::new("user")
//!     .field(FieldBuilder::new("email", FieldType::Email).build())
//!     .build();
//!
//! let mut raw = RawRecord::new();
//! raw.insert("email".to_string(), "abcd".into());
//!
//! let mut validator = RecordValidator::new();
//! let failure = validator.validate(&schema, &raw).unwrap_err();
//! assert_eq!(failure.len(), 1);
//! ```

mod coerce;
mod constraints;
mod email;
mod engine;

pub use coerce::coerce;
pub use constraints::ConstraintChecker;
pub use email::check as check_email;
pub use engine::RecordValidator;
