//! # Records Core
//!
//! Core data structures and types for the Record Validation Engine.
//!
//! This crate provides the fundamental building blocks for describing and
//! holding typed records: schemas made of ordered field descriptors, the
//! untyped candidate values handed to validation, the immutable records
//! validation produces, and the error types it reports with.
//!
//! ## Key Concepts
//!
//! - **Schema**: ordered field descriptors with declared types and constraints
//! - **RawRecord**: an untyped candidate mapping, before validation
//! - **Record**: an immutable, fully-coerced instance of a schema
//! - **ValidationFailure**: every field error from one validation pass
//!
//! ## Example
//!
//! ```rust
//! use records_core::{FieldBuilder, FieldType, SchemaBuilder};
//!
//! let schema = SchemaBuilder::new("user")
//!     .field(FieldBuilder::new("name", FieldType::Text).build())
//!     .field(FieldBuilder::new("email", FieldType::Email).build())
//!     .field(FieldBuilder::new("account_id", FieldType::Integer).build())
//!     .build();
//!
//! assert_eq!(schema.field_names().collect::<Vec<_>>(), vec!["name", "email", "account_id"]);
//! ```

pub mod builder;
pub mod error;
pub mod record;
pub mod schema;

pub use builder::*;
pub use error::*;
pub use record::*;
pub use schema::*;
