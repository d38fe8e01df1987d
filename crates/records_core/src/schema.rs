//! Schema types for record validation.
//!
//! This module contains the core types for describing the expected shape of
//! a record: the declared target type of each field, optional per-field
//! constraints, and the ordered schema that ties them together.

use std::fmt;
use std::sync::Arc;

use crate::FieldValue;

/// Declared target type of a schema field.
///
/// Raw input values are coerced to this type during validation; see the
/// `records_validator` crate for the coercion rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// 64-bit signed integer. String input is parsed in base 10.
    Integer,
    /// Free-form text, accepted as-is.
    Text,
    /// Text that must be a well-formed email address.
    Email,
}

impl FieldType {
    /// Returns the lowercase label used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::Integer => "integer",
            FieldType::Text => "string",
            FieldType::Email => "email",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Signature for custom constraint predicates.
///
/// The predicate receives the already-coerced value and returns `Ok(())` on
/// pass or a human-readable message on fail.
pub type CheckFn = Arc<dyn Fn(&FieldValue) -> Result<(), String> + Send + Sync>;

/// Validation constraints that can be applied to a field.
///
/// Constraints run only after the value has been successfully coerced to
/// the field's declared type.
#[derive(Clone)]
pub enum Constraint {
    /// Field value must be one of the allowed values.
    AllowedValues {
        /// List of valid values
        values: Vec<String>,
    },

    /// Integer field must be within the inclusive range.
    Range {
        /// Minimum value (inclusive)
        min: i64,
        /// Maximum value (inclusive)
        max: i64,
    },

    /// Text field must match the regex pattern.
    Pattern {
        /// Regular expression pattern
        regex: String,
    },

    /// User-defined predicate over the coerced value.
    Custom {
        /// Name identifying the constraint in error messages
        name: String,
        /// The predicate to run
        check: CheckFn,
    },
}

impl Constraint {
    /// Creates a custom constraint from a predicate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use records_core::{Constraint, FieldValue};
    ///
    /// let window = Constraint::custom("account_id_window", |value: &FieldValue| {
    ///     match value.as_int() {
    ///         Some(id) if id > 10030 && id < 20000 => Ok(()),
    ///         Some(id) => Err(format!("account_id must be between 10030 and 20000, got {id}")),
    ///         None => Err("account_id must be an integer".to_string()),
    ///     }
    /// });
    /// ```
    pub fn custom<F>(name: impl Into<String>, check: F) -> Self
    where
        F: Fn(&FieldValue) -> Result<(), String> + Send + Sync + 'static,
    {
        Self::Custom {
            name: name.into(),
            check: Arc::new(check),
        }
    }
}

impl fmt::Debug for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::AllowedValues { values } => f
                .debug_struct("AllowedValues")
                .field("values", values)
                .finish(),
            Constraint::Range { min, max } => f
                .debug_struct("Range")
                .field("min", min)
                .field("max", max)
                .finish(),
            Constraint::Pattern { regex } => {
                f.debug_struct("Pattern").field("regex", regex).finish()
            }
            // The predicate itself is opaque
            Constraint::Custom { name, .. } => f
                .debug_struct("Custom")
                .field("name", name)
                .finish_non_exhaustive(),
        }
    }
}

/// A single field descriptor in a schema.
///
/// Describes one expected field with its declared type and the constraints
/// its coerced value must satisfy.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Field name, unique within the schema
    pub name: String,

    /// Declared target type
    pub field_type: FieldType,

    /// Optional human-readable description
    pub description: Option<String>,

    /// Constraints evaluated after successful coercion
    pub constraints: Vec<Constraint>,
}

/// An ordered schema describing the expected fields of a record.
///
/// Field order is significant: validation reports errors in schema order
/// and records preserve it through serialization.
#[derive(Debug, Clone)]
pub struct Schema {
    /// Name identifying the schema (e.g. "user")
    pub name: String,

    /// Ordered field descriptors
    pub fields: Vec<FieldSpec>,
}

impl Schema {
    /// Looks up a field descriptor by name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns the field names in schema order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Returns the number of fields in the schema.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
