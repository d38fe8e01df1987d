//! Main validation engine.
//!
//! This module provides the `RecordValidator` that orchestrates presence
//! checks, type coercion, and constraint evaluation, collecting every
//! field error before reporting.

use std::collections::HashSet;

use tracing::debug;

use records_core::{
    FieldError, RawRecord, Record, Schema, SchemaError, ValidationFailure,
};

use crate::coerce::coerce;
use crate::constraints::ConstraintChecker;

/// Validation engine for records.
///
/// Validates untyped candidate mappings against a schema and produces
/// either an immutable [`Record`] or a [`ValidationFailure`] listing every
/// offending field. The only internal state is a compiled-regex cache, so
/// a single validator can be reused across calls.
///
/// # Example
///
/// ```rust
/// use records_core::{FieldBuilder, FieldType, RawRecord, SchemaBuilder};
/// use records_validator::RecordValidator;
///
/// let schema = SchemaBuilder::new("user")
///     .field(FieldBuilder::new("name", FieldType::Text).build())
///     .field(FieldBuilder::new("account_id", FieldType::Integer).build())
///     .build();
///
/// let mut raw = RawRecord::new();
/// raw.insert("name".to_string(), "jack".into());
/// raw.insert("account_id".to_string(), 123i64.into());
///
/// let mut validator = RecordValidator::new();
/// let record = validator.validate(&schema, &raw).expect("valid input");
/// assert_eq!(record.to_string(), "name='jack' account_id=123");
/// ```
pub struct RecordValidator {
    constraints: ConstraintChecker,
}

impl RecordValidator {
    /// Creates a new record validator.
    pub fn new() -> Self {
        Self {
            constraints: ConstraintChecker::new(),
        }
    }

    /// Validates a raw mapping against a schema.
    ///
    /// Every field is checked in schema order; validation never aborts on
    /// the first problem, so the caller sees the complete set of errors in
    /// one pass. Extra keys in the input are ignored.
    ///
    /// # Returns
    ///
    /// A [`Record`] holding one coerced value per schema field, or a
    /// [`ValidationFailure`] with at least one error. There is no partial
    /// success.
    pub fn validate(
        &mut self,
        schema: &Schema,
        raw: &RawRecord,
    ) -> Result<Record, ValidationFailure> {
        debug!(
            schema = %schema.name,
            fields = schema.fields.len(),
            "validating record"
        );

        let mut entries = Vec::with_capacity(schema.fields.len());
        let mut errors = Vec::new();

        for spec in &schema.fields {
            let Some(value) = raw.get(&spec.name) else {
                errors.push(FieldError::missing_field(&spec.name, spec.field_type));
                continue;
            };

            match coerce(spec, value) {
                Ok(coerced) => {
                    let constraint_errors = self.constraints.check(spec, value, &coerced);
                    if constraint_errors.is_empty() {
                        entries.push((spec.name.clone(), coerced));
                    } else {
                        // The coerced value is discarded for this field
                        errors.extend(constraint_errors);
                    }
                }
                Err(err) => errors.push(err),
            }
        }

        if errors.is_empty() {
            Ok(Record::from_validated(entries))
        } else {
            debug!(
                schema = %schema.name,
                errors = errors.len(),
                "record rejected"
            );
            Err(ValidationFailure::new(schema.name.clone(), errors))
        }
    }

    /// Checks that the schema definition itself is well-formed.
    ///
    /// Rejects empty schemas and duplicate field names. Returns a list of
    /// problems; an empty list indicates the schema is usable.
    pub fn check_schema(&self, schema: &Schema) -> Vec<SchemaError> {
        let mut errors = Vec::new();

        if schema.fields.is_empty() {
            errors.push(SchemaError::Empty(schema.name.clone()));
        }

        let mut seen = HashSet::new();
        for spec in &schema.fields {
            if !seen.insert(&spec.name) {
                errors.push(SchemaError::DuplicateField {
                    schema: schema.name.clone(),
                    field: spec.name.clone(),
                });
            }
        }

        errors
    }
}

impl Default for RecordValidator {
    fn default() -> Self {
        Self::new()
    }
}
