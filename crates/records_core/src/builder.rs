//! Builder pattern for creating schemas.
//!
//! This module provides ergonomic builders for constructing schemas and
//! their field descriptors with a fluent API.

use crate::{Constraint, FieldSpec, FieldType, Schema};

/// Builder for creating a `Schema`.
///
/// # Example
///
/// ```rust
/// use records_core::{FieldBuilder, FieldType, SchemaBuilder};
///
/// let schema = SchemaBuilder::new("user")
///     .field(FieldBuilder::new("name", FieldType::Text).build())
///     .field(FieldBuilder::new("email", FieldType::Email).build())
///     .field(FieldBuilder::new("account_id", FieldType::Integer).build())
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    name: String,
    fields: Vec<FieldSpec>,
}

impl SchemaBuilder {
    /// Creates a new schema builder.
    ///
    /// # Arguments
    ///
    /// * `name` - Name identifying the schema
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Adds a field to the schema.
    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    /// Adds multiple fields to the schema.
    pub fn fields(mut self, fields: Vec<FieldSpec>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Builds the schema.
    pub fn build(self) -> Schema {
        Schema {
            name: self.name,
            fields: self.fields,
        }
    }
}

/// Builder for creating a `FieldSpec`.
///
/// # Example
///
/// ```rust
/// use records_core::{Constraint, FieldBuilder, FieldType};
///
/// let field = FieldBuilder::new("account_id", FieldType::Integer)
///     .description("Unique account identifier")
///     .constraint(Constraint::Range { min: 1, max: 99999 })
///     .build();
/// ```
#[derive(Debug)]
pub struct FieldBuilder {
    name: String,
    field_type: FieldType,
    description: Option<String>,
    constraints: Vec<Constraint>,
}

impl FieldBuilder {
    /// Creates a new field builder.
    ///
    /// # Arguments
    ///
    /// * `name` - Field name
    /// * `field_type` - Declared target type
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            description: None,
            constraints: Vec::new(),
        }
    }

    /// Sets the field description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds a constraint to the field.
    pub fn constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Builds the field descriptor.
    pub fn build(self) -> FieldSpec {
        FieldSpec {
            name: self.name,
            field_type: self.field_type,
            description: self.description,
            constraints: self.constraints,
        }
    }
}
