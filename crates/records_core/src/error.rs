//! Error types for record validation.
//!
//! Validation never throws on the first problem: field-level errors are
//! collected into a [`ValidationFailure`] so a single call surfaces the
//! complete set. Schema definition problems are reported separately.

use std::fmt;

use thiserror::Error;

use crate::{FieldType, RawValue};

/// Machine-readable category of a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required field was absent from the input
    MissingField,
    /// A value was present but not coercible to the declared type
    TypeParsing,
    /// A value was coercible but rejected by a format rule or constraint
    ValueError,
    /// The serialized payload itself was malformed
    ParseError,
}

impl ErrorKind {
    /// Returns the snake_case label for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::MissingField => "missing_field",
            ErrorKind::TypeParsing => "type_parsing",
            ErrorKind::ValueError => "value_error",
            ErrorKind::ParseError => "parse_error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validation error on a single field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    /// Required field absent from the input mapping
    #[error("required field '{field}' is missing")]
    MissingField {
        /// Field name
        field: String,
        /// Declared target type
        expected: FieldType,
    },

    /// Value present but not coercible to the declared type
    #[error("invalid value for field '{field}': unable to parse {input} as {expected}")]
    TypeParsing {
        /// Field name
        field: String,
        /// The raw value as provided
        input: RawValue,
        /// Declared target type
        expected: FieldType,
    },

    /// Value coercible but rejected by a format rule or constraint
    #[error("invalid value for field '{field}': {message}")]
    ValueError {
        /// Field name
        field: String,
        /// The raw value as provided
        input: RawValue,
        /// Declared target type
        expected: FieldType,
        /// Description of the violated rule
        message: String,
    },
}

impl FieldError {
    /// Creates a new missing field error.
    pub fn missing_field(field: impl Into<String>, expected: FieldType) -> Self {
        Self::MissingField {
            field: field.into(),
            expected,
        }
    }

    /// Creates a new type parsing error.
    pub fn type_parsing(field: impl Into<String>, input: RawValue, expected: FieldType) -> Self {
        Self::TypeParsing {
            field: field.into(),
            input,
            expected,
        }
    }

    /// Creates a new value error.
    pub fn value_error(
        field: impl Into<String>,
        input: RawValue,
        expected: FieldType,
        message: impl Into<String>,
    ) -> Self {
        Self::ValueError {
            field: field.into(),
            input,
            expected,
            message: message.into(),
        }
    }

    /// Returns the name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            FieldError::MissingField { field, .. }
            | FieldError::TypeParsing { field, .. }
            | FieldError::ValueError { field, .. } => field,
        }
    }

    /// Returns the declared target type of the offending field.
    pub fn expected(&self) -> FieldType {
        match self {
            FieldError::MissingField { expected, .. }
            | FieldError::TypeParsing { expected, .. }
            | FieldError::ValueError { expected, .. } => *expected,
        }
    }

    /// Returns the raw value as provided, if one was present.
    pub fn input(&self) -> Option<&RawValue> {
        match self {
            FieldError::MissingField { .. } => None,
            FieldError::TypeParsing { input, .. } | FieldError::ValueError { input, .. } => {
                Some(input)
            }
        }
    }

    /// Returns the error category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FieldError::MissingField { .. } => ErrorKind::MissingField,
            FieldError::TypeParsing { .. } => ErrorKind::TypeParsing,
            FieldError::ValueError { .. } => ErrorKind::ValueError,
        }
    }
}

/// The complete set of field errors from one validation pass.
///
/// Errors appear in schema field order. A failure always contains at least
/// one error; validation that finds nothing wrong returns a record instead.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationFailure {
    schema: String,
    errors: Vec<FieldError>,
}

impl ValidationFailure {
    /// Creates a new failure for the named schema.
    pub fn new(schema: impl Into<String>, errors: Vec<FieldError>) -> Self {
        Self {
            schema: schema.into(),
            errors,
        }
    }

    /// Returns the name of the schema the record was validated against.
    pub fn schema(&self) -> &str {
        &self.schema
    }

    /// Returns the collected errors in schema field order.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Returns the number of collected errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if no errors were collected.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns an iterator over the collected errors.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Consumes the failure, returning the collected errors.
    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} validation error(s) for '{}'",
            self.errors.len(),
            self.schema
        )?;
        for error in &self.errors {
            writeln!(f, "  {} [type={}]", error, error.kind())?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationFailure {}

/// Errors in the schema definition itself.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    /// Schema has no fields
    #[error("schema '{0}' has no fields defined")]
    Empty(String),

    /// Two fields share a name
    #[error("duplicate field name '{field}' in schema '{schema}'")]
    DuplicateField {
        /// Schema name
        schema: String,
        /// The repeated field name
        field: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_labels() {
        assert_eq!(ErrorKind::MissingField.as_str(), "missing_field");
        assert_eq!(ErrorKind::TypeParsing.as_str(), "type_parsing");
        assert_eq!(ErrorKind::ValueError.as_str(), "value_error");
        assert_eq!(ErrorKind::ParseError.as_str(), "parse_error");
    }

    #[test]
    fn test_field_error_accessors() {
        let err = FieldError::type_parsing(
            "account_id",
            RawValue::Text("Hi".to_string()),
            FieldType::Integer,
        );

        assert_eq!(err.field(), "account_id");
        assert_eq!(err.kind(), ErrorKind::TypeParsing);
        assert_eq!(err.expected(), FieldType::Integer);
        assert_eq!(err.input(), Some(&RawValue::Text("Hi".to_string())));
    }

    #[test]
    fn test_missing_field_has_no_input() {
        let err = FieldError::missing_field("email", FieldType::Email);
        assert_eq!(err.input(), None);
        assert_eq!(err.kind(), ErrorKind::MissingField);
    }

    #[test]
    fn test_type_parsing_message_names_target_type() {
        let err = FieldError::type_parsing(
            "account_id",
            RawValue::Text("Hi".to_string()),
            FieldType::Integer,
        );
        assert_eq!(
            err.to_string(),
            "invalid value for field 'account_id': unable to parse 'Hi' as integer"
        );
    }

    #[test]
    fn test_failure_display_lists_every_error() {
        let failure = ValidationFailure::new(
            "user",
            vec![
                FieldError::missing_field("name", FieldType::Text),
                FieldError::type_parsing("account_id", RawValue::Bool(true), FieldType::Integer),
            ],
        );

        let rendered = failure.to_string();
        assert!(rendered.starts_with("2 validation error(s) for 'user'"));
        assert!(rendered.contains("[type=missing_field]"));
        assert!(rendered.contains("[type=type_parsing]"));
    }
}
