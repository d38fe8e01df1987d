//! Type coercion of raw input values.
//!
//! This module converts untyped candidate values into coerced field values
//! according to the field's declared type:
//!
//! - Integer: integer input accepted, string input parsed in base 10
//! - Text: textual input accepted as-is
//! - Email: textual input checked against the email format rules

use records_core::{FieldError, FieldSpec, FieldType, FieldValue, RawValue};

use crate::email;

/// Attempts to coerce a raw value to the field's declared type.
pub fn coerce(spec: &FieldSpec, raw: &RawValue) -> Result<FieldValue, FieldError> {
    match spec.field_type {
        FieldType::Integer => coerce_integer(spec, raw),
        FieldType::Text => coerce_text(spec, raw),
        FieldType::Email => coerce_email(spec, raw),
    }
}

fn coerce_integer(spec: &FieldSpec, raw: &RawValue) -> Result<FieldValue, FieldError> {
    match raw {
        RawValue::Int(i) => Ok(FieldValue::Int(*i)),
        RawValue::Text(s) => s
            .parse::<i64>()
            .map(FieldValue::Int)
            .map_err(|_| FieldError::type_parsing(&spec.name, raw.clone(), FieldType::Integer)),
        _ => Err(FieldError::type_parsing(
            &spec.name,
            raw.clone(),
            FieldType::Integer,
        )),
    }
}

fn coerce_text(spec: &FieldSpec, raw: &RawValue) -> Result<FieldValue, FieldError> {
    match raw {
        RawValue::Text(s) => Ok(FieldValue::Text(s.clone())),
        _ => Err(FieldError::type_parsing(
            &spec.name,
            raw.clone(),
            FieldType::Text,
        )),
    }
}

fn coerce_email(spec: &FieldSpec, raw: &RawValue) -> Result<FieldValue, FieldError> {
    // Non-textual input never reaches the format rules
    let RawValue::Text(s) = raw else {
        return Err(FieldError::type_parsing(
            &spec.name,
            raw.clone(),
            FieldType::Email,
        ));
    };

    email::check(s)
        .map(|()| FieldValue::Text(s.clone()))
        .map_err(|message| {
            FieldError::value_error(&spec.name, raw.clone(), FieldType::Email, message)
        })
}
