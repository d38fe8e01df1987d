//! Record and raw value representations.
//!
//! This module provides the untyped candidate values handed to the
//! validation engine and the immutable, fully-typed records it produces.

use std::collections::HashMap;
use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// An untyped candidate value, before coercion.
///
/// Raw values come from the caller (or from a decoded JSON payload) and may
/// be anything; the validation engine decides what is acceptable for each
/// field.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Null/missing value
    Null,
    /// Text value
    Text(String),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Boolean value
    Bool(bool),
    /// List/array value
    List(Vec<RawValue>),
    /// Map/object value
    Map(HashMap<String, RawValue>),
}

impl RawValue {
    /// Returns true if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, RawValue::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            RawValue::Null => "null",
            RawValue::Text(_) => "string",
            RawValue::Int(_) => "integer",
            RawValue::Float(_) => "float",
            RawValue::Bool(_) => "boolean",
            RawValue::List(_) => "list",
            RawValue::Map(_) => "map",
        }
    }

    /// Attempts to get this value as a string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to get this value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            RawValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Attempts to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            RawValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Null => write!(f, "null"),
            RawValue::Text(s) => write!(f, "'{s}'"),
            RawValue::Int(i) => write!(f, "{i}"),
            RawValue::Float(x) => write!(f, "{x}"),
            RawValue::Bool(b) => write!(f, "{b}"),
            RawValue::List(items) => write!(f, "list of {} values", items.len()),
            RawValue::Map(entries) => write!(f, "map of {} entries", entries.len()),
        }
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<i64> for RawValue {
    fn from(i: i64) -> Self {
        RawValue::Int(i)
    }
}

impl From<f64> for RawValue {
    fn from(f: f64) -> Self {
        RawValue::Float(f)
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        RawValue::Bool(b)
    }
}

/// An untyped candidate record: field name to raw value.
///
/// May contain missing or extra keys relative to the schema it is validated
/// against; extra keys are ignored.
pub type RawRecord = HashMap<String, RawValue>;

/// A fully-coerced field value.
///
/// Email values are stored as text; their format validation already
/// happened during coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Integer value
    Int(i64),
    /// Text value
    Text(String),
}

impl FieldValue {
    /// Attempts to get this value as an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Attempts to get this value as a string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Int(_) => "integer",
            FieldValue::Text(_) => "string",
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(i) => write!(f, "{i}"),
            FieldValue::Text(s) => write!(f, "'{s}'"),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

/// An immutable, fully-validated record.
///
/// A record holds one coerced value per schema field, in schema order.
/// Records are produced by the validation engine; there is no partially
/// valid record, and values cannot change after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    entries: Vec<(String, FieldValue)>,
}

impl Record {
    /// Assembles a record from already-validated entries.
    ///
    /// The validation engine is the intended caller; building a record by
    /// hand bypasses schema validation.
    pub fn from_validated(entries: Vec<(String, FieldValue)>) -> Self {
        Self { entries }
    }

    /// Gets a field value by name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Returns an iterator over `(name, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Returns the field names in schema order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Returns the number of fields in the record.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lowers the record back to an untyped mapping.
    ///
    /// Re-validating the result against the original schema yields an equal
    /// record.
    pub fn to_raw(&self) -> RawRecord {
        self.entries
            .iter()
            .map(|(name, value)| {
                let raw = match value {
                    FieldValue::Int(i) => RawValue::Int(*i),
                    FieldValue::Text(s) => RawValue::Text(s.clone()),
                };
                (name.clone(), raw)
            })
            .collect()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{name}={value}")?;
        }
        Ok(())
    }
}

impl Serialize for Record {
    /// Serializes as a flat map, preserving schema field order.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            match value {
                FieldValue::Int(i) => map.serialize_entry(name, i)?,
                FieldValue::Text(s) => map.serialize_entry(name, s)?,
            }
        }
        map.end()
    }
}
