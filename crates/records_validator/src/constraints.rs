//! Constraint evaluation logic.
//!
//! This module handles evaluation of field constraints including:
//! - AllowedValues: value must be one of a predefined set
//! - Range: integer value must be within min/max bounds
//! - Pattern: text value must match a regex pattern
//! - Custom: user-defined predicate over the coerced value

use std::collections::HashMap;

use regex::Regex;

use records_core::{Constraint, FieldError, FieldSpec, FieldValue, RawValue};

/// Evaluates field constraints against coerced values.
pub struct ConstraintChecker {
    /// Cache of compiled regex patterns
    regex_cache: HashMap<String, Regex>,
}

impl ConstraintChecker {
    /// Creates a new constraint checker.
    pub fn new() -> Self {
        Self {
            regex_cache: HashMap::new(),
        }
    }

    /// Evaluates every constraint on a field against its coerced value.
    ///
    /// Returns one error per failed constraint. An empty list indicates the
    /// value passed.
    pub fn check(
        &mut self,
        spec: &FieldSpec,
        raw: &RawValue,
        value: &FieldValue,
    ) -> Vec<FieldError> {
        let mut errors = Vec::new();

        for constraint in &spec.constraints {
            let outcome = match constraint {
                Constraint::AllowedValues { values } => check_allowed_values(value, values),
                Constraint::Range { min, max } => check_range(value, *min, *max),
                Constraint::Pattern { regex } => self.check_pattern(value, regex),
                Constraint::Custom { check, .. } => check(value),
            };

            if let Err(message) = outcome {
                errors.push(FieldError::value_error(
                    &spec.name,
                    raw.clone(),
                    spec.field_type,
                    message,
                ));
            }
        }

        errors
    }

    /// Checks that a text value matches a regex pattern.
    fn check_pattern(&mut self, value: &FieldValue, pattern: &str) -> Result<(), String> {
        let Some(text) = value.as_text() else {
            return Err(format!(
                "pattern constraint requires a text value, found {}",
                value.type_name()
            ));
        };

        let regex = self.get_or_compile_regex(pattern)?;
        if !regex.is_match(text) {
            return Err(format!(
                "value '{text}' does not match pattern '{pattern}'"
            ));
        }

        Ok(())
    }

    /// Gets a compiled regex from cache or compiles and caches it.
    fn get_or_compile_regex(&mut self, pattern: &str) -> Result<&Regex, String> {
        if !self.regex_cache.contains_key(pattern) {
            let regex = Regex::new(pattern)
                .map_err(|e| format!("invalid pattern '{pattern}': {e}"))?;
            self.regex_cache.insert(pattern.to_string(), regex);
        }
        Ok(self.regex_cache.get(pattern).unwrap())
    }
}

impl Default for ConstraintChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// Checks that a value is in the allowed set.
fn check_allowed_values(value: &FieldValue, allowed: &[String]) -> Result<(), String> {
    let matches = match value {
        FieldValue::Text(s) => allowed.iter().any(|a| a == s),
        FieldValue::Int(i) => {
            let rendered = i.to_string();
            allowed.iter().any(|a| *a == rendered)
        }
    };

    if !matches {
        return Err(format!(
            "value {} not in allowed values: [{}]",
            value,
            allowed.join(", ")
        ));
    }

    Ok(())
}

/// Checks that an integer value is within an inclusive range.
fn check_range(value: &FieldValue, min: i64, max: i64) -> Result<(), String> {
    let Some(i) = value.as_int() else {
        return Err(format!(
            "range constraint requires an integer value, found {}",
            value.type_name()
        ));
    };

    if i < min || i > max {
        return Err(format!("value {i} out of range [{min}, {max}]"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use records_core::{Constraint, ErrorKind, FieldBuilder, FieldType};

    fn status_spec(constraint: Constraint) -> FieldSpec {
        FieldBuilder::new("status", FieldType::Text)
            .constraint(constraint)
            .build()
    }

    fn check_one(spec: &FieldSpec, value: FieldValue) -> Vec<FieldError> {
        let raw = match &value {
            FieldValue::Int(i) => RawValue::Int(*i),
            FieldValue::Text(s) => RawValue::Text(s.clone()),
        };
        ConstraintChecker::new().check(spec, &raw, &value)
    }

    #[test]
    fn test_allowed_values_valid() {
        let spec = status_spec(Constraint::AllowedValues {
            values: vec!["active".to_string(), "inactive".to_string()],
        });
        let errors = check_one(&spec, FieldValue::Text("active".to_string()));
        assert_eq!(errors.len(), 0);
    }

    #[test]
    fn test_allowed_values_invalid() {
        let spec = status_spec(Constraint::AllowedValues {
            values: vec!["active".to_string(), "inactive".to_string()],
        });
        let errors = check_one(&spec, FieldValue::Text("pending".to_string()));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind(), ErrorKind::ValueError);
    }

    #[test]
    fn test_allowed_values_matches_integers_by_rendering() {
        let spec = FieldBuilder::new("code", FieldType::Integer)
            .constraint(Constraint::AllowedValues {
                values: vec!["1".to_string(), "2".to_string()],
            })
            .build();
        assert_eq!(check_one(&spec, FieldValue::Int(1)).len(), 0);
        assert_eq!(check_one(&spec, FieldValue::Int(3)).len(), 1);
    }

    #[test]
    fn test_range_valid() {
        let spec = FieldBuilder::new("age", FieldType::Integer)
            .constraint(Constraint::Range { min: 0, max: 120 })
            .build();
        assert_eq!(check_one(&spec, FieldValue::Int(25)).len(), 0);
        assert_eq!(check_one(&spec, FieldValue::Int(0)).len(), 0);
        assert_eq!(check_one(&spec, FieldValue::Int(120)).len(), 0);
    }

    #[test]
    fn test_range_invalid() {
        let spec = FieldBuilder::new("age", FieldType::Integer)
            .constraint(Constraint::Range { min: 0, max: 120 })
            .build();
        let errors = check_one(&spec, FieldValue::Int(150));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("out of range"));
    }

    #[test]
    fn test_range_rejects_text_values() {
        let spec = status_spec(Constraint::Range { min: 0, max: 10 });
        let errors = check_one(&spec, FieldValue::Text("five".to_string()));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("requires an integer value"));
    }

    #[test]
    fn test_pattern_valid() {
        let spec = status_spec(Constraint::Pattern {
            regex: r"^[a-z]+$".to_string(),
        });
        assert_eq!(check_one(&spec, FieldValue::Text("active".to_string())).len(), 0);
    }

    #[test]
    fn test_pattern_invalid() {
        let spec = status_spec(Constraint::Pattern {
            regex: r"^[a-z]+$".to_string(),
        });
        let errors = check_one(&spec, FieldValue::Text("Active!".to_string()));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("does not match pattern"));
    }

    #[test]
    fn test_invalid_regex_reported_on_field() {
        let spec = status_spec(Constraint::Pattern {
            regex: "[invalid(regex".to_string(),
        });
        let errors = check_one(&spec, FieldValue::Text("anything".to_string()));
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("invalid pattern"));
    }

    #[test]
    fn test_pattern_cache_reused_across_checks() {
        let spec = status_spec(Constraint::Pattern {
            regex: r"^[a-z]+$".to_string(),
        });
        let mut checker = ConstraintChecker::new();
        let raw = RawValue::Text("active".to_string());
        let value = FieldValue::Text("active".to_string());

        assert_eq!(checker.check(&spec, &raw, &value).len(), 0);
        assert_eq!(checker.check(&spec, &raw, &value).len(), 0);
        assert_eq!(checker.regex_cache.len(), 1);
    }

    #[test]
    fn test_custom_constraint_failure_carries_message() {
        let spec = FieldBuilder::new("account_id", FieldType::Integer)
            .constraint(Constraint::custom("account_id_window", |value| {
                match value.as_int() {
                    Some(id) if id > 10030 && id < 20000 => Ok(()),
                    Some(id) => Err(format!(
                        "account_id must be between 10030 and 20000, got {id}"
                    )),
                    None => Err("account_id must be an integer".to_string()),
                }
            }))
            .build();

        assert_eq!(check_one(&spec, FieldValue::Int(11303)).len(), 0);

        let errors = check_one(&spec, FieldValue::Int(123));
        assert_eq!(errors.len(), 1);
        assert!(
            errors[0]
                .to_string()
                .contains("account_id must be between 10030 and 20000, got 123")
        );
    }

    #[test]
    fn test_multiple_constraints_each_report() {
        let spec = FieldBuilder::new("status", FieldType::Text)
            .constraint(Constraint::AllowedValues {
                values: vec!["active".to_string()],
            })
            .constraint(Constraint::Pattern {
                regex: r"^[a-z]+$".to_string(),
            })
            .build();

        let errors = check_one(&spec, FieldValue::Text("Pending".to_string()));
        assert_eq!(errors.len(), 2);
    }
}
