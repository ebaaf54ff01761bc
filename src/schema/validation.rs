//! Schema validation logic for STRENDA records.
//!
//! This module contains the validation functions that check a candidate
//! attribute mapping against a schema: required-field presence, per-field
//! type checks, and the value coercions (numeric strings to numbers) the
//! upstream data model performs.

use super::types::{FieldDefinition, FieldType, Schema};
use crate::error::{BiocatError, BiocatResult, SchemaViolation, ValidationResult};
use chrono::NaiveDate;
use serde_json::{Map, Value};

impl Schema {
    /// Validate a full candidate mapping against this schema.
    ///
    /// Checks that every supplied key names a declared field, that every
    /// required field is present and non-null, and that each value passes
    /// its field's type check. Returns the coerced mapping; optional
    /// fields supplied as `null` are treated as absent and dropped.
    pub fn validate_record(&self, data: &Value) -> BiocatResult<Map<String, Value>> {
        let obj = data.as_object().ok_or(SchemaViolation::NotAnObject)?;

        // Reject undeclared keys before touching any value
        for field_name in obj.keys() {
            if !self.has_field(field_name) {
                return Err(BiocatError::unknown_field(&self.name, field_name));
            }
        }

        let mut validated = Map::new();
        for def in &self.fields {
            match obj.get(&def.name) {
                None | Some(Value::Null) => {
                    if def.required {
                        return Err(SchemaViolation::missing_required(&def.name).into());
                    }
                }
                Some(value) => {
                    let coerced = self.validate_field(def, value)?;
                    validated.insert(def.name.clone(), coerced);
                }
            }
        }

        Ok(validated)
    }

    /// Validate a single value against one field definition.
    ///
    /// Returns the coerced value on success. The caller's stored state is
    /// never touched here, so a failed check has no observable side
    /// effect.
    pub fn validate_field(&self, def: &FieldDefinition, value: &Value) -> ValidationResult<Value> {
        match def.data_type {
            FieldType::Text => match value {
                Value::String(_) => Ok(value.clone()),
                other => Err(SchemaViolation::invalid_type(
                    &def.name,
                    def.data_type.type_name(),
                    value_type_name(other),
                )),
            },
            FieldType::Float => coerce_float(def, value),
            FieldType::Date => match value {
                Value::String(s) => {
                    // Semantic validation via chrono: no February 30th
                    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
                        SchemaViolation::InvalidDateFormat {
                            field: def.name.clone(),
                            value: s.clone(),
                        }
                    })?;
                    Ok(value.clone())
                }
                other => Err(SchemaViolation::invalid_type(
                    &def.name,
                    def.data_type.type_name(),
                    value_type_name(other),
                )),
            },
        }
    }
}

/// Widen a JSON number or numeric string to a float value.
fn coerce_float(def: &FieldDefinition, value: &Value) -> ValidationResult<Value> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => {
            return Err(SchemaViolation::invalid_type(
                &def.name,
                def.data_type.type_name(),
                value_type_name(value),
            ));
        }
    };

    parsed
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| SchemaViolation::InvalidFloatValue {
            field: def.name.clone(),
            value: value.to_string(),
        })
}

/// Get the type name of a JSON value for error messages.
pub(crate) fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() => "integer",
        Value::Number(_) => "decimal",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
