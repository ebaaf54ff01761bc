//! Error types for STRENDA biocatalysis record operations.
//!
//! This module provides the error taxonomy for record construction,
//! mutation, filtering, and JSON-LD annotation. Every error is raised
//! synchronously to the immediate caller; nothing is retried or
//! recovered internally.

/// Main error type for record operations.
///
/// Covers every failure a caller can observe when instantiating records,
/// filtering collections, or attaching vocabulary terms.
#[derive(Debug, thiserror::Error)]
pub enum BiocatError {
    /// Record data doesn't conform to its schema
    #[error("Schema violation: {0}")]
    Schema(#[from] SchemaViolation),

    /// A referenced field name is not declared on the schema
    #[error("Unknown field '{field}' on schema '{schema}'")]
    UnknownField { schema: String, field: String },

    /// A supplied term is not qualified with the expected prefix
    #[error("Term '{term}' is not prefixed with '{prefix}'")]
    PrefixMismatch { term: String, prefix: String },

    /// Exactly one of prefix/IRI was supplied without its pair
    #[error("Incomplete namespace: {supplied} supplied without its counterpart")]
    IncompleteNamespace { supplied: &'static str },

    /// Schema lookup failed in the registry
    #[error("Schema not found: {schema_id}")]
    SchemaNotFound { schema_id: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation errors for schema compliance checking.
///
/// These errors occur when record data doesn't conform to the declared
/// schema, at construction or on a later single-field mutation.
#[derive(Debug, thiserror::Error)]
pub enum SchemaViolation {
    /// Required field is missing
    #[error("Required field '{field}' is missing")]
    MissingRequiredField { field: String },

    /// Field value doesn't match expected type
    #[error("Field '{field}' has invalid type, expected {expected}, got {actual}")]
    InvalidFieldType {
        field: String,
        expected: String,
        actual: String,
    },

    /// Float field value cannot be parsed as a number
    #[error("Field '{field}' has invalid numeric value: {value}")]
    InvalidFloatValue { field: String, value: String },

    /// Date field value is not a valid calendar date
    #[error("Field '{field}' has invalid date format: {value}")]
    InvalidDateFormat { field: String, value: String },

    /// Record data is not a JSON object
    #[error("Record data must be a JSON object")]
    NotAnObject,
}

// Convenience methods for creating common errors
impl BiocatError {
    /// Create an unknown field error
    pub fn unknown_field(schema: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnknownField {
            schema: schema.into(),
            field: field.into(),
        }
    }

    /// Create a prefix mismatch error
    pub fn prefix_mismatch(term: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self::PrefixMismatch {
            term: term.into(),
            prefix: prefix.into(),
        }
    }

    /// Create a schema not found error
    pub fn schema_not_found(schema_id: impl Into<String>) -> Self {
        Self::SchemaNotFound {
            schema_id: schema_id.into(),
        }
    }
}

impl SchemaViolation {
    /// Create a missing required field error
    pub fn missing_required(field: impl Into<String>) -> Self {
        Self::MissingRequiredField {
            field: field.into(),
        }
    }

    /// Create an invalid type error
    pub fn invalid_type(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::InvalidFieldType {
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

// Result type aliases for convenience
pub type BiocatResult<T> = Result<T, BiocatError>;
pub type ValidationResult<T> = Result<T, SchemaViolation>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = BiocatError::unknown_field("Components", "solvent");
        assert!(error.to_string().contains("Components"));
        assert!(error.to_string().contains("solvent"));
    }

    #[test]
    fn test_validation_error_creation() {
        let error = SchemaViolation::missing_required("ec_number");
        assert!(error.to_string().contains("ec_number"));
    }

    #[test]
    fn test_error_chain() {
        let violation = SchemaViolation::missing_required("ec_number");
        let error = BiocatError::from(violation);
        assert!(error.to_string().contains("Schema violation"));
    }

    #[test]
    fn test_prefix_mismatch_display() {
        let error = BiocatError::prefix_mismatch("givenName", "schema");
        assert_eq!(
            error.to_string(),
            "Term 'givenName' is not prefixed with 'schema'"
        );
    }
}
