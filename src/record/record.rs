//! Core record representation and lifecycle.
//!
//! This module contains the [`Record`] type: a single generic,
//! schema-driven record that covers every STRENDA entity kind. Entities
//! are schema instances, not distinct types; a record takes its schema
//! as a value and validates against it at construction and on every
//! subsequent mutation.

use crate::error::{BiocatError, BiocatResult, SchemaViolation};
use crate::record::context::{TermContext, default_type_tag};
use crate::record::identity::RecordId;
use crate::schema::Schema;
use log::debug;
use serde_json::{Map, Value};
use std::sync::Arc;

/// A validated instance of one entity schema.
///
/// A record owns its identity token, its append-only type-tag list, its
/// linked-data context, and the validated field values. Required fields
/// hold a valid value of their declared type at all times after
/// construction; a failed mutation leaves the record unchanged.
///
/// # Examples
///
/// ```rust
/// use strenda_biocat::{Record, SchemaRegistry};
/// use serde_json::json;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let registry = SchemaRegistry::new()?;
///     let record = registry.instantiate(
///         "sampling.SamplePreprocessing",
///         json!({
///             "quenching_method": "acid quench",
///             "quenching_ratio": "1:1",
///             "treatment_procedure": "centrifugation",
///             "special_treatment": "none"
///         }),
///     )?;
///
///     assert!(record.id().as_str().starts_with("stbc:SamplePreprocessing/"));
///     assert_eq!(record.type_tags(), ["stbc:SamplePreprocessing"]);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Record {
    schema: Arc<Schema>,
    id: RecordId,
    type_tags: Vec<String>,
    context: TermContext,
    fields: Map<String, Value>,
}

impl Record {
    /// Create a record from a candidate attribute mapping.
    ///
    /// Every required field must be present and valid; unknown keys are
    /// rejected. On success the record receives a fresh identity token,
    /// the schema's default type tag, and the default namespace context.
    pub fn new(schema: Arc<Schema>, data: Value) -> BiocatResult<Self> {
        let fields = schema.validate_record(&data)?;
        let id = RecordId::generate(&schema.name);
        let type_tags = vec![default_type_tag(&schema.name)];
        debug!("created record {} of schema {}", id, schema.id);

        Ok(Self {
            schema,
            id,
            type_tags,
            context: TermContext::new(),
            fields,
        })
    }

    /// Reassemble a record from already-validated parts.
    pub(crate) fn from_parts(
        schema: Arc<Schema>,
        id: RecordId,
        type_tags: Vec<String>,
        context: TermContext,
        fields: Map<String, Value>,
    ) -> Self {
        Self {
            schema,
            id,
            type_tags,
            context,
            fields,
        }
    }

    /// The schema this record conforms to.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Shared handle to the schema, for constructing sibling records.
    pub fn schema_handle(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// The record's immutable identity token.
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    /// The record's type tags. Index 0 is always the schema's default tag.
    pub fn type_tags(&self) -> &[String] {
        &self.type_tags
    }

    /// The record's linked-data context.
    pub fn context(&self) -> &TermContext {
        &self.context
    }

    /// Read a field value. Absent optional fields return `None`.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// All populated fields.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Assign a field value, re-validating only that field.
    ///
    /// `null` clears an optional field; clearing a required field is a
    /// [`SchemaViolation`]. On failure the stored value is unchanged.
    pub fn set(&mut self, field: &str, value: Value) -> BiocatResult<()> {
        let def = self
            .schema
            .field(field)
            .ok_or_else(|| BiocatError::unknown_field(&self.schema.name, field))?;

        if value.is_null() {
            if def.required {
                return Err(SchemaViolation::missing_required(field).into());
            }
            self.fields.remove(field);
            return Ok(());
        }

        let coerced = self.schema.validate_field(def, &value)?;
        self.fields.insert(field.to_string(), coerced);
        Ok(())
    }

    pub(crate) fn type_tags_mut(&mut self) -> &mut Vec<String> {
        &mut self.type_tags
    }

    pub(crate) fn context_mut(&mut self) -> &mut TermContext {
        &mut self.context
    }
}
