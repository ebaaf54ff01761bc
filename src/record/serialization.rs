//! JSON-LD serialization for records.
//!
//! Every record serializes to an object carrying the reserved keys `@id`
//! (identity token), `@type` (type-tag list), and `@context` (term
//! context), plus one entry per populated field. [`Record::from_json`]
//! reads that shape back exactly against the same schema.

use crate::error::{BiocatResult, SchemaViolation};
use crate::record::context::{TermContext, default_type_tag};
use crate::record::identity::RecordId;
use crate::record::record::Record;
use crate::schema::Schema;
use crate::schema::validation::value_type_name;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value, json};
use std::sync::Arc;

impl Record {
    /// Serialize to the JSON-LD-flavored object form.
    ///
    /// Fields appear in schema declaration order; absent optional fields
    /// are omitted entirely rather than serialized as `null`.
    pub fn to_json(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("@id".to_string(), json!(self.id().as_str()));
        obj.insert("@type".to_string(), json!(self.type_tags()));
        obj.insert(
            "@context".to_string(),
            Value::Object(self.context().entries().clone()),
        );
        for def in &self.schema().fields {
            if let Some(value) = self.get(&def.name) {
                obj.insert(def.name.clone(), value.clone());
            }
        }
        Value::Object(obj)
    }

    /// Rebuild a record from its JSON-LD form.
    ///
    /// Reserved keys are restored verbatim; a fresh identity and the
    /// defaults are generated only where a reserved key is absent. All
    /// remaining entries are validated as schema fields, so a tampered
    /// document fails the same way invalid construction data does.
    pub fn from_json(schema: Arc<Schema>, value: Value) -> BiocatResult<Self> {
        let mut obj = match value {
            Value::Object(obj) => obj,
            _ => return Err(SchemaViolation::NotAnObject.into()),
        };

        let id = match obj.remove("@id") {
            Some(Value::String(s)) => RecordId::parse(s)?,
            Some(other) => {
                return Err(SchemaViolation::invalid_type(
                    "@id",
                    "string",
                    value_type_name(&other),
                )
                .into());
            }
            None => RecordId::generate(&schema.name),
        };

        let type_tags = match obj.remove("@type") {
            Some(value) => {
                let tags: Vec<String> = serde_json::from_value(value)?;
                if tags.is_empty() {
                    vec![default_type_tag(&schema.name)]
                } else {
                    tags
                }
            }
            None => vec![default_type_tag(&schema.name)],
        };

        let context = match obj.remove("@context") {
            Some(Value::Object(entries)) => TermContext::from_map(entries),
            Some(other) => {
                return Err(SchemaViolation::invalid_type(
                    "@context",
                    "object",
                    value_type_name(&other),
                )
                .into());
            }
            None => TermContext::new(),
        };

        let fields = schema.validate_record(&Value::Object(obj))?;
        Ok(Record::from_parts(schema, id, type_tags, context, fields))
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}
