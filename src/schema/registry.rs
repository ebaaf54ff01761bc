//! Schema registry for loading and accessing the STRENDA entity schemas.
//!
//! The registry owns the 44 embedded entity schemas and hands out shared
//! handles (`Arc<Schema>`) that records hold for the rest of their
//! lifetime. Schemas can also be registered programmatically for callers
//! that define entities of their own.

use super::embedded;
use super::types::{Domain, Schema};
use crate::error::{BiocatError, BiocatResult};
use crate::record::Record;
use log::debug;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry for STRENDA entity schemas.
///
/// Keeps schemas in declaration order and indexed by their
/// domain-qualified identifier. The embedded set covers all six STRENDA
/// domains; see [`Domain`].
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    schemas: Vec<Arc<Schema>>,
    by_id: HashMap<String, usize>,
}

impl SchemaRegistry {
    /// Create a registry holding the embedded STRENDA schemas.
    pub fn new() -> BiocatResult<Self> {
        let mut registry = Self {
            schemas: Vec::new(),
            by_id: HashMap::new(),
        };

        for (domain, raw) in embedded::all() {
            let schemas: Vec<Schema> = serde_json::from_str(raw)?;
            for schema in schemas {
                debug_assert_eq!(schema.domain, domain);
                registry.insert(schema);
            }
        }

        debug!("loaded {} embedded entity schemas", registry.len());
        Ok(registry)
    }

    /// Create an empty registry, for callers bringing their own schemas.
    pub fn empty() -> Self {
        Self {
            schemas: Vec::new(),
            by_id: HashMap::new(),
        }
    }

    /// Register a schema. A schema with the same identifier is replaced.
    pub fn insert(&mut self, schema: Schema) {
        let id = schema.id.clone();
        let schema = Arc::new(schema);
        match self.by_id.get(&id) {
            Some(&idx) => self.schemas[idx] = schema,
            None => {
                self.by_id.insert(id, self.schemas.len());
                self.schemas.push(schema);
            }
        }
    }

    /// Get a schema by its domain-qualified identifier.
    pub fn get_schema(&self, id: &str) -> Option<&Arc<Schema>> {
        self.by_id.get(id).map(|&idx| &self.schemas[idx])
    }

    /// Get a schema by identifier, failing with [`BiocatError::SchemaNotFound`].
    pub fn resolve(&self, id: &str) -> BiocatResult<&Arc<Schema>> {
        self.get_schema(id)
            .ok_or_else(|| BiocatError::schema_not_found(id))
    }

    /// All registered schemas, in registration order.
    pub fn schemas(&self) -> impl Iterator<Item = &Arc<Schema>> {
        self.schemas.iter()
    }

    /// All schemas belonging to one domain, in registration order.
    pub fn schemas_in_domain(&self, domain: Domain) -> Vec<&Arc<Schema>> {
        self.schemas.iter().filter(|s| s.domain == domain).collect()
    }

    /// Number of registered schemas.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Whether the registry holds no schemas.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Construct a validated record of the named schema.
    ///
    /// Shorthand for [`Record::new`] with a registry lookup.
    pub fn instantiate(&self, schema_id: &str, data: Value) -> BiocatResult<Record> {
        let schema = self.resolve(schema_id)?;
        Record::new(Arc::clone(schema), data)
    }

    /// Rebuild a record of the named schema from its JSON-LD form.
    pub fn record_from_json(&self, schema_id: &str, value: Value) -> BiocatResult<Record> {
        let schema = self.resolve(schema_id)?;
        Record::from_json(Arc::clone(schema), value)
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new().expect("Failed to load embedded schemas")
    }
}
