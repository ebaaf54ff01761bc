//! JSON-LD term context and vocabulary terms.
//!
//! This module provides the linked-data context attached to every record:
//! the mapping from field names and namespace prefixes to vocabulary
//! terms, plus the [`Term`] type covering both plain IRI terms and nested
//! term descriptors.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Default namespace prefix carried by every record context.
pub const STBC_PREFIX: &str = "stbc";

/// Base IRI registered for [`STBC_PREFIX`] in every fresh context.
pub const STBC_NAMESPACE_IRI: &str = "https://www.github.com/my/repo/";

/// Default type tag for instances of the named schema.
pub(crate) fn default_type_tag(schema_name: &str) -> String {
    format!("{STBC_PREFIX}:{schema_name}")
}

/// A vocabulary term denoting a concept in an external linked-data
/// vocabulary.
///
/// A term is either a plain IRI string (possibly prefix-qualified, e.g.
/// `"schema:givenName"`) or a nested descriptor object carrying its
/// identity under the `@id` key, e.g.
/// `{"@id": "schema:givenName", "@type": "@id"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Term {
    /// Plain IRI or prefixed term string
    Iri(String),
    /// Nested term descriptor
    Descriptor(Map<String, Value>),
}

impl Term {
    /// Identity of the term: the string itself, or the descriptor's
    /// `@id` entry when present.
    pub fn id(&self) -> Option<&str> {
        match self {
            Term::Iri(s) => Some(s),
            Term::Descriptor(map) => map.get("@id").and_then(Value::as_str),
        }
    }

    /// Whether the term's identity starts with `"<prefix>:"`.
    pub fn is_prefixed_with(&self, prefix: &str) -> bool {
        let qualified = format!("{prefix}:");
        self.id().is_some_and(|id| id.starts_with(&qualified))
    }

    /// Render the term for error messages.
    pub(crate) fn display_string(&self) -> String {
        match self {
            Term::Iri(s) => s.clone(),
            Term::Descriptor(map) => Value::Object(map.clone()).to_string(),
        }
    }

    /// Convert into the JSON value stored in a context.
    pub(crate) fn into_value(self) -> Value {
        match self {
            Term::Iri(s) => Value::String(s),
            Term::Descriptor(map) => Value::Object(map),
        }
    }
}

impl From<&str> for Term {
    fn from(value: &str) -> Self {
        Term::Iri(value.to_string())
    }
}

impl From<String> for Term {
    fn from(value: String) -> Self {
        Term::Iri(value)
    }
}

impl From<Map<String, Value>> for Term {
    fn from(value: Map<String, Value>) -> Self {
        Term::Descriptor(value)
    }
}

/// The linked-data context of a record.
///
/// Maps field names and namespace prefixes to vocabulary terms. A fresh
/// context carries the single default namespace entry
/// `{"stbc": "https://www.github.com/my/repo/"}` and is only ever
/// mutated through the record's annotation operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermContext {
    entries: Map<String, Value>,
}

impl TermContext {
    /// Create a context holding the default namespace registration.
    pub fn new() -> Self {
        let mut entries = Map::new();
        entries.insert(
            STBC_PREFIX.to_string(),
            Value::String(STBC_NAMESPACE_IRI.to_string()),
        );
        Self { entries }
    }

    /// Rebuild a context from its serialized mapping.
    pub fn from_map(entries: Map<String, Value>) -> Self {
        Self { entries }
    }

    /// Register `prefix -> iri`, overwriting any prior registration.
    pub fn register_namespace(&mut self, prefix: &str, iri: &str) {
        self.entries
            .insert(prefix.to_string(), Value::String(iri.to_string()));
    }

    /// Assign a term to a context key.
    pub fn set_term(&mut self, key: &str, term: Term) {
        self.entries.insert(key.to_string(), term.into_value());
    }

    /// Look up a context entry.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// The IRI registered for a namespace prefix, if any.
    pub fn namespace_iri(&self, prefix: &str) -> Option<&str> {
        self.entries.get(prefix).and_then(Value::as_str)
    }

    /// The full context mapping.
    pub fn entries(&self) -> &Map<String, Value> {
        &self.entries
    }
}

impl Default for TermContext {
    fn default() -> Self {
        Self::new()
    }
}
