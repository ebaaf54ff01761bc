//! Core schema type definitions for STRENDA biocatalysis entities.
//!
//! This module contains the fundamental data structures that describe an
//! entity schema: its identity, its domain grouping, and the named, typed
//! fields a conforming record must carry.

use serde::{Deserialize, Serialize};

/// A STRENDA entity schema definition.
///
/// Represents one entity kind (e.g. a purchased biocatalyst, a stirred
/// tank reactor) as a value: an ordered list of field definitions plus
/// identifying metadata. Records take their schema as a value rather
/// than each entity being its own type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Unique, domain-qualified schema identifier (e.g. `"components.StorageConditions"`)
    pub id: String,
    /// Bare entity name, used in identity tokens and type tags
    pub name: String,
    /// Domain grouping the entity belongs to
    pub domain: Domain,
    /// Schema description
    pub description: String,
    /// Ordered list of field definitions
    pub fields: Vec<FieldDefinition>,
}

impl Schema {
    /// Look up a field definition by name.
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Whether `name` is declared on this schema.
    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Names of all required fields, in declaration order.
    pub fn required_fields(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name.as_str())
    }
}

/// Definition of a single schema field.
///
/// Fields are scalar: free text, a floating-point quantity, or a
/// calendar date. `required` defaults to true since the STRENDA entity
/// definitions declare every field as mandatory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Field name
    pub name: String,
    /// Semantic type of the field
    #[serde(rename = "type")]
    pub data_type: FieldType,
    /// Whether the field must be supplied at construction
    #[serde(default = "default_required")]
    pub required: bool,
}

fn default_required() -> bool {
    true
}

impl FieldDefinition {
    /// Create a required field definition.
    pub fn required(name: impl Into<String>, data_type: FieldType) -> Self {
        Self {
            name: name.into(),
            data_type,
            required: true,
        }
    }

    /// Create an optional field definition.
    pub fn optional(name: impl Into<String>, data_type: FieldType) -> Self {
        Self {
            name: name.into(),
            data_type,
            required: false,
        }
    }
}

/// Semantic field types for STRENDA entity fields.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    /// Free-text value
    Text,
    /// Floating-point quantity (integers and numeric strings are widened)
    Float,
    /// Calendar date in `YYYY-MM-DD` form
    Date,
}

impl FieldType {
    /// Human-readable type name for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Float => "float",
            FieldType::Date => "date",
        }
    }
}

impl Default for FieldType {
    fn default() -> Self {
        Self::Text
    }
}

/// Domain groupings for the embedded STRENDA entity schemas.
///
/// Mirrors the six categories of the STRENDA biocatalysis guidelines:
/// biocatalyst preparations, reaction components, reaction conditions,
/// results, sampling, and vessels/mixing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Biocatalyst,
    Components,
    ReactionConditions,
    Results,
    Sampling,
    VesselsAndMixing,
}

impl Domain {
    /// All domains, in guideline order.
    pub const ALL: [Domain; 6] = [
        Domain::Biocatalyst,
        Domain::Components,
        Domain::ReactionConditions,
        Domain::Results,
        Domain::Sampling,
        Domain::VesselsAndMixing,
    ];

    /// Snake-case domain name as used in schema identifiers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Biocatalyst => "biocatalyst",
            Domain::Components => "components",
            Domain::ReactionConditions => "reaction_conditions",
            Domain::Results => "results",
            Domain::Sampling => "sampling",
            Domain::VesselsAndMixing => "vessels_and_mixing",
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
