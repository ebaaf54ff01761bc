//! RecordId value object for record identity tokens.
//!
//! Every record owns exactly one identity token of the form
//! `"stbc:<SchemaName>/<uuid-v4>"`, generated at construction time and
//! immutable thereafter. The random UUID component guarantees global
//! uniqueness without any ordering requirement across instances.

use crate::error::{SchemaViolation, ValidationResult};
use crate::record::context::STBC_PREFIX;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A record identity token.
///
/// Generated once per record via [`RecordId::generate`]; parsed back via
/// [`RecordId::parse`] when a record is rebuilt from its JSON-LD form.
/// An identity token is never empty.
///
/// # Examples
///
/// ```rust
/// use strenda_biocat::record::RecordId;
///
/// let id = RecordId::generate("Components");
/// assert!(id.as_str().starts_with("stbc:Components/"));
/// assert_eq!(id.schema_name(), Some("Components"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Generate a fresh, globally unique identity for the named schema.
    pub fn generate(schema_name: &str) -> Self {
        Self(format!("{STBC_PREFIX}:{schema_name}/{}", Uuid::new_v4()))
    }

    /// Wrap an existing identity token, rejecting empty strings.
    pub fn parse(value: String) -> ValidationResult<Self> {
        if value.is_empty() {
            return Err(SchemaViolation::invalid_type(
                "@id",
                "identity token",
                "empty string",
            ));
        }
        Ok(Self(value))
    }

    /// The identity token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The schema name embedded in the token, when it follows the
    /// `"<prefix>:<SchemaName>/<token>"` layout.
    pub fn schema_name(&self) -> Option<&str> {
        let rest = self.0.split_once(':')?.1;
        Some(rest.split_once('/')?.0)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
