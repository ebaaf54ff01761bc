//! Schema definitions and validation for STRENDA entity records.
//!
//! This module provides the schema model and the registry holding the 44
//! embedded STRENDA entity schemas, together with the validation engine
//! records run against at construction and on every mutation.
//!
//! # Key Types
//!
//! - [`Schema`] - Entity schema definition with field declarations
//! - [`SchemaRegistry`] - Registry for managing and accessing schemas
//! - [`FieldDefinition`] - Individual field specification
//!
//! # Examples
//!
//! ```rust
//! use strenda_biocat::schema::SchemaRegistry;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = SchemaRegistry::new()?;
//! let schema = registry.resolve("components.Components")?;
//! assert!(schema.has_field("smiles"));
//! # Ok(())
//! # }
//! ```

pub mod embedded;
pub mod registry;
pub mod types;
pub mod validation;


// Re-export the main types for convenience
pub use registry::SchemaRegistry;
pub use types::{Domain, FieldDefinition, FieldType, Schema};
