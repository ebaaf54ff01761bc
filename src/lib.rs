//! STRENDA biocatalysis metadata library for Rust.
//!
//! Provides schema-driven, runtime-validated records for biocatalysis
//! experiment metadata — biocatalyst preparations, reaction components,
//! reaction conditions, sampling, vessels/mixing, and results — with
//! JSON-LD vocabulary annotation and exact-match collection filtering.
//!
//! # Core Components
//!
//! - [`SchemaRegistry`] - The 44 embedded STRENDA entity schemas
//! - [`Record`] - A validated instance of one entity schema
//! - [`RecordFilter`] - Exact-match filtering over record collections
//!
//! # Quick Start
//!
//! ```rust
//! use strenda_biocat::{RecordFilter, SchemaRegistry};
//! use serde_json::json;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = SchemaRegistry::new()?;
//! let mut record = registry.instantiate(
//!     "biocatalyst.CrudeCellExtract",
//!     json!({
//!         "cell_disruption_process": "sonication",
//!         "concentration": 12.5,
//!         "concentration_unit": "mg/mL",
//!         "concentration_determination_method": "Bradford",
//!         "special_treatment": "none"
//!     }),
//! )?;
//!
//! // Attach a vocabulary term to a field, registering its namespace
//! record.set_attr_term(
//!     "concentration",
//!     "obi:0000984",
//!     Some("obi"),
//!     Some("http://purl.obolibrary.org/obo/"),
//! )?;
//!
//! // Serialize to the JSON-LD-flavored shape
//! let document = record.to_json();
//! assert!(document["@id"].as_str().unwrap().starts_with("stbc:CrudeCellExtract/"));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod record;
pub mod schema;

// Re-export commonly used types for convenience
pub use error::{BiocatError, BiocatResult, SchemaViolation, ValidationResult};
pub use record::{Record, RecordFilter, RecordId, Term, TermContext};
pub use record::{STBC_NAMESPACE_IRI, STBC_PREFIX};
pub use schema::{Domain, FieldDefinition, FieldType, Schema, SchemaRegistry};
