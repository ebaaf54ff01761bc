//! Record model: validated instances of STRENDA entity schemas.
//!
//! This module provides the generic [`Record`] type together with its
//! identity, annotation, filtering, and serialization machinery.
//!
//! # Architecture
//!
//! - **One record type** — every entity kind is a schema *value*, not a
//!   distinct Rust type; [`Record`] holds a shared schema handle and the
//!   validated field mapping
//! - **Validated at the boundary** — construction and every single-field
//!   mutation re-validate against the schema; failed calls have no
//!   observable side effect
//! - **Linked-data annotations** — identity tokens, type tags, and the
//!   term context live beside the fields and serialize as `@id`,
//!   `@type`, `@context`
//!
//! # Key Components
//!
//! * [`Record`] - Schema-validated record with JSON-LD annotations
//! * [`RecordId`] - Generated, immutable identity token
//! * [`Term`] / [`TermContext`] - Vocabulary terms and the per-record context
//! * [`RecordFilter`] - Exact-match collection filtering

pub mod annotation;
pub mod context;
pub mod filter;
pub mod identity;
pub mod record;
pub mod serialization;

// Re-export the main types for convenience
pub use context::{STBC_NAMESPACE_IRI, STBC_PREFIX, Term, TermContext};
pub use filter::RecordFilter;
pub use identity::RecordId;
pub use record::Record;
