//! JSON-LD term annotation operations.
//!
//! The two mutators that attach vocabulary terms to a record after
//! construction: [`Record::set_attr_term`] maps a declared field to a
//! term in the record's context, [`Record::add_type_term`] appends a tag
//! to the record's type list. Both run every check before touching the
//! record, so a failed call leaves the annotation state untouched.

use crate::error::{BiocatError, BiocatResult};
use crate::record::context::Term;
use crate::record::record::Record;

impl Record {
    /// Map a declared field to a vocabulary term in the record's context.
    ///
    /// When `prefix` and `iri` are given, the namespace registration
    /// `prefix -> iri` happens atomically with the term assignment, and
    /// the term (its string form, or a descriptor's `@id`) must be
    /// qualified with that prefix.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strenda_biocat::{Record, SchemaRegistry};
    /// use serde_json::json;
    ///
    /// fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let registry = SchemaRegistry::new()?;
    ///     let mut record = registry.instantiate(
    ///         "components.Components",
    ///         json!({
    ///             "name": "benzaldehyde",
    ///             "smiles": "O=Cc1ccccc1",
    ///             "persistent_identifier_PID": "CHEBI:17169",
    ///             "concentration": 10.0,
    ///             "concentration_unit": "mM",
    ///             "supplier": "Sigma",
    ///             "purity": 99.0,
    ///             "formulation": "liquid",
    ///             "solubility_limit": 60.0,
    ///             "solubility_limit_unit": "mM"
    ///         }),
    ///     )?;
    ///
    ///     // Using a plain IRI term
    ///     record.set_attr_term("name", "http://schema.org/name", None, None)?;
    ///
    ///     // Using a prefixed term with its namespace
    ///     record.set_attr_term(
    ///         "smiles",
    ///         "cheminf:CHEMINF_000018",
    ///         Some("cheminf"),
    ///         Some("http://semanticscience.org/resource/"),
    ///     )?;
    ///     Ok(())
    /// }
    /// ```
    pub fn set_attr_term(
        &mut self,
        attr: &str,
        term: impl Into<Term>,
        prefix: Option<&str>,
        iri: Option<&str>,
    ) -> BiocatResult<()> {
        let term = term.into();

        if !self.schema().has_field(attr) {
            return Err(BiocatError::unknown_field(&self.schema().name, attr));
        }
        check_namespace_pair(prefix, iri)?;
        if let Some(prefix) = prefix {
            validate_term_prefix(&term, prefix)?;
        }

        if let (Some(prefix), Some(iri)) = (prefix, iri) {
            self.context_mut().register_namespace(prefix, iri);
        }
        self.context_mut().set_term(attr, term);
        Ok(())
    }

    /// Append a vocabulary term to the record's type tags.
    ///
    /// The same prefix/namespace validation as [`Record::set_attr_term`]
    /// applies. Duplicates are permitted; tags are never deduplicated or
    /// removed.
    pub fn add_type_term(
        &mut self,
        term: impl Into<String>,
        prefix: Option<&str>,
        iri: Option<&str>,
    ) -> BiocatResult<()> {
        let term = term.into();

        check_namespace_pair(prefix, iri)?;
        if let Some(prefix) = prefix {
            validate_term_prefix(&Term::Iri(term.clone()), prefix)?;
        }

        if let (Some(prefix), Some(iri)) = (prefix, iri) {
            self.context_mut().register_namespace(prefix, iri);
        }
        self.type_tags_mut().push(term);
        Ok(())
    }
}

/// Both or neither of prefix/IRI must be supplied.
fn check_namespace_pair(prefix: Option<&str>, iri: Option<&str>) -> BiocatResult<()> {
    match (prefix, iri) {
        (Some(_), None) => Err(BiocatError::IncompleteNamespace { supplied: "prefix" }),
        (None, Some(_)) => Err(BiocatError::IncompleteNamespace { supplied: "IRI" }),
        _ => Ok(()),
    }
}

/// The term's identity must start with `"<prefix>:"`.
fn validate_term_prefix(term: &Term, prefix: &str) -> BiocatResult<()> {
    if term.is_prefixed_with(prefix) {
        Ok(())
    } else {
        Err(BiocatError::prefix_mismatch(term.display_string(), prefix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaRegistry;
    use serde_json::json;

    fn shaking_record() -> Record {
        let registry = SchemaRegistry::new().unwrap();
        registry
            .instantiate(
                "vessels_and_mixing.Shaking",
                json!({
                    "shaking_type": "orbital",
                    "deflection": 3.0,
                    "deflection_unit": "mm",
                    "speed": 200.0,
                    "speed_unit": "rpm",
                    "position": "horizontal",
                    "special_treatment": "none"
                }),
            )
            .unwrap()
    }

    #[test]
    fn test_set_attr_term_with_namespace() {
        let mut record = shaking_record();
        record
            .set_attr_term(
                "speed",
                "obi:0000982",
                Some("obi"),
                Some("http://purl.obolibrary.org/obo/"),
            )
            .unwrap();

        assert_eq!(
            record.context().namespace_iri("obi"),
            Some("http://purl.obolibrary.org/obo/")
        );
        assert_eq!(record.context().get("speed"), Some(&json!("obi:0000982")));
    }

    #[test]
    fn test_set_attr_term_unknown_field() {
        let mut record = shaking_record();
        let result = record.set_attr_term("rpm", "obi:0000982", None, None);
        assert!(matches!(
            result,
            Err(BiocatError::UnknownField { field, .. }) if field == "rpm"
        ));
        // Nothing was registered
        assert_eq!(record.context().entries().len(), 1);
    }

    #[test]
    fn test_prefix_mismatch_leaves_context_untouched() {
        let mut record = shaking_record();
        let result = record.set_attr_term(
            "speed",
            "0000982",
            Some("obi"),
            Some("http://purl.obolibrary.org/obo/"),
        );
        assert!(matches!(result, Err(BiocatError::PrefixMismatch { .. })));
        assert_eq!(record.context().namespace_iri("obi"), None);
        assert_eq!(record.context().get("speed"), None);
    }

    #[test]
    fn test_incomplete_namespace_both_directions() {
        let mut record = shaking_record();
        assert!(matches!(
            record.set_attr_term("speed", "obi:0000982", Some("obi"), None),
            Err(BiocatError::IncompleteNamespace { supplied: "prefix" })
        ));
        assert!(matches!(
            record.set_attr_term("speed", "obi:0000982", None, Some("http://purl.obolibrary.org/obo/")),
            Err(BiocatError::IncompleteNamespace { supplied: "IRI" })
        ));
    }

    #[test]
    fn test_descriptor_term_prefix_check() {
        let mut record = shaking_record();
        let descriptor = json!({"@id": "obi:0000982", "@type": "@id"})
            .as_object()
            .unwrap()
            .clone();
        record
            .set_attr_term(
                "speed",
                descriptor.clone(),
                Some("obi"),
                Some("http://purl.obolibrary.org/obo/"),
            )
            .unwrap();
        assert_eq!(
            record.context().get("speed"),
            Some(&json!({"@id": "obi:0000982", "@type": "@id"}))
        );

        // A descriptor without a prefixed @id fails the check
        let bare = json!({"@type": "@id"}).as_object().unwrap().clone();
        let result = record.set_attr_term(
            "speed",
            bare,
            Some("obi"),
            Some("http://purl.obolibrary.org/obo/"),
        );
        assert!(matches!(result, Err(BiocatError::PrefixMismatch { .. })));
    }

    #[test]
    fn test_add_type_term_appends_without_dedup() {
        let mut record = shaking_record();
        assert_eq!(record.type_tags().len(), 1);

        record.add_type_term("https://schema.org/Thing", None, None).unwrap();
        record.add_type_term("https://schema.org/Thing", None, None).unwrap();

        assert_eq!(record.type_tags().len(), 3);
        assert_eq!(record.type_tags()[0], "stbc:Shaking");
        assert_eq!(record.type_tags()[1], record.type_tags()[2]);
    }

    #[test]
    fn test_add_type_term_with_prefix() {
        let mut record = shaking_record();
        record
            .add_type_term("schema:Thing", Some("schema"), Some("https://schema.org/"))
            .unwrap();
        assert_eq!(
            record.context().namespace_iri("schema"),
            Some("https://schema.org/")
        );
        assert_eq!(record.type_tags().last().map(String::as_str), Some("schema:Thing"));

        let result = record.add_type_term("Thing", Some("schema"), Some("https://schema.org/"));
        assert!(matches!(result, Err(BiocatError::PrefixMismatch { .. })));
        assert_eq!(record.type_tags().len(), 2);
    }
}
