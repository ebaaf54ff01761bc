//! Term annotation integration tests.
//!
//! Exercises the two annotation operations against full records: field
//! terms with and without namespaces, descriptor terms, type tags, and
//! the atomicity of failed calls.

mod common;

use common::builders;
use serde_json::json;
use strenda_biocat::BiocatError;

#[test]
fn annotate_field_with_namespace_registers_both_entries() {
    let registry = builders::registry();
    let mut record = registry
        .instantiate(
            "biocatalyst.BiocatalystPurchased",
            builders::purchased_biocatalyst("lipase B"),
        )
        .unwrap();

    record
        .set_attr_term(
            "name",
            "schema:givenName",
            Some("schema"),
            Some("http://schema.org"),
        )
        .unwrap();

    assert_eq!(
        record.context().get("schema"),
        Some(&json!("http://schema.org"))
    );
    assert_eq!(record.context().get("name"), Some(&json!("schema:givenName")));
}

#[test]
fn unprefixed_term_fails_when_prefix_expected() {
    let registry = builders::registry();
    let mut record = registry
        .instantiate(
            "biocatalyst.BiocatalystPurchased",
            builders::purchased_biocatalyst("lipase B"),
        )
        .unwrap();

    let result = record.set_attr_term(
        "name",
        "givenName",
        Some("schema"),
        Some("http://schema.org"),
    );
    assert!(matches!(
        result,
        Err(BiocatError::PrefixMismatch { term, prefix })
            if term == "givenName" && prefix == "schema"
    ));
}

#[test]
fn incomplete_namespace_fails_in_both_directions() {
    let registry = builders::registry();
    let mut record = registry
        .instantiate(
            "biocatalyst.BiocatalystPurchased",
            builders::purchased_biocatalyst("lipase B"),
        )
        .unwrap();

    assert!(matches!(
        record.set_attr_term("name", "x", Some("schema"), None),
        Err(BiocatError::IncompleteNamespace { .. })
    ));
    assert!(matches!(
        record.set_attr_term("name", "x", None, Some("http://schema.org")),
        Err(BiocatError::IncompleteNamespace { .. })
    ));
    assert!(matches!(
        record.add_type_term("x", Some("schema"), None),
        Err(BiocatError::IncompleteNamespace { .. })
    ));
}

#[test]
fn plain_iri_term_needs_no_namespace() {
    let registry = builders::registry();
    let mut record = registry
        .instantiate("components.Components", builders::component("acetone", 5.0))
        .unwrap();

    record
        .set_attr_term("name", "http://schema.org/name", None, None)
        .unwrap();
    assert_eq!(
        record.context().get("name"),
        Some(&json!("http://schema.org/name"))
    );
}

#[test]
fn descriptor_term_round_trips_through_context() {
    let registry = builders::registry();
    let mut record = registry
        .instantiate("components.Components", builders::component("acetone", 5.0))
        .unwrap();

    let descriptor = json!({"@id": "schema:name", "@type": "@id"})
        .as_object()
        .unwrap()
        .clone();
    record
        .set_attr_term("name", descriptor, Some("schema"), Some("http://schema.org"))
        .unwrap();

    assert_eq!(
        record.context().get("name"),
        Some(&json!({"@id": "schema:name", "@type": "@id"}))
    );
}

#[test]
fn add_type_term_appends_each_call() {
    let registry = builders::registry();
    let mut record = registry
        .instantiate("components.Components", builders::component("acetone", 5.0))
        .unwrap();

    let before = record.type_tags().len();
    record.add_type_term("schema:ChemicalSubstance", Some("schema"), Some("https://schema.org/")).unwrap();
    assert_eq!(record.type_tags().len(), before + 1);
    record.add_type_term("schema:ChemicalSubstance", Some("schema"), Some("https://schema.org/")).unwrap();
    assert_eq!(record.type_tags().len(), before + 2);
}

#[test]
fn later_namespace_registration_overwrites_earlier() {
    let registry = builders::registry();
    let mut record = registry
        .instantiate("components.Components", builders::component("acetone", 5.0))
        .unwrap();

    record
        .set_attr_term("name", "schema:name", Some("schema"), Some("http://schema.org"))
        .unwrap();
    record
        .set_attr_term("smiles", "schema:hasRepresentation", Some("schema"), Some("https://schema.org/"))
        .unwrap();

    assert_eq!(record.context().namespace_iri("schema"), Some("https://schema.org/"));
}

#[test]
fn annotating_undeclared_field_fails_without_side_effects() {
    let registry = builders::registry();
    let mut record = registry
        .instantiate("components.Components", builders::component("acetone", 5.0))
        .unwrap();

    let entries_before = record.context().entries().clone();
    let result = record.set_attr_term(
        "density",
        "schema:density",
        Some("schema"),
        Some("http://schema.org"),
    );

    assert!(matches!(result, Err(BiocatError::UnknownField { .. })));
    assert_eq!(record.context().entries(), &entries_before);
}
