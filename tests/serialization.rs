//! JSON-LD serialization integration tests.
//!
//! Verifies the serialized document shape and the exactness of the
//! round trip through `to_json` and `from_json`, including annotated
//! records and documents produced by hand.

mod common;

use common::builders;
use serde_json::json;
use strenda_biocat::BiocatError;

#[test]
fn document_carries_reserved_keys_and_fields() {
    let registry = builders::registry();
    let record = registry
        .instantiate("components.Components", builders::component("acetone", 5.0))
        .unwrap();

    let document = record.to_json();
    let obj = document.as_object().unwrap();

    assert!(obj.contains_key("@id"));
    assert!(obj.contains_key("@type"));
    assert!(obj.contains_key("@context"));
    assert_eq!(document["@context"]["stbc"], json!("https://www.github.com/my/repo/"));
    assert_eq!(document["name"], json!("acetone"));
    assert_eq!(document["concentration"], json!(5.0));
}

#[test]
fn annotated_record_round_trips_exactly() {
    let registry = builders::registry();
    let mut record = registry
        .instantiate("components.Components", builders::component("acetone", 5.0))
        .unwrap();
    record
        .set_attr_term("smiles", "cheminf:CHEMINF_000018", Some("cheminf"), Some("http://semanticscience.org/resource/"))
        .unwrap();
    record
        .add_type_term("schema:ChemicalSubstance", Some("schema"), Some("https://schema.org/"))
        .unwrap();

    let document = record.to_json();
    let rebuilt = registry
        .record_from_json("components.Components", document.clone())
        .unwrap();

    assert_eq!(rebuilt.id(), record.id());
    assert_eq!(rebuilt.type_tags(), record.type_tags());
    assert_eq!(rebuilt.context(), record.context());
    assert_eq!(rebuilt.fields(), record.fields());
    assert_eq!(rebuilt.to_json(), document);
}

#[test]
fn explicit_identity_is_preserved_verbatim() {
    let registry = builders::registry();
    let mut document = builders::storage_conditions();
    document.as_object_mut().unwrap().insert(
        "@id".to_string(),
        json!("stbc:StorageConditions/11111111-2222-3333-4444-555555555555"),
    );

    let record = registry
        .record_from_json("components.StorageConditions", document)
        .unwrap();
    assert_eq!(
        record.id().as_str(),
        "stbc:StorageConditions/11111111-2222-3333-4444-555555555555"
    );
}

#[test]
fn tampered_document_fails_validation() {
    let registry = builders::registry();
    let mut document = builders::storage_conditions();
    document.as_object_mut().unwrap()["storage_start"] = json!("2024-13-40");

    let result = registry.record_from_json("components.StorageConditions", document);
    assert!(matches!(result, Err(BiocatError::Schema(_))));
}

#[test]
fn string_output_contains_reserved_keys() {
    let registry = builders::registry();
    let record = registry
        .instantiate("components.StorageConditions", builders::storage_conditions())
        .unwrap();

    let serialized = serde_json::to_string(&record).unwrap();
    assert!(serialized.contains("\"@id\""));
    assert!(serialized.contains("\"@type\""));
    assert!(serialized.contains("\"@context\""));
    assert!(serialized.contains("\"storage_start\":\"2024-01-15\""));
}
