//! Builders for valid record data used across the integration suites.
//!
//! Each builder returns a complete, schema-conformant attribute mapping
//! so individual tests only spell out the values they care about.

use serde_json::{Value, json};
use strenda_biocat::SchemaRegistry;

/// Fresh registry with the embedded STRENDA schemas.
pub fn registry() -> SchemaRegistry {
    SchemaRegistry::new().expect("embedded schemas load")
}

/// Valid data for `biocatalyst.BiocatalystPurchased`.
pub fn purchased_biocatalyst(name: &str) -> Value {
    json!({
        "name": name,
        "ec_number": "EC 3.1.1.3",
        "molecular_weight": 33.0,
        "molecular_weight_unit": "kDa",
        "catalyzed_reaction": "triacylglycerol hydrolysis",
        "sequence_amino_acid": "MKLV...",
        "sequence_DNA": "ATGAAG...",
        "origin_organism": "Candida antarctica",
        "supplier": "Sigma-Aldrich, L4777",
        "production_organism": "Aspergillus oryzae",
        "posttranslational_modification": "none",
        "purity": 90.0,
        "purity_specification": "SDS-PAGE",
        "formulation": "lyophilized powder"
    })
}

/// Valid data for `components.Components`.
pub fn component(name: &str, concentration: f64) -> Value {
    json!({
        "name": name,
        "smiles": "O=Cc1ccccc1",
        "persistent_identifier_PID": "CHEBI:17169",
        "concentration": concentration,
        "concentration_unit": "mM",
        "supplier": "Merck",
        "purity": 99.0,
        "formulation": "liquid",
        "solubility_limit": 60.0,
        "solubility_limit_unit": "mM"
    })
}

/// Valid data for `components.StorageConditions`.
pub fn storage_conditions() -> Value {
    json!({
        "temperature": -20.0,
        "temperature_unit": "C",
        "storage_start": "2024-01-15",
        "additives": "none",
        "special_treatment": "aliquoted to avoid freeze-thaw cycles"
    })
}

/// Valid data for `results.YieldAndConversion`.
pub fn yield_and_conversion(conversion: f64) -> Value {
    json!({
        "c_yield": 82.0,
        "yield_unit": "%",
        "space_time_yield": 1.2,
        "space_time_yield_unit": "g/L/h",
        "conversion": conversion,
        "conversion_unit": "%",
        "special_treatment": "none"
    })
}
