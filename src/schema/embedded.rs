//! Embedded STRENDA entity schemas.
//!
//! The 44 entity schemas of the STRENDA biocatalysis guidelines, one
//! JSON array per domain, embedded as static strings so the registry
//! works without any external schema files. Field names and types are
//! carried over verbatim from the upstream entity definitions,
//! including irregular casings such as `sequence_DNA` and `Flow_rate`.

use super::types::Domain;

/// All embedded schema sets, paired with their domain.
pub fn all() -> [(Domain, &'static str); 6] {
    [
        (Domain::Biocatalyst, biocatalyst_schemas()),
        (Domain::Components, components_schemas()),
        (Domain::ReactionConditions, reaction_conditions_schemas()),
        (Domain::Results, results_schemas()),
        (Domain::Sampling, sampling_schemas()),
        (Domain::VesselsAndMixing, vessels_and_mixing_schemas()),
    ]
}

/// Returns the biocatalyst schemas as a JSON string.
pub fn biocatalyst_schemas() -> &'static str {
    r#"[
  {
    "id": "biocatalyst.BiocatalystPurchased",
    "name": "BiocatalystPurchased",
    "domain": "biocatalyst",
    "description": "Commercially purchased biocatalyst with supplier and purity information",
    "fields": [
      {
        "name": "name",
        "type": "text"
      },
      {
        "name": "ec_number",
        "type": "text"
      },
      {
        "name": "molecular_weight",
        "type": "float"
      },
      {
        "name": "molecular_weight_unit",
        "type": "text"
      },
      {
        "name": "catalyzed_reaction",
        "type": "text"
      },
      {
        "name": "sequence_amino_acid",
        "type": "text"
      },
      {
        "name": "sequence_DNA",
        "type": "text"
      },
      {
        "name": "origin_organism",
        "type": "text"
      },
      {
        "name": "supplier",
        "type": "text"
      },
      {
        "name": "production_organism",
        "type": "text"
      },
      {
        "name": "posttranslational_modification",
        "type": "text"
      },
      {
        "name": "purity",
        "type": "float"
      },
      {
        "name": "purity_specification",
        "type": "text"
      },
      {
        "name": "formulation",
        "type": "text"
      }
    ]
  },
  {
    "id": "biocatalyst.BiocatalystSelfProduced",
    "name": "BiocatalystSelfProduced",
    "domain": "biocatalyst",
    "description": "Biocatalyst produced in-house, including plasmid and purification details",
    "fields": [
      {
        "name": "name",
        "type": "text"
      },
      {
        "name": "ec_number",
        "type": "text"
      },
      {
        "name": "molecular_weight",
        "type": "float"
      },
      {
        "name": "molecular_weight_unit",
        "type": "text"
      },
      {
        "name": "catalyzed_reaction",
        "type": "text"
      },
      {
        "name": "sequence_amino_acid",
        "type": "text"
      },
      {
        "name": "sequence_DNA",
        "type": "text"
      },
      {
        "name": "sequence_plasmid",
        "type": "text"
      },
      {
        "name": "plasmid_specifications",
        "type": "text"
      },
      {
        "name": "origin_organism",
        "type": "text"
      },
      {
        "name": "production_organism",
        "type": "text"
      },
      {
        "name": "posttranslational_modification",
        "type": "text"
      },
      {
        "name": "purity",
        "type": "float"
      },
      {
        "name": "purity_specification",
        "type": "text"
      },
      {
        "name": "purification_method",
        "type": "text"
      },
      {
        "name": "formulation",
        "type": "text"
      },
      {
        "name": "special_treatment",
        "type": "text"
      }
    ]
  },
  {
    "id": "biocatalyst.PurifiedBiocatalyst",
    "name": "PurifiedBiocatalyst",
    "domain": "biocatalyst",
    "description": "Purified biocatalyst preparation with concentration and activity data",
    "fields": [
      {
        "name": "concentration",
        "type": "float"
      },
      {
        "name": "concentration_unit",
        "type": "text"
      },
      {
        "name": "concentration_determination_method",
        "type": "text"
      },
      {
        "name": "activity",
        "type": "float"
      },
      {
        "name": "activity_unit",
        "type": "text"
      },
      {
        "name": "activity_determination_method",
        "type": "text"
      },
      {
        "name": "formulation",
        "type": "text"
      },
      {
        "name": "special_treatment",
        "type": "text"
      }
    ]
  },
  {
    "id": "biocatalyst.CrudeCellExtract",
    "name": "CrudeCellExtract",
    "domain": "biocatalyst",
    "description": "Crude cell extract preparation obtained by cell disruption",
    "fields": [
      {
        "name": "cell_disruption_process",
        "type": "text"
      },
      {
        "name": "concentration",
        "type": "float"
      },
      {
        "name": "concentration_unit",
        "type": "text"
      },
      {
        "name": "concentration_determination_method",
        "type": "text"
      },
      {
        "name": "special_treatment",
        "type": "text"
      }
    ]
  },
  {
    "id": "biocatalyst.WholeCellBiocatalyst",
    "name": "WholeCellBiocatalyst",
    "domain": "biocatalyst",
    "description": "Whole-cell biocatalyst preparation with harvesting information",
    "fields": [
      {
        "name": "harvesting_method",
        "type": "text"
      },
      {
        "name": "concentration",
        "type": "float"
      },
      {
        "name": "concentration_unit",
        "type": "text"
      },
      {
        "name": "concentration_determination_method",
        "type": "text"
      },
      {
        "name": "formulation",
        "type": "text"
      },
      {
        "name": "special_treatment",
        "type": "text"
      }
    ]
  },
  {
    "id": "biocatalyst.SecretedEnzyme",
    "name": "SecretedEnzyme",
    "domain": "biocatalyst",
    "description": "Enzyme secreted into the medium and separated from the cells",
    "fields": [
      {
        "name": "separation_method",
        "type": "text"
      },
      {
        "name": "concentration",
        "type": "float"
      },
      {
        "name": "concentration_unit",
        "type": "text"
      },
      {
        "name": "concentration_determination_method",
        "type": "text"
      },
      {
        "name": "special_treatment",
        "type": "text"
      }
    ]
  },
  {
    "id": "biocatalyst.CellFreeProduction",
    "name": "CellFreeProduction",
    "domain": "biocatalyst",
    "description": "Biocatalyst obtained by cell-free protein synthesis",
    "fields": [
      {
        "name": "source_of_cellfree_extract",
        "type": "text"
      },
      {
        "name": "concentration",
        "type": "float"
      },
      {
        "name": "concentration_unit",
        "type": "text"
      },
      {
        "name": "concentration_determination_method",
        "type": "text"
      },
      {
        "name": "special_treatment",
        "type": "text"
      }
    ]
  },
  {
    "id": "biocatalyst.Immobilised",
    "name": "Immobilised",
    "domain": "biocatalyst",
    "description": "Immobilised biocatalyst with carrier material and coupling chemistry",
    "fields": [
      {
        "name": "biocatalyst",
        "type": "text"
      },
      {
        "name": "immobilisation_chemistry",
        "type": "text"
      },
      {
        "name": "carrier_material",
        "type": "text"
      },
      {
        "name": "linkers",
        "type": "text"
      },
      {
        "name": "immobilisation_method",
        "type": "text"
      },
      {
        "name": "purification_method",
        "type": "text"
      },
      {
        "name": "concentration",
        "type": "float"
      },
      {
        "name": "concentration_unit",
        "type": "text"
      },
      {
        "name": "concentration_determination_method",
        "type": "text"
      },
      {
        "name": "special_treatment",
        "type": "text"
      }
    ]
  },
  {
    "id": "biocatalyst.StorageConditions",
    "name": "StorageConditions",
    "domain": "biocatalyst",
    "description": "Storage conditions of the biocatalyst, including drying",
    "fields": [
      {
        "name": "temperature",
        "type": "float"
      },
      {
        "name": "temperature_unit",
        "type": "text"
      },
      {
        "name": "storage_start",
        "type": "date"
      },
      {
        "name": "additives",
        "type": "text"
      },
      {
        "name": "drying_method",
        "type": "text"
      },
      {
        "name": "special_treatment",
        "type": "text"
      }
    ]
  }
]"#
}

/// Returns the components schemas as a JSON string.
pub fn components_schemas() -> &'static str {
    r#"[
  {
    "id": "components.Components",
    "name": "Components",
    "domain": "components",
    "description": "Chemical component of the reaction system with concentration and purity",
    "fields": [
      {
        "name": "name",
        "type": "text"
      },
      {
        "name": "smiles",
        "type": "text"
      },
      {
        "name": "persistent_identifier_PID",
        "type": "text"
      },
      {
        "name": "concentration",
        "type": "float"
      },
      {
        "name": "concentration_unit",
        "type": "text"
      },
      {
        "name": "supplier",
        "type": "text"
      },
      {
        "name": "purity",
        "type": "float"
      },
      {
        "name": "formulation",
        "type": "text"
      },
      {
        "name": "solubility_limit",
        "type": "float"
      },
      {
        "name": "solubility_limit_unit",
        "type": "text"
      }
    ]
  },
  {
    "id": "components.StorageConditions",
    "name": "StorageConditions",
    "domain": "components",
    "description": "Storage conditions of a reaction component",
    "fields": [
      {
        "name": "temperature",
        "type": "float"
      },
      {
        "name": "temperature_unit",
        "type": "text"
      },
      {
        "name": "storage_start",
        "type": "date"
      },
      {
        "name": "additives",
        "type": "text"
      },
      {
        "name": "special_treatment",
        "type": "text"
      }
    ]
  }
]"#
}

/// Returns the reaction conditions schemas as a JSON string.
pub fn reaction_conditions_schemas() -> &'static str {
    r#"[
  {
    "id": "reaction_conditions.MonoliquidSystemDescription_WMRS",
    "name": "MonoliquidSystemDescription_WMRS",
    "domain": "reaction_conditions",
    "description": "Monoliquid reaction system in a water-miscible reaction solvent batch setup",
    "fields": [
      {
        "name": "solvent_description",
        "type": "text"
      },
      {
        "name": "ionic_strength",
        "type": "float"
      },
      {
        "name": "ionic_strength_unit",
        "type": "text"
      },
      {
        "name": "further_additives",
        "type": "text"
      },
      {
        "name": "special_treatment",
        "type": "text"
      }
    ]
  },
  {
    "id": "reaction_conditions.MultiphasicSystemDescription_WMRS",
    "name": "MultiphasicSystemDescription_WMRS",
    "domain": "reaction_conditions",
    "description": "Multiphasic reaction system in a batch setup",
    "fields": [
      {
        "name": "phases_number",
        "type": "float"
      },
      {
        "name": "special_treatment",
        "type": "text"
      }
    ]
  },
  {
    "id": "reaction_conditions.LiquidPhase_WMRS",
    "name": "LiquidPhase_WMRS",
    "domain": "reaction_conditions",
    "description": "Liquid phase of a multiphasic batch reaction system",
    "fields": [
      {
        "name": "liquid_type",
        "type": "text"
      },
      {
        "name": "liquid_amount",
        "type": "float"
      },
      {
        "name": "liquid_unit",
        "type": "text"
      }
    ]
  },
  {
    "id": "reaction_conditions.SolidPhase_WMRS",
    "name": "SolidPhase_WMRS",
    "domain": "reaction_conditions",
    "description": "Solid phase of a multiphasic batch reaction system",
    "fields": [
      {
        "name": "solid_type",
        "type": "text"
      },
      {
        "name": "solid_amount",
        "type": "float"
      },
      {
        "name": "solid_unit",
        "type": "text"
      }
    ]
  },
  {
    "id": "reaction_conditions.GasPhase_WMRS",
    "name": "GasPhase_WMRS",
    "domain": "reaction_conditions",
    "description": "Gas phase of a multiphasic batch reaction system",
    "fields": [
      {
        "name": "gas_type",
        "type": "text"
      },
      {
        "name": "gas_amount",
        "type": "float"
      },
      {
        "name": "gas_unit",
        "type": "text"
      }
    ]
  },
  {
    "id": "reaction_conditions.TemperatureConstant_WMRS",
    "name": "TemperatureConstant_WMRS",
    "domain": "reaction_conditions",
    "description": "Constant temperature profile of a batch reaction",
    "fields": [
      {
        "name": "temperature",
        "type": "float"
      },
      {
        "name": "temperature_unit",
        "type": "text"
      },
      {
        "name": "special_treatment",
        "type": "text"
      }
    ]
  },
  {
    "id": "reaction_conditions.EventBasedTemperatureShift_WMRS",
    "name": "EventBasedTemperatureShift_WMRS",
    "domain": "reaction_conditions",
    "description": "Event-based temperature shift during a batch reaction",
    "fields": [
      {
        "name": "temperature_unit",
        "type": "text"
      },
      {
        "name": "temperature_beginning",
        "type": "float"
      },
      {
        "name": "temperature_after_event",
        "type": "float"
      },
      {
        "name": "event_description",
        "type": "text"
      },
      {
        "name": "temperature_at_XY",
        "type": "float"
      },
      {
        "name": "time_at_XY",
        "type": "float"
      },
      {
        "name": "time_unit",
        "type": "text"
      },
      {
        "name": "special_treatment",
        "type": "text"
      }
    ]
  },
  {
    "id": "reaction_conditions.pHConstant_WMRS",
    "name": "pHConstant_WMRS",
    "domain": "reaction_conditions",
    "description": "Constant pH profile of a batch reaction",
    "fields": [
      {
        "name": "pH_value",
        "type": "float"
      },
      {
        "name": "detected_when",
        "type": "text"
      },
      {
        "name": "detected_how",
        "type": "text"
      },
      {
        "name": "temperature",
        "type": "float"
      },
      {
        "name": "temperature_unit",
        "type": "text"
      },
      {
        "name": "calibration_pH_electrode",
        "type": "text"
      },
      {
        "name": "special_treatment",
        "type": "text"
      }
    ]
  },
  {
    "id": "reaction_conditions.EventBasedpHShift_WMRS",
    "name": "EventBasedpHShift_WMRS",
    "domain": "reaction_conditions",
    "description": "Event-based pH shift during a batch reaction",
    "fields": [
      {
        "name": "pH_beginning",
        "type": "float"
      },
      {
        "name": "pH_after_event",
        "type": "float"
      },
      {
        "name": "event_description",
        "type": "text"
      },
      {
        "name": "pH_at_XY",
        "type": "float"
      },
      {
        "name": "time_at_XY",
        "type": "float"
      },
      {
        "name": "time_unit",
        "type": "text"
      },
      {
        "name": "detected_when",
        "type": "text"
      },
      {
        "name": "detected_how",
        "type": "text"
      },
      {
        "name": "temperature",
        "type": "float"
      },
      {
        "name": "temperature_unit",
        "type": "text"
      },
      {
        "name": "calibration_pH_electrode",
        "type": "text"
      },
      {
        "name": "special_treatment",
        "type": "text"
      }
    ]
  },
  {
    "id": "reaction_conditions.MonoliquidSystemDescription_TFCR",
    "name": "MonoliquidSystemDescription_TFCR",
    "domain": "reaction_conditions",
    "description": "Monoliquid reaction system in a tubular flow/continuous reactor",
    "fields": [
      {
        "name": "solvent_description",
        "type": "text"
      },
      {
        "name": "ionic_strength",
        "type": "float"
      },
      {
        "name": "ionic_strength_unit",
        "type": "text"
      },
      {
        "name": "further_additives",
        "type": "text"
      },
      {
        "name": "Flow_rate",
        "type": "float"
      },
      {
        "name": "Flow_rate_unit",
        "type": "text"
      },
      {
        "name": "special_treatment",
        "type": "text"
      }
    ]
  },
  {
    "id": "reaction_conditions.MultiphasicSystemDescription_TFCR",
    "name": "MultiphasicSystemDescription_TFCR",
    "domain": "reaction_conditions",
    "description": "Multiphasic reaction system in a tubular flow/continuous reactor",
    "fields": [
      {
        "name": "phases_number",
        "type": "float"
      },
      {
        "name": "Flow_rate",
        "type": "float"
      },
      {
        "name": "Flow_rate_unit",
        "type": "text"
      },
      {
        "name": "special_treatment",
        "type": "text"
      }
    ]
  },
  {
    "id": "reaction_conditions.LiquidPhase_TFCR",
    "name": "LiquidPhase_TFCR",
    "domain": "reaction_conditions",
    "description": "Liquid phase of a multiphasic continuous-flow reaction system",
    "fields": [
      {
        "name": "liquid_type",
        "type": "text"
      },
      {
        "name": "liquid_amount",
        "type": "float"
      },
      {
        "name": "liquid_unit",
        "type": "text"
      }
    ]
  },
  {
    "id": "reaction_conditions.SolidPhase_TFCR",
    "name": "SolidPhase_TFCR",
    "domain": "reaction_conditions",
    "description": "Solid phase of a multiphasic continuous-flow reaction system",
    "fields": [
      {
        "name": "solid_type",
        "type": "text"
      },
      {
        "name": "solid_amount",
        "type": "float"
      },
      {
        "name": "solid_unit",
        "type": "text"
      }
    ]
  },
  {
    "id": "reaction_conditions.GasPhase_TFCR",
    "name": "GasPhase_TFCR",
    "domain": "reaction_conditions",
    "description": "Gas phase of a multiphasic continuous-flow reaction system",
    "fields": [
      {
        "name": "gas_type",
        "type": "text"
      },
      {
        "name": "gas_amount",
        "type": "float"
      },
      {
        "name": "gas_unit",
        "type": "text"
      }
    ]
  },
  {
    "id": "reaction_conditions.TemperatureConstant_TFCR",
    "name": "TemperatureConstant_TFCR",
    "domain": "reaction_conditions",
    "description": "Constant temperature profile of a continuous-flow reaction",
    "fields": [
      {
        "name": "temperature",
        "type": "float"
      },
      {
        "name": "temperature_unit",
        "type": "text"
      },
      {
        "name": "special_treatment",
        "type": "text"
      }
    ]
  },
  {
    "id": "reaction_conditions.DynamicTemperature_TFCR",
    "name": "DynamicTemperature_TFCR",
    "domain": "reaction_conditions",
    "description": "Event-based or gradient temperature profile of a continuous-flow reaction",
    "fields": [
      {
        "name": "temperature_beginning",
        "type": "float"
      },
      {
        "name": "temperature_after_event",
        "type": "float"
      },
      {
        "name": "event_description",
        "type": "text"
      },
      {
        "name": "temperature_at_XY",
        "type": "float"
      },
      {
        "name": "time_at_XY",
        "type": "float"
      },
      {
        "name": "time_unit",
        "type": "text"
      },
      {
        "name": "temperature_unit",
        "type": "text"
      },
      {
        "name": "temperature_gradient_beginning",
        "type": "float"
      },
      {
        "name": "temperature_gradient_end",
        "type": "float"
      },
      {
        "name": "gradient_length",
        "type": "float"
      },
      {
        "name": "gradient_length_unit",
        "type": "text"
      },
      {
        "name": "measurement_points",
        "type": "text"
      },
      {
        "name": "special_treatment",
        "type": "text"
      }
    ]
  },
  {
    "id": "reaction_conditions.pHConstant_TFCR",
    "name": "pHConstant_TFCR",
    "domain": "reaction_conditions",
    "description": "Constant pH profile of a continuous-flow reaction",
    "fields": [
      {
        "name": "pH_value",
        "type": "float"
      },
      {
        "name": "detected_when",
        "type": "text"
      },
      {
        "name": "detected_how",
        "type": "text"
      },
      {
        "name": "temperature",
        "type": "float"
      },
      {
        "name": "temperature_unit",
        "type": "text"
      },
      {
        "name": "calibration_pH_electrode",
        "type": "text"
      },
      {
        "name": "special_treatment",
        "type": "text"
      }
    ]
  },
  {
    "id": "reaction_conditions.DynamicpH_TFCR",
    "name": "DynamicpH_TFCR",
    "domain": "reaction_conditions",
    "description": "Event-based or gradient pH profile of a continuous-flow reaction",
    "fields": [
      {
        "name": "pH_beginning",
        "type": "float"
      },
      {
        "name": "pH_after_event",
        "type": "float"
      },
      {
        "name": "event_description",
        "type": "text"
      },
      {
        "name": "pH_at_XY",
        "type": "float"
      },
      {
        "name": "time_at_XY",
        "type": "float"
      },
      {
        "name": "time_unit",
        "type": "text"
      },
      {
        "name": "detected_when",
        "type": "text"
      },
      {
        "name": "detected_how",
        "type": "text"
      },
      {
        "name": "temperature",
        "type": "float"
      },
      {
        "name": "temperature_unit",
        "type": "text"
      },
      {
        "name": "calibration_pH_electrode",
        "type": "text"
      },
      {
        "name": "pH_gradient_beginning",
        "type": "float"
      },
      {
        "name": "pH_gradient_end",
        "type": "float"
      },
      {
        "name": "gradient_length",
        "type": "float"
      },
      {
        "name": "gradient_length_unit",
        "type": "text"
      },
      {
        "name": "measurement_points",
        "type": "text"
      },
      {
        "name": "special_treatment",
        "type": "text"
      }
    ]
  }
]"#
}

/// Returns the results schemas as a JSON string.
pub fn results_schemas() -> &'static str {
    r#"[
  {
    "id": "results.KineticParameters",
    "name": "KineticParameters",
    "domain": "results",
    "description": "Kinetic parameters of the catalyzed reaction",
    "fields": [
      {
        "name": "michaelis_constant",
        "type": "float"
      },
      {
        "name": "michaelis_constant_unit",
        "type": "text"
      },
      {
        "name": "maximum_reaction_rate",
        "type": "float"
      },
      {
        "name": "maximum_reaction_rate_unit",
        "type": "text"
      },
      {
        "name": "turnover_number",
        "type": "float"
      },
      {
        "name": "turnover_number_unit",
        "type": "text"
      },
      {
        "name": "catalytic_efficiency",
        "type": "float"
      },
      {
        "name": "catalytic_efficiency_unit",
        "type": "text"
      },
      {
        "name": "dissociation_constant",
        "type": "float"
      },
      {
        "name": "dissociation_constant_unit",
        "type": "text"
      },
      {
        "name": "inhibition_type",
        "type": "text"
      },
      {
        "name": "inhibition_constant",
        "type": "float"
      },
      {
        "name": "inhibition_constant_unit",
        "type": "text"
      },
      {
        "name": "hill_coefficient",
        "type": "float"
      },
      {
        "name": "enzyme_stability",
        "type": "text"
      },
      {
        "name": "special_treatment",
        "type": "text"
      }
    ]
  },
  {
    "id": "results.YieldAndConversion",
    "name": "YieldAndConversion",
    "domain": "results",
    "description": "Yield, space-time yield, and conversion results",
    "fields": [
      {
        "name": "c_yield",
        "type": "float"
      },
      {
        "name": "yield_unit",
        "type": "text"
      },
      {
        "name": "space_time_yield",
        "type": "float"
      },
      {
        "name": "space_time_yield_unit",
        "type": "text"
      },
      {
        "name": "conversion",
        "type": "float"
      },
      {
        "name": "conversion_unit",
        "type": "text"
      },
      {
        "name": "special_treatment",
        "type": "text"
      }
    ]
  },
  {
    "id": "results.ActivityAndInitialReactionRate",
    "name": "ActivityAndInitialReactionRate",
    "domain": "results",
    "description": "Specific activity and initial reaction rate results",
    "fields": [
      {
        "name": "specific_activity",
        "type": "float"
      },
      {
        "name": "specific_activity_unit",
        "type": "text"
      },
      {
        "name": "initial_reaction_rate",
        "type": "float"
      },
      {
        "name": "initial_reaction_rate_unit",
        "type": "text"
      },
      {
        "name": "special_treatment",
        "type": "text"
      }
    ]
  },
  {
    "id": "results.SelectivityAndSpecificity",
    "name": "SelectivityAndSpecificity",
    "domain": "results",
    "description": "Stereo-, chemo-, and regioselectivity results",
    "fields": [
      {
        "name": "stereoselectivity",
        "type": "text"
      },
      {
        "name": "enantioselectivity",
        "type": "float"
      },
      {
        "name": "enantiomeric_excess",
        "type": "float"
      },
      {
        "name": "enantiomeric_excess_unit",
        "type": "text"
      },
      {
        "name": "diastereomeric_excess",
        "type": "float"
      },
      {
        "name": "diasteriomeric_excess_unit",
        "type": "text"
      },
      {
        "name": "isomeric_content",
        "type": "float"
      },
      {
        "name": "isomeric_content_unit",
        "type": "text"
      },
      {
        "name": "chemoselectivity",
        "type": "text"
      },
      {
        "name": "regioselectivity",
        "type": "text"
      },
      {
        "name": "special_treatment",
        "type": "text"
      }
    ]
  },
  {
    "id": "results.ThermodynamicParameters",
    "name": "ThermodynamicParameters",
    "domain": "results",
    "description": "Thermodynamic parameters of the catalyzed reaction",
    "fields": [
      {
        "name": "gibbs_free_energy_change",
        "type": "text"
      },
      {
        "name": "enthalpy_change",
        "type": "text"
      },
      {
        "name": "special_treatment",
        "type": "text"
      }
    ]
  }
]"#
}

/// Returns the sampling schemas as a JSON string.
pub fn sampling_schemas() -> &'static str {
    r#"[
  {
    "id": "sampling.SamplingDescription",
    "name": "SamplingDescription",
    "domain": "sampling",
    "description": "Sampling procedure from the reaction vessel",
    "fields": [
      {
        "name": "volume_per_sample",
        "type": "float"
      },
      {
        "name": "volume_per_sample_unit",
        "type": "text"
      },
      {
        "name": "mixing_during_sampling",
        "type": "text"
      },
      {
        "name": "vessel_opened_for_sampling",
        "type": "text"
      },
      {
        "name": "gas_phase",
        "type": "text"
      },
      {
        "name": "time",
        "type": "float"
      }
    ]
  },
  {
    "id": "sampling.SamplingFromHeterogeneousReactionSolutions",
    "name": "SamplingFromHeterogeneousReactionSolutions",
    "domain": "sampling",
    "description": "Sampling from a heterogeneous reaction solution",
    "fields": [
      {
        "name": "phase",
        "type": "text"
      },
      {
        "name": "biocatalyst_in_phase",
        "type": "text"
      },
      {
        "name": "special_treatment",
        "type": "text"
      }
    ]
  },
  {
    "id": "sampling.SamplePreprocessing",
    "name": "SamplePreprocessing",
    "domain": "sampling",
    "description": "Sample preprocessing, including quenching and further treatment",
    "fields": [
      {
        "name": "quenching_method",
        "type": "text"
      },
      {
        "name": "quenching_ratio",
        "type": "text"
      },
      {
        "name": "treatment_procedure",
        "type": "text"
      },
      {
        "name": "special_treatment",
        "type": "text"
      }
    ]
  }
]"#
}

/// Returns the vessels and mixing schemas as a JSON string.
pub fn vessels_and_mixing_schemas() -> &'static str {
    r#"[
  {
    "id": "vessels_and_mixing.Vial",
    "name": "Vial",
    "domain": "vessels_and_mixing",
    "description": "Vial used as reaction vessel",
    "fields": [
      {
        "name": "vial_size",
        "type": "float"
      },
      {
        "name": "vial_size_unit",
        "type": "text"
      },
      {
        "name": "vial_material",
        "type": "text"
      },
      {
        "name": "closure_type",
        "type": "text"
      },
      {
        "name": "special_treatment",
        "type": "text"
      }
    ]
  },
  {
    "id": "vessels_and_mixing.Plate",
    "name": "Plate",
    "domain": "vessels_and_mixing",
    "description": "Well plate used as reaction vessel",
    "fields": [
      {
        "name": "plate_type",
        "type": "text"
      },
      {
        "name": "plate_material",
        "type": "text"
      },
      {
        "name": "number_of_wells",
        "type": "text"
      },
      {
        "name": "well_shape",
        "type": "text"
      },
      {
        "name": "well_volume",
        "type": "text"
      },
      {
        "name": "well_arrangement",
        "type": "text"
      },
      {
        "name": "supplier",
        "type": "text"
      },
      {
        "name": "lot_number",
        "type": "float"
      },
      {
        "name": "sealing_method",
        "type": "text"
      },
      {
        "name": "sealing_material",
        "type": "text"
      },
      {
        "name": "special_treatment",
        "type": "text"
      }
    ]
  },
  {
    "id": "vessels_and_mixing.StirredTankReactor",
    "name": "StirredTankReactor",
    "domain": "vessels_and_mixing",
    "description": "Stirred tank reactor used as reaction vessel",
    "fields": [
      {
        "name": "type",
        "type": "text"
      },
      {
        "name": "material",
        "type": "text"
      },
      {
        "name": "volume",
        "type": "float"
      },
      {
        "name": "volume_unit",
        "type": "text"
      },
      {
        "name": "geometry",
        "type": "text"
      },
      {
        "name": "bottom_type",
        "type": "text"
      },
      {
        "name": "gas_consumption",
        "type": "text"
      },
      {
        "name": "gas_supply",
        "type": "text"
      },
      {
        "name": "gas_supply_rate",
        "type": "float"
      },
      {
        "name": "gas_supply_rate_unit",
        "type": "text"
      },
      {
        "name": "temperature_control",
        "type": "text"
      },
      {
        "name": "special_treatment",
        "type": "text"
      }
    ]
  },
  {
    "id": "vessels_and_mixing.TubularFlowContinuousReactor",
    "name": "TubularFlowContinuousReactor",
    "domain": "vessels_and_mixing",
    "description": "Tubular flow reactor for continuous operation",
    "fields": [
      {
        "name": "volume",
        "type": "float"
      },
      {
        "name": "volume_unit",
        "type": "text"
      },
      {
        "name": "geometry",
        "type": "text"
      },
      {
        "name": "reactor_type",
        "type": "text"
      },
      {
        "name": "material",
        "type": "text"
      },
      {
        "name": "tubing",
        "type": "text"
      },
      {
        "name": "localisation_of_the_catalyst",
        "type": "text"
      },
      {
        "name": "special_treatment",
        "type": "text"
      }
    ]
  },
  {
    "id": "vessels_and_mixing.Shaking",
    "name": "Shaking",
    "domain": "vessels_and_mixing",
    "description": "Mixing by shaking the reaction vessel",
    "fields": [
      {
        "name": "shaking_type",
        "type": "text"
      },
      {
        "name": "deflection",
        "type": "float"
      },
      {
        "name": "deflection_unit",
        "type": "text"
      },
      {
        "name": "speed",
        "type": "float"
      },
      {
        "name": "speed_unit",
        "type": "text"
      },
      {
        "name": "position",
        "type": "text"
      },
      {
        "name": "special_treatment",
        "type": "text"
      }
    ]
  },
  {
    "id": "vessels_and_mixing.MechanicallyImpelledMixing",
    "name": "MechanicallyImpelledMixing",
    "domain": "vessels_and_mixing",
    "description": "Mixing by stirring with mechanically driven stirrers",
    "fields": [
      {
        "name": "stirring_type",
        "type": "text"
      },
      {
        "name": "stirrer_material",
        "type": "text"
      },
      {
        "name": "supplier",
        "type": "text"
      },
      {
        "name": "number_of_stirrers",
        "type": "float"
      },
      {
        "name": "distance_between_stirrers",
        "type": "float"
      },
      {
        "name": "distance_between_stirrers_unit",
        "type": "text"
      },
      {
        "name": "stirrer_blade_pitch_angle",
        "type": "float"
      },
      {
        "name": "number_of_stirrer_blades",
        "type": "float"
      },
      {
        "name": "stirrer_blade_size",
        "type": "float"
      },
      {
        "name": "stirrer_blade_size_unit",
        "type": "text"
      },
      {
        "name": "stirrer_geometry",
        "type": "text"
      },
      {
        "name": "stirrer_speed",
        "type": "float"
      },
      {
        "name": "speed_unit",
        "type": "text"
      },
      {
        "name": "height_of_stirrer_above_vessel_base",
        "type": "float"
      },
      {
        "name": "height_of_stirrer_above_vessel_base_unit",
        "type": "text"
      },
      {
        "name": "power_per_volume",
        "type": "float"
      },
      {
        "name": "power_per_volume_unit",
        "type": "text"
      },
      {
        "name": "stir_bar_size",
        "type": "float"
      },
      {
        "name": "stir_bar_size_unit",
        "type": "float"
      },
      {
        "name": "stir_bar_shape",
        "type": "text"
      },
      {
        "name": "special_treatment",
        "type": "text"
      }
    ]
  },
  {
    "id": "vessels_and_mixing.LiquidOrGasImpelledMixing",
    "name": "LiquidOrGasImpelledMixing",
    "domain": "vessels_and_mixing",
    "description": "Mixing impelled by liquid or gas flow",
    "fields": [
      {
        "name": "volume_of_liquid_solid_phase",
        "type": "text"
      },
      {
        "name": "residence_time",
        "type": "float"
      },
      {
        "name": "residence_time_unit",
        "type": "text"
      },
      {
        "name": "reynolds_number",
        "type": "text"
      },
      {
        "name": "passive_mixing",
        "type": "text"
      },
      {
        "name": "active_T_or_Y_mixer",
        "type": "text"
      },
      {
        "name": "pulsing",
        "type": "text"
      },
      {
        "name": "special_treatment",
        "type": "text"
      }
    ]
  }
]"#
}
