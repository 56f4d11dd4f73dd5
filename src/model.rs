//! Output record types. Field names serialize in camelCase to match the
//! format the downstream app imports.

use serde::Serialize;

/// One species in the output database, built fresh every run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesRecord {
    pub species_id: u32,
    pub name: String,
    pub generation: u8,
    pub base_types: Vec<String>,
    pub is_legendary: bool,
    pub is_mythical: bool,
    pub is_starter: bool,
    /// 1 for a species with no predecessor, 2 otherwise
    pub evolution_stage: u8,
    pub description: String,
    pub forms: Vec<FormRecord>,
    pub evolution_paths: Vec<EvolutionEdge>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormRecord {
    pub form_name: String,
    pub types: Vec<String>,
    pub sprite_gen5_animated: Option<String>,
    pub sprite_gen6_animated: Option<String>,
}

/// Direct evolution of a species, one per immediate child in the chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionEdge {
    pub to_species_id: u32,
    /// Trigger name of the first-listed evolution detail, if any
    pub method: Option<String>,
    /// Minimum level when the trigger is level-up
    pub detail: Option<u32>,
}
