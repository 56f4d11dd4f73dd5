//! Assembles the canonical output record from the fetched documents.
//! Pure functions, no network or file access.

use crate::api::types::{PokemonDoc, SpeciesDoc};
use crate::model::{EvolutionEdge, FormRecord, SpeciesRecord};

const BASE_FORM_NAME: &str = "Normal";
const ENGLISH: &str = "en";

pub fn normalize(
    pokemon: &PokemonDoc,
    species: &SpeciesDoc,
    evolution_paths: Vec<EvolutionEdge>,
    species_id: u32,
    generation: u8,
    is_starter: bool,
) -> SpeciesRecord {
    let base_types = base_types(pokemon);

    SpeciesRecord {
        species_id,
        name: pokemon.name.clone(),
        generation,
        base_types: base_types.clone(),
        is_legendary: species.is_legendary,
        is_mythical: species.is_mythical,
        is_starter,
        evolution_stage: if species.evolves_from_species.is_some() {
            2
        } else {
            1
        },
        description: description(species),
        forms: vec![FormRecord {
            form_name: BASE_FORM_NAME.to_string(),
            types: base_types,
            sprite_gen5_animated: sprite_gen5_animated(pokemon),
            sprite_gen6_animated: sprite_gen6_animated(pokemon),
        }],
        evolution_paths,
    }
}

/// Type names ordered by the upstream slot number (primary first)
fn base_types(pokemon: &PokemonDoc) -> Vec<String> {
    let mut slots: Vec<_> = pokemon.types.iter().collect();
    slots.sort_by_key(|t| t.slot);
    slots.into_iter().map(|t| t.type_ref.name.clone()).collect()
}

/// First English flavor text, newlines and form feeds flattened to spaces
fn description(species: &SpeciesDoc) -> String {
    species
        .flavor_text_entries
        .iter()
        .find(|e| e.language.name == ENGLISH)
        .map(|e| e.flavor_text.replace(['\n', '\x0c'], " "))
        .unwrap_or_default()
}

fn sprite_gen5_animated(pokemon: &PokemonDoc) -> Option<String> {
    pokemon
        .sprites
        .versions
        .as_ref()?
        .generation_v
        .as_ref()?
        .black_white
        .as_ref()?
        .animated
        .as_ref()?
        .front_default
        .clone()
}

fn sprite_gen6_animated(pokemon: &PokemonDoc) -> Option<String> {
    pokemon
        .sprites
        .versions
        .as_ref()?
        .generation_vi
        .as_ref()?
        .x_y
        .as_ref()?
        .front_default
        .clone()
}
