//! Typed views of the PokéAPI documents, restricted to the fields the
//! pipeline reads. Every level the upstream may omit is an Option so a
//! missing branch decodes to None instead of failing the record.

use serde::Deserialize;

/// Name + URL pair used all over the upstream schema
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

impl NamedResource {
    /// Numeric ID from the trailing path segment of a resource URL,
    /// e.g. `.../pokemon-species/133/` -> 133
    pub fn id(&self) -> Option<u32> {
        self.url
            .trim_end_matches('/')
            .rsplit('/')
            .next()?
            .parse()
            .ok()
    }
}

// --- pokemon/{id} ---

#[derive(Debug, Deserialize)]
pub struct PokemonDoc {
    pub name: String,
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub sprites: Sprites,
}

#[derive(Debug, Deserialize)]
pub struct TypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
}

#[derive(Debug, Default, Deserialize)]
pub struct Sprites {
    pub versions: Option<SpriteVersions>,
}

#[derive(Debug, Deserialize)]
pub struct SpriteVersions {
    #[serde(rename = "generation-v")]
    pub generation_v: Option<GenerationVSprites>,
    #[serde(rename = "generation-vi")]
    pub generation_vi: Option<GenerationViSprites>,
}

#[derive(Debug, Deserialize)]
pub struct GenerationVSprites {
    #[serde(rename = "black-white")]
    pub black_white: Option<VersionGroupSprites>,
}

#[derive(Debug, Deserialize)]
pub struct VersionGroupSprites {
    pub animated: Option<FrontSprite>,
}

#[derive(Debug, Deserialize)]
pub struct GenerationViSprites {
    #[serde(rename = "x-y")]
    pub x_y: Option<FrontSprite>,
}

#[derive(Debug, Deserialize)]
pub struct FrontSprite {
    pub front_default: Option<String>,
}

// --- pokemon-species/{id} ---

#[derive(Debug, Deserialize)]
pub struct SpeciesDoc {
    #[serde(default)]
    pub is_legendary: bool,
    #[serde(default)]
    pub is_mythical: bool,
    pub evolves_from_species: Option<NamedResource>,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,
    pub evolution_chain: Option<ResourceRef>,
}

#[derive(Debug, Deserialize)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedResource,
}

/// Bare URL reference (no name), as published for evolution chains
#[derive(Debug, Deserialize)]
pub struct ResourceRef {
    pub url: String,
}

// --- evolution-chain/{id} ---

#[derive(Debug, Deserialize)]
pub struct EvolutionChainDoc {
    pub chain: ChainLink,
}

/// Node of the evolution tree; owns its children outright
#[derive(Debug, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub evolution_details: Vec<EvolutionDetail>,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

#[derive(Debug, Deserialize)]
pub struct EvolutionDetail {
    pub trigger: Option<NamedResource>,
    pub min_level: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resource_id_from_url() {
        let eevee = NamedResource {
            name: "eevee".to_string(),
            url: "https://pokeapi.co/api/v2/pokemon-species/133/".to_string(),
        };
        assert_eq!(eevee.id(), Some(133));

        let no_slash = NamedResource {
            name: "eevee".to_string(),
            url: "https://pokeapi.co/api/v2/pokemon-species/133".to_string(),
        };
        assert_eq!(no_slash.id(), Some(133));

        let bogus = NamedResource {
            name: "x".to_string(),
            url: "https://pokeapi.co/api/v2/pokemon-species/latest/".to_string(),
        };
        assert_eq!(bogus.id(), None);
    }

    #[test]
    fn pokemon_doc_tolerates_missing_sprite_branches() {
        let doc: PokemonDoc = serde_json::from_value(json!({
            "name": "bulbasaur",
            "types": [
                {"slot": 1, "type": {"name": "grass", "url": "https://pokeapi.co/api/v2/type/12/"}}
            ],
            "sprites": {"versions": {"generation-v": {"black-white": {"animated": null}}}}
        }))
        .unwrap();

        assert_eq!(doc.name, "bulbasaur");
        let gen5 = doc
            .sprites
            .versions
            .as_ref()
            .and_then(|v| v.generation_v.as_ref())
            .and_then(|g| g.black_white.as_ref())
            .and_then(|bw| bw.animated.as_ref());
        assert!(gen5.is_none());
    }

    #[test]
    fn species_doc_without_chain_or_flavor_text() {
        let doc: SpeciesDoc = serde_json::from_value(json!({
            "is_legendary": true,
            "is_mythical": false,
            "evolves_from_species": null,
            "evolution_chain": null
        }))
        .unwrap();

        assert!(doc.is_legendary);
        assert!(doc.evolution_chain.is_none());
        assert!(doc.flavor_text_entries.is_empty());
    }

    #[test]
    fn chain_link_decodes_recursively() {
        let doc: EvolutionChainDoc = serde_json::from_value(json!({
            "chain": {
                "species": {"name": "caterpie", "url": "https://pokeapi.co/api/v2/pokemon-species/10/"},
                "evolution_details": [],
                "evolves_to": [{
                    "species": {"name": "metapod", "url": "https://pokeapi.co/api/v2/pokemon-species/11/"},
                    "evolution_details": [{"trigger": {"name": "level-up", "url": "https://pokeapi.co/api/v2/evolution-trigger/1/"}, "min_level": 7}],
                    "evolves_to": []
                }]
            }
        }))
        .unwrap();

        assert_eq!(doc.chain.species.name, "caterpie");
        assert_eq!(doc.chain.evolves_to.len(), 1);
        assert_eq!(doc.chain.evolves_to[0].evolution_details[0].min_level, Some(7));
    }
}
