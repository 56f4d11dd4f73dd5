//! Live checks against the real PokéAPI.
//!
//! Ignored by default; run explicitly with:
//! ```sh
//! cargo test --test live_api -- --ignored
//! ```

use std::time::Duration;

use pokedex_sync::api::{PokeClient, DEFAULT_BASE_URL};
use pokedex_sync::pipeline::fetch_entry;

#[test]
#[ignore]
fn fetches_and_normalizes_bulbasaur() {
    let client = PokeClient::new(DEFAULT_BASE_URL, Duration::from_secs(10)).unwrap();

    let record = fetch_entry(&client, 1, 1).unwrap();

    assert_eq!(record.species_id, 1);
    assert_eq!(record.name, "bulbasaur");
    assert_eq!(record.generation, 1);
    assert_eq!(record.base_types, vec!["grass", "poison"]);
    assert!(record.is_starter);
    assert_eq!(record.evolution_stage, 1);
    assert_eq!(record.evolution_paths.len(), 1);
    assert_eq!(record.evolution_paths[0].to_species_id, 2);
    assert!(!record.description.is_empty());
}
