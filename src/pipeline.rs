//! Batch orchestration: one species at a time, failures contained per ID.

use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::api::client::{FetchError, PokeClient};
use crate::api::types::{EvolutionChainDoc, PokemonDoc, SpeciesDoc};
use crate::dex::{self, Generation};
use crate::evolution::direct_successors;
use crate::model::SpeciesRecord;
use crate::normalize::normalize;
use crate::ui::{Phase, Ui};

/// Upstream document source. `PokeClient` is the live implementation;
/// tests substitute an in-memory fake.
pub trait SpeciesSource {
    fn pokemon(&self, id: u32) -> Result<PokemonDoc, FetchError>;
    fn species(&self, id: u32) -> Result<SpeciesDoc, FetchError>;
    fn evolution_chain(&self, url: &str) -> Result<EvolutionChainDoc, FetchError>;
}

impl SpeciesSource for PokeClient {
    fn pokemon(&self, id: u32) -> Result<PokemonDoc, FetchError> {
        PokeClient::pokemon(self, id)
    }

    fn species(&self, id: u32) -> Result<SpeciesDoc, FetchError> {
        PokeClient::species(self, id)
    }

    fn evolution_chain(&self, url: &str) -> Result<EvolutionChainDoc, FetchError> {
        PokeClient::evolution_chain(self, url)
    }
}

pub struct RunOptions {
    /// Pause after each successfully processed ID. Failed IDs skip the
    /// pause and fail fast.
    pub delay: Duration,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(500),
        }
    }
}

/// Outcome of a full run: every attempted ID lands in exactly one of
/// the two lists.
pub struct RunReport {
    pub records: Vec<SpeciesRecord>,
    pub failed: Vec<(u32, String)>,
}

impl RunReport {
    pub fn attempted(&self) -> usize {
        self.records.len() + self.failed.len()
    }
}

/// Fetch and assemble the record for a single species ID.
///
/// Three upstream documents are involved: the base form, the species,
/// and the evolution chain the species document points at. A species
/// document without a chain reference counts as malformed; that and any
/// fetch or decode failure propagate out as this ID's failure cause.
pub fn fetch_entry(
    source: &impl SpeciesSource,
    id: u32,
    generation: u8,
) -> Result<SpeciesRecord> {
    let pokemon = source.pokemon(id)?;
    let species = source.species(id)?;

    let chain_ref = species
        .evolution_chain
        .as_ref()
        .context("species document has no evolution chain reference")?;
    let chain = source.evolution_chain(&chain_ref.url)?;
    let edges = direct_successors(&chain.chain, &pokemon.name)?;

    let starter = dex::is_starter(id);
    Ok(normalize(&pokemon, &species, edges, id, generation, starter))
}

/// Process every ID of the given generations in declared order.
///
/// Each ID is attempted exactly once. A failed ID contributes no record:
/// its cause is logged through the UI and recorded in the report, and the
/// run moves on. Nothing short of returning aborts the loop.
pub fn run(
    source: &impl SpeciesSource,
    generations: &[&Generation],
    options: &RunOptions,
    ui: &mut impl Ui,
) -> RunReport {
    let total: u64 = generations.iter().map(|g| g.count() as u64).sum();
    let mut records = Vec::with_capacity(total as usize);
    let mut failed = Vec::new();
    let mut attempted: u64 = 0;

    ui.set_phase(Phase::Fetching);

    for generation in generations {
        ui.set_info(format!(
            "Generation {} (#{} - #{})",
            generation.gen, generation.first, generation.last
        ));

        for id in generation.ids() {
            attempted += 1;
            match fetch_entry(source, id, generation.gen) {
                Ok(record) => {
                    ui.set_progress(attempted, total, format!("#{} {}", id, record.name));
                    records.push(record);
                    thread::sleep(options.delay);
                }
                Err(cause) => {
                    ui.set_progress(attempted, total, format!("#{} failed", id));
                    ui.log(format!("#{} skipped: {:#}", id, cause));
                    failed.push((id, format!("{:#}", cause)));
                }
            }
        }
    }

    RunReport { records, failed }
}
