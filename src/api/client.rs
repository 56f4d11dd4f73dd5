use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

use super::types::{EvolutionChainDoc, PokemonDoc, SpeciesDoc};

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("pokedex-sync/", env!("CARGO_PKG_VERSION"));

/// Failure of a single upstream GET. No retry happens at this layer;
/// recovery is the caller's per-ID skip.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("unexpected response shape from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Blocking PokéAPI client. One underlying connection pool is shared
/// across all calls of a run.
pub struct PokeClient {
    client: Client,
    base_url: String,
}

impl PokeClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET a URL and decode the JSON body into T
    pub fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|source| FetchError::Http {
                url: url.to_string(),
                source,
            })?;

        let body = response.text().map_err(|source| FetchError::Http {
            url: url.to_string(),
            source,
        })?;

        serde_json::from_str(&body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }

    /// Fetch the base-form document for a species ID
    pub fn pokemon(&self, id: u32) -> Result<PokemonDoc, FetchError> {
        self.get_json(&format!("{}/pokemon/{}", self.base_url, id))
    }

    /// Fetch the species-level document for a species ID
    pub fn species(&self, id: u32) -> Result<SpeciesDoc, FetchError> {
        self.get_json(&format!("{}/pokemon-species/{}", self.base_url, id))
    }

    /// Fetch an evolution chain by the absolute URL taken from a species doc
    pub fn evolution_chain(&self, url: &str) -> Result<EvolutionChainDoc, FetchError> {
        self.get_json(url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
