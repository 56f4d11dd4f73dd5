use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pokedex-sync")]
#[command(version, about = "Build a denormalized Pokémon species database from PokéAPI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch every species and write the JSON database
    Sync {
        /// Output JSON file path
        output: PathBuf,

        /// Only fetch these generations (comma-separated, 1-6)
        #[arg(short, long, value_delimiter = ',')]
        gens: Option<Vec<u8>>,

        /// Skip these generations (comma-separated, 1-6)
        #[arg(short, long, value_delimiter = ',')]
        skip_gens: Option<Vec<u8>>,

        /// Delay after each successful fetch, in milliseconds
        #[arg(long, default_value_t = 500)]
        delay_ms: u64,

        /// Per-request timeout, in seconds
        #[arg(long, default_value_t = 10)]
        timeout_secs: u64,

        /// Override the upstream API base URL
        #[arg(long)]
        base_url: Option<String>,

        /// Plain console output instead of the terminal UI
        #[arg(short, long)]
        plain: bool,
    },

    /// Fetch a single species and print its record as JSON
    Species {
        /// Species ID (1-721)
        id: u32,

        /// Per-request timeout, in seconds
        #[arg(long, default_value_t = 10)]
        timeout_secs: u64,

        /// Override the upstream API base URL
        #[arg(long)]
        base_url: Option<String>,
    },

    /// List the generation ID ranges and the starter set
    ListGenerations,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
