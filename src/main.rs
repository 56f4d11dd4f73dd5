use anyhow::{Context, Result};
use std::path::Path;
use std::time::{Duration, Instant};

use pokedex_sync::{
    api::{PokeClient, DEFAULT_BASE_URL},
    cli::{Cli, Commands},
    dex,
    filter::resolve_generations,
    pipeline::{self, RunOptions, RunReport},
    ui::{ConsoleUi, Phase, Ui, UiApp},
    writer::write_database,
};

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Commands::Sync {
            output,
            gens,
            skip_gens,
            delay_ms,
            timeout_secs,
            base_url,
            plain,
        } => {
            let start = Instant::now();

            let generations = resolve_generations(gens, skip_gens)?;
            let client = build_client(base_url.as_deref(), timeout_secs)?;
            let options = RunOptions {
                delay: Duration::from_millis(delay_ms),
            };

            let report = if plain {
                sync_once(&client, &generations, &options, &output, &mut ConsoleUi::new())?
            } else {
                match UiApp::new() {
                    Ok(mut ui) => {
                        match sync_once(&client, &generations, &options, &output, &mut ui) {
                            Ok(report) => {
                                let summary = format!(
                                    "Saved {} records to {:?} ({} skipped)",
                                    report.records.len(),
                                    output,
                                    report.failed.len()
                                );
                                ui.finish(&summary)?;
                                report
                            }
                            Err(err) => {
                                ui.restore().ok();
                                return Err(err);
                            }
                        }
                    }
                    // No usable terminal; fall back to plain output
                    Err(_) => {
                        sync_once(&client, &generations, &options, &output, &mut ConsoleUi::new())?
                    }
                }
            };

            let elapsed = start.elapsed();
            println!(
                "\nWrote {:?} ({} records, {} skipped) in {:.1}s",
                output,
                report.records.len(),
                report.failed.len(),
                elapsed.as_secs_f64()
            );
        }

        Commands::Species {
            id,
            timeout_secs,
            base_url,
        } => {
            let generation = dex::generation_of(id)
                .with_context(|| format!("species #{} is outside the known generation ranges", id))?;
            let client = build_client(base_url.as_deref(), timeout_secs)?;

            let record = pipeline::fetch_entry(&client, id, generation)?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }

        Commands::ListGenerations => {
            println!("Known generations:\n");
            for generation in dex::GENERATIONS {
                println!(
                    "  gen {}: #{:>3} - #{:>3} ({} species)",
                    generation.gen,
                    generation.first,
                    generation.last,
                    generation.count()
                );
            }
            println!(
                "\n{} species total, {} starters",
                dex::total_species(),
                dex::STARTERS.len()
            );
        }
    }

    Ok(())
}

fn build_client(base_url: Option<&str>, timeout_secs: u64) -> Result<PokeClient> {
    PokeClient::new(
        base_url.unwrap_or(DEFAULT_BASE_URL),
        Duration::from_secs(timeout_secs),
    )
}

/// Run the pipeline over the selected generations and write the output file
fn sync_once(
    client: &PokeClient,
    generations: &[&dex::Generation],
    options: &RunOptions,
    output: &Path,
    ui: &mut impl Ui,
) -> Result<RunReport> {
    let total: usize = generations.iter().map(|g| g.count()).sum();

    ui.set_phase(Phase::Preparing);
    ui.set_info(format!(
        "{} generations, {} species",
        generations.len(),
        total
    ));

    let report = pipeline::run(client, generations, options, ui);

    ui.set_phase(Phase::Writing);
    write_database(output, &report.records)?;

    if !report.failed.is_empty() {
        ui.log(format!("{} species skipped this run", report.failed.len()));
    }

    Ok(report)
}
