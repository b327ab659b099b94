/*
cargo run --bin scenario_list -- --pattern "data/dialogues_*.json"
*/

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;
use scenario_stats::{collect_scenarios, discover, logging::init_logging, DEFAULT_PATTERN};

/// List the distinct scenarios workers used across the corpus.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Glob matching the dialogue JSON files
    #[arg(long, default_value = DEFAULT_PATTERN)]
    pattern: String,

    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_dir, "scenario_list")?;

    let files = discover(&cli.pattern)?;
    let mut scenarios: Vec<String> = collect_scenarios(&files)?.into_iter().collect();
    scenarios.sort();

    for scenario in &scenarios {
        println!("{scenario}");
    }
    println!();
    println!("Number of scenarios: {}", scenarios.len());

    info!("Listed {} scenario(s) from {} file(s)", scenarios.len(), files.len());
    Ok(())
}
