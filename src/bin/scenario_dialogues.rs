/*
cargo run --bin scenario_dialogues -- \
    --only "Theaters temporarily closed"

per-scenario totals only:
cargo run --bin scenario_dialogues -- --summary
*/

use std::{collections::HashSet, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use scenario_stats::{discover, logging::init_logging, scenario_dialogues, DEFAULT_PATTERN};

/// Print dialogue utterances grouped by scenario as JSON.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Glob matching the dialogue JSON files
    #[arg(long, default_value = DEFAULT_PATTERN)]
    pattern: String,

    /// Keep only this scenario (repeatable); all scenarios when omitted
    #[arg(long = "only", value_name = "SCENARIO")]
    only: Vec<String>,

    /// Print the number of dialogues per scenario instead of the utterances
    #[arg(long)]
    summary: bool,

    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_dir, "scenario_dialogues")?;

    let only: Option<HashSet<String>> =
        (!cli.only.is_empty()).then(|| cli.only.iter().cloned().collect());
    if let Some(keep) = &only {
        info!("Restricting to {} scenario(s): {:?}", keep.len(), keep);
    }

    let files = discover(&cli.pattern)?;
    let grouped = scenario_dialogues(&files, only.as_ref())
        .with_context(|| format!("Grouping dialogues from {}", cli.pattern))?;

    if cli.summary {
        for (scenario, dialogues) in &grouped {
            println!("{:<6} {scenario}", dialogues.len());
        }
    } else {
        println!("{}", serde_json::to_string_pretty(&grouped)?);
    }

    info!("Printed {} scenario group(s)", grouped.len());
    Ok(())
}
