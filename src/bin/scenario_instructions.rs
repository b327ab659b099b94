/*
cargo run --bin scenario_instructions

check that every file agrees with data file #2 first:
cargo run --bin scenario_instructions -- --idx 2 --verify
*/

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use scenario_stats::{
    discover, logging::init_logging, scenario_instructions, verify_instructions, DEFAULT_PATTERN,
};

/// Print the instructions belonging to each scenario as JSON.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Glob matching the dialogue JSON files
    #[arg(long, default_value = DEFAULT_PATTERN)]
    pattern: String,

    /// Index (in glob order) of the file the instructions are taken from
    #[arg(long, default_value_t = 0)]
    idx: usize,

    /// Fail if any other file disagrees with the extracted instructions
    #[arg(long)]
    verify: bool,

    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_dir, "scenario_instructions")?;

    let files = discover(&cli.pattern)?;
    let instructions = if cli.verify {
        verify_instructions(&files, cli.idx)
    } else {
        scenario_instructions(&files, cli.idx)
    }
    .with_context(|| format!("Extracting instructions from {}", cli.pattern))?;

    println!("{}", serde_json::to_string_pretty(&instructions)?);

    info!(
        "Printed instructions for {} scenario(s) (verified: {})",
        instructions.len(),
        cli.verify
    );
    Ok(())
}
