/*
cargo run --bin scenario_counts

cargo run --bin scenario_counts -- \
    --pattern "data/dialogues_*.json" \
    --log-dir logs
*/

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use scenario_stats::{
    discover, logging::init_logging, print_scenarios_info_with, DEFAULT_PATTERN,
};

/// Print how often each scenario occurs across the corpus.
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
    init_logging(&cli.log_dir, "scenario_counts")?;
    info!("Counting scenarios for {:?}", cli.pattern);

    let files = discover(&cli.pattern)?;
    if files.is_empty() {
        bail!("No corpus files match {}", cli.pattern);
    }

    let bar = ProgressBar::new(files.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("##-"),
    );

    let report = print_scenarios_info_with(&files, |path, counts| {
        info!(
            "{}: {} dialogue(s), {} scenario(s)",
            path.display(),
            counts.values().sum::<usize>(),
            counts.len()
        );
        bar.set_message(path.display().to_string());
        bar.inc(1);
        // clear before the report is printed
        if Some(bar.position()) == bar.length() {
            bar.finish_and_clear();
        }
    });
    bar.finish_and_clear();
    let report = report.with_context(|| format!("Counting scenarios for {}", cli.pattern))?;

    info!(
        "Done: {} scenario(s), {} auto",
        report.scenarios, report.auto_scenarios
    );
    Ok(())
}
