use std::{collections::HashMap, path::Path};

use log::info;

use crate::{
    error::{CorpusError, Result},
    loader::{load_records, Dialogue},
};

/// scenario -> number of dialogues
pub type ScenarioCounts = HashMap<String, usize>;

pub fn count_scenarios(records: &[Dialogue]) -> ScenarioCounts {
    let mut counts = ScenarioCounts::new();
    for record in records {
        *counts.entry(record.scenario.clone()).or_default() += 1;
    }
    counts
}

/// Sum several count mappings key by key. A key missing from a mapping
/// counts as zero there. The inputs are left untouched.
pub fn aggregate(count_maps: &[ScenarioCounts]) -> Result<ScenarioCounts> {
    if count_maps.is_empty() {
        return Err(CorpusError::NoCounts);
    }

    let mut totals = ScenarioCounts::new();
    for (scenario, n) in count_maps.iter().flatten() {
        *totals.entry(scenario.clone()).or_default() += n;
    }
    Ok(totals)
}

/// One count mapping per file, in the order given.
pub fn per_file_counts<P: AsRef<Path>>(files: &[P]) -> Result<Vec<ScenarioCounts>> {
    per_file_counts_with(files, |_, _| {})
}

/// [`per_file_counts`], calling `on_file` after each file has been counted.
pub fn per_file_counts_with<P, F>(files: &[P], mut on_file: F) -> Result<Vec<ScenarioCounts>>
where
    P: AsRef<Path>,
    F: FnMut(&Path, &ScenarioCounts),
{
    let mut per_file = Vec::with_capacity(files.len());
    for path in files {
        let path = path.as_ref();
        let counts = count_scenarios(&load_records(path)?);
        on_file(path, &counts);
        per_file.push(counts);
    }
    Ok(per_file)
}

/// Scenario frequencies across the whole corpus.
pub fn scenario_stats<P: AsRef<Path>>(files: &[P]) -> Result<ScenarioCounts> {
    scenario_stats_with(files, |_, _| {})
}

pub fn scenario_stats_with<P, F>(files: &[P], on_file: F) -> Result<ScenarioCounts>
where
    P: AsRef<Path>,
    F: FnMut(&Path, &ScenarioCounts),
{
    let totals = aggregate(&per_file_counts_with(files, on_file)?)?;
    info!(
        "Counted {} dialogue(s) over {} scenario(s)",
        totals.values().sum::<usize>(),
        totals.len()
    );
    Ok(totals)
}
