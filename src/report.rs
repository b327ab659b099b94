use std::{fmt, path::Path};

use itertools::Itertools;

use crate::{
    counts::{scenario_stats_with, ScenarioCounts},
    error::Result,
};

/// Scenarios whose label contains this marker were generated automatically.
const AUTO_MARKER: &str = "Auto";

/// Summary of a count mapping, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioReport {
    /// (scenario, count), most frequent first, ties by name
    pub rows: Vec<(String, usize)>,
    pub scenarios: usize,
    pub auto_scenarios: usize,
}

impl ScenarioReport {
    pub fn from_counts(counts: &ScenarioCounts) -> Self {
        let rows = counts
            .iter()
            .map(|(k, &v)| (k.clone(), v))
            .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)))
            .collect_vec();
        let auto_scenarios = counts.keys().filter(|k| k.contains(AUTO_MARKER)).count();

        Self {
            scenarios: counts.len(),
            auto_scenarios,
            rows,
        }
    }
}

impl fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        for (scenario, count) in &self.rows {
            writeln!(f, "{scenario:?}: {count},")?;
        }
        writeln!(f, "}}")?;
        writeln!(f)?;
        writeln!(f, "Number of scenarios: {}", self.scenarios)?;
        write!(f, "Number of auto scenarios: {}", self.auto_scenarios)
    }
}

/// Count scenarios over `files` and print the report to stdout.
pub fn print_scenarios_info<P: AsRef<Path>>(files: &[P]) -> Result<ScenarioReport> {
    print_scenarios_info_with(files, |_, _| {})
}

/// [`print_scenarios_info`] with a hook run after each file is counted.
pub fn print_scenarios_info_with<P, F>(files: &[P], on_file: F) -> Result<ScenarioReport>
where
    P: AsRef<Path>,
    F: FnMut(&Path, &ScenarioCounts),
{
    let report = ScenarioReport::from_counts(&scenario_stats_with(files, on_file)?);
    println!("{report}");
    Ok(report)
}
