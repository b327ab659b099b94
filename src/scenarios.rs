use std::{collections::HashSet, path::Path};

use crate::{error::Result, loader::load_records};

/// Every distinct scenario label used anywhere in `files`.
pub fn collect_scenarios<P: AsRef<Path>>(files: &[P]) -> Result<HashSet<String>> {
    let mut scenarios = HashSet::new();
    for path in files {
        for record in load_records(path)? {
            scenarios.insert(record.scenario);
        }
    }
    Ok(scenarios)
}
