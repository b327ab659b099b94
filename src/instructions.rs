use std::{
    collections::{BTreeMap, HashMap},
    path::{Path, PathBuf},
};

use log::{info, warn};
use serde_json::Value;

use crate::{
    error::{CorpusError, Result},
    loader::load_records,
};

/// scenario -> instructions shown to the workers for that scenario
pub type InstructionMap = BTreeMap<String, Value>;

/// Instructions per scenario, read from `files[idx]` only.
///
/// The first record of a scenario wins. Records with an empty scenario
/// label never count as seen, so the last of them wins instead.
pub fn scenario_instructions<P: AsRef<Path>>(files: &[P], idx: usize) -> Result<InstructionMap> {
    let path = files
        .get(idx)
        .ok_or(CorpusError::FileIndex {
            idx,
            len: files.len(),
        })?
        .as_ref();

    let mut instructions = InstructionMap::new();
    for (index, record) in load_records(path)?.iter().enumerate() {
        if !record.scenario.is_empty() && instructions.contains_key(&record.scenario) {
            continue;
        }
        let value = record.instructions_at(path, index)?.clone();
        instructions.insert(record.scenario.clone(), value);
    }

    info!(
        "Extracted instructions for {} scenario(s) from {}",
        instructions.len(),
        path.display()
    );
    Ok(instructions)
}

/// Like [`scenario_instructions`], then reads every other file and fails
/// with [`CorpusError::Inconsistent`] as soon as a scenario's instructions
/// differ from the canonical value. Scenarios missing from `files[idx]` are
/// compared against the first value seen for them elsewhere. Empty scenario
/// labels are not compared.
pub fn verify_instructions<P: AsRef<Path>>(files: &[P], idx: usize) -> Result<InstructionMap> {
    let canonical = scenario_instructions(files, idx)?;
    let canonical_path = files[idx].as_ref();

    let mut seen: HashMap<String, (Value, PathBuf)> = canonical
        .iter()
        .filter(|(scenario, _)| !scenario.is_empty())
        .map(|(scenario, value)| {
            (scenario.clone(), (value.clone(), canonical_path.to_path_buf()))
        })
        .collect();

    for (i, path) in files.iter().enumerate() {
        if i == idx {
            continue;
        }
        let path = path.as_ref();
        for (index, record) in load_records(path)?.into_iter().enumerate() {
            if record.scenario.is_empty() {
                continue;
            }
            let value = record.instructions_at(path, index)?.clone();
            match seen.get(&record.scenario) {
                Some((expected, origin)) => {
                    if *expected != value {
                        warn!(
                            "Scenario {:?} has diverging instructions in {}",
                            record.scenario,
                            path.display()
                        );
                        return Err(CorpusError::Inconsistent {
                            scenario: record.scenario,
                            path: path.to_path_buf(),
                            canonical: origin.clone(),
                        });
                    }
                }
                None => {
                    seen.insert(record.scenario, (value, path.to_path_buf()));
                }
            }
        }
    }

    info!("Instructions consistent across {} file(s)", files.len());
    Ok(canonical)
}
