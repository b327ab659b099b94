use std::path::PathBuf;

use glob::glob;
use log::info;

use crate::error::{CorpusError, Result};

/// Where the corpus lives when no pattern is given on the command line.
pub const DEFAULT_PATTERN: &str = "data/*.json";

/// Expand `pattern` into the list of corpus files, in glob order.
pub fn discover(pattern: &str) -> Result<Vec<PathBuf>> {
    let entries = glob(pattern).map_err(|source| CorpusError::Pattern {
        pattern: pattern.to_owned(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?;
        if path.is_file() {
            files.push(path);
        }
    }

    info!("Pattern {pattern:?} matched {} file(s)", files.len());
    Ok(files)
}
