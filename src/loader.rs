use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use log::debug;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{CorpusError, Result};

/// One dialogue as stored in a corpus file. Fields other than these are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Dialogue {
    pub scenario: String,

    /// Opaque; a string or a nested object depending on the corpus.
    #[serde(default)]
    pub instructions: Option<Value>,

    /// Turn objects in dialogue order.
    #[serde(default)]
    pub utterances: Option<Vec<Value>>,
}

impl Dialogue {
    pub fn instructions_at(&self, path: &Path, index: usize) -> Result<&Value> {
        self.instructions
            .as_ref()
            .ok_or_else(|| missing(path, index, "instructions"))
    }

    pub fn utterances_at(&self, path: &Path, index: usize) -> Result<&[Value]> {
        self.utterances
            .as_deref()
            .ok_or_else(|| missing(path, index, "utterances"))
    }
}

fn missing(path: &Path, index: usize, field: &'static str) -> CorpusError {
    CorpusError::MissingField {
        path: path.to_path_buf(),
        index,
        field,
    }
}

/// Read a whole corpus file, keeping the records in file order.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Dialogue>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CorpusError::NotFound {
        path: PathBuf::from(path),
        source,
    })?;
    let records: Vec<Dialogue> =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| CorpusError::Parse {
            path: PathBuf::from(path),
            source,
        })?;

    debug!("Loaded {} dialogue(s) from {}", records.len(), path.display());
    Ok(records)
}
