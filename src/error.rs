use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CorpusError>;

#[derive(Debug, Error)]
pub enum CorpusError {
    /// The file is missing or could not be read.
    #[error("cannot read {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a JSON array of dialogue objects.
    #[error("{} is not a valid dialogue array", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A record lacks a field the requested operation reads.
    #[error("{}: record {index} has no `{field}` field", path.display())]
    MissingField {
        path: PathBuf,
        index: usize,
        field: &'static str,
    },

    #[error("cannot aggregate zero count mappings")]
    NoCounts,

    #[error("file index {idx} is out of range for {len} corpus file(s)")]
    FileIndex { idx: usize, len: usize },

    /// Instructions for a scenario differ between two files.
    #[error(
        "instructions for scenario {scenario:?} in {} differ from {}",
        path.display(),
        canonical.display()
    )]
    Inconsistent {
        scenario: String,
        path: PathBuf,
        canonical: PathBuf,
    },

    #[error("invalid corpus pattern {pattern:?}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("cannot access corpus entry")]
    Glob(#[from] glob::GlobError),
}
