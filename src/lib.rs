//! Scenario statistics over a corpus of dialogue JSON files.
//!
//! Every file holds an array of dialogue objects carrying a `scenario`
//! label. The modules here count, list and group those dialogues by
//! scenario; the binaries under `src/bin` are thin CLI drivers.

pub mod corpus;
pub mod counts;
pub mod dialogues;
pub mod error;
pub mod instructions;
pub mod loader;
pub mod logging;
pub mod report;
pub mod scenarios;

pub use corpus::{discover, DEFAULT_PATTERN};
pub use counts::{
    aggregate, count_scenarios, per_file_counts, per_file_counts_with, scenario_stats,
    scenario_stats_with, ScenarioCounts,
};
pub use dialogues::{scenario_dialogues, GroupedDialogues};
pub use error::{CorpusError, Result};
pub use instructions::{scenario_instructions, verify_instructions, InstructionMap};
pub use loader::{load_records, Dialogue};
pub use report::{print_scenarios_info, print_scenarios_info_with, ScenarioReport};
pub use scenarios::collect_scenarios;
