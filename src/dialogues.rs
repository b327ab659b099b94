use std::{
    collections::{BTreeMap, HashSet},
    path::Path,
};

use log::info;
use serde_json::Value;

use crate::{error::Result, loader::load_records};

/// scenario -> utterance lists, one per dialogue, in file-then-record order
pub type GroupedDialogues = BTreeMap<String, Vec<Vec<Value>>>;

/// Group the utterances of every dialogue in `files` by scenario.
///
/// `only = None` keeps every scenario. `Some(set)` keeps just the scenarios
/// in `set`; an empty set therefore yields an empty mapping. Every file is
/// still read, so unreadable or malformed files fail either way.
pub fn scenario_dialogues<P: AsRef<Path>>(
    files: &[P],
    only: Option<&HashSet<String>>,
) -> Result<GroupedDialogues> {
    let mut output = GroupedDialogues::new();
    for path in files {
        let path = path.as_ref();
        for (index, record) in load_records(path)?.into_iter().enumerate() {
            if only.is_some_and(|keep| !keep.contains(&record.scenario)) {
                continue;
            }
            let utterances = record.utterances_at(path, index)?.to_vec();
            output.entry(record.scenario).or_default().push(utterances);
        }
    }

    info!(
        "Grouped {} dialogue(s) under {} scenario(s)",
        output.values().map(Vec::len).sum::<usize>(),
        output.len()
    );
    Ok(output)
}
