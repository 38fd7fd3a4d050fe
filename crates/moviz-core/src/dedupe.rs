//! Per-dataset duplicate collapse.
//!
//! Two phases, both always run: phase 1 collapses exact native-identifier
//! duplicates; phase 2 collapses fallback-key duplicates, catching the same
//! film published under two different ids. Retention is first-seen in stable
//! input order, never "best record by score".

use std::collections::BTreeSet;

use tracing::debug;

use moviz_model::{NormalizedRecord, SourceDataset};

#[derive(Debug, Default)]
pub struct DedupeOutcome {
    pub kept: Vec<NormalizedRecord>,
    pub removed_by_id: usize,
    pub removed_by_key: usize,
}

impl DedupeOutcome {
    pub fn removed_total(&self) -> usize {
        self.removed_by_id + self.removed_by_key
    }
}

pub fn dedupe_records(dataset: SourceDataset, records: Vec<NormalizedRecord>) -> DedupeOutcome {
    let mut outcome = DedupeOutcome::default();

    // Phase 1: exact native-identifier match. Records without a usable id
    // pass straight through.
    let mut seen_ids: BTreeSet<String> = BTreeSet::new();
    let mut survivors = Vec::with_capacity(records.len());
    for record in records {
        match record.raw_id.as_deref() {
            Some(id) if !id.trim().is_empty() => {
                if seen_ids.insert(id.trim().to_string()) {
                    survivors.push(record);
                } else {
                    outcome.removed_by_id += 1;
                }
            }
            _ => survivors.push(record),
        }
    }

    // Phase 2: fallback-key catch-all over everything that survived.
    let mut seen_keys: BTreeSet<(String, i32)> = BTreeSet::new();
    for record in survivors {
        match record.fallback_key() {
            Some(key) => {
                if seen_keys.insert(key) {
                    outcome.kept.push(record);
                } else {
                    outcome.removed_by_key += 1;
                }
            }
            None => outcome.kept.push(record),
        }
    }

    if outcome.removed_total() > 0 {
        debug!(
            dataset = dataset.as_str(),
            removed_by_id = outcome.removed_by_id,
            removed_by_key = outcome.removed_by_key,
            kept = outcome.kept.len(),
            "duplicates collapsed"
        );
    }
    outcome
}
