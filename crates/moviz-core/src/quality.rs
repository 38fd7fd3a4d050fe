//! Row-level admission control.
//!
//! Applies the per-dataset critical/non-critical column policy plus the
//! dataset-specific rules (TMDB adult/unreleased and empty-payload
//! exclusions, budgets future-date exclusion). Rules are independent
//! predicates; the reported reason is the first violated rule in evaluation
//! order.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use moviz_model::{NormalizedRecord, RejectReason, SourceDataset};
use moviz_standards::{ColumnPolicy, policy_for};

/// Outcome of filtering one dataset.
#[derive(Debug, Default)]
pub struct QualityOutcome {
    pub kept: Vec<NormalizedRecord>,
    pub rejected: BTreeMap<RejectReason, usize>,
}

impl QualityOutcome {
    pub fn rejected_total(&self) -> usize {
        self.rejected.values().sum()
    }
}

/// Evaluate one record against the dataset policy. `None` means the record
/// is admitted.
pub fn evaluate(
    dataset: SourceDataset,
    policy: &ColumnPolicy,
    record: &NormalizedRecord,
    today: NaiveDate,
) -> Option<RejectReason> {
    for field in policy.critical {
        if record.field_is_missing(field) {
            return Some(RejectReason::CriticalNull);
        }
    }
    if !record.year_in_range() {
        return Some(RejectReason::YearOutOfRange);
    }
    if dataset == SourceDataset::Tmdb {
        if record.adult == Some(true) {
            return Some(RejectReason::AdultOrUnreleased);
        }
        // A row without a status is not known to be released; exclude it.
        if record.status.as_deref() != Some("Released") {
            return Some(RejectReason::AdultOrUnreleased);
        }
    }
    if dataset == SourceDataset::Budgets
        && record.release_date.is_some_and(|date| date > today)
    {
        return Some(RejectReason::FutureRelease);
    }
    if !policy.non_critical.is_empty() {
        let missing = policy
            .non_critical
            .iter()
            .filter(|field| record.field_is_missing(field))
            .count();
        let fraction = missing as f64 / policy.non_critical.len() as f64;
        if fraction > policy.threshold {
            return Some(RejectReason::NonCriticalThreshold);
        }
    }
    if dataset == SourceDataset::Tmdb
        && ["runtime", "budget", "worldwide_gross"]
            .iter()
            .all(|field| record.field_is_missing(field))
    {
        return Some(RejectReason::MissingPayload);
    }
    None
}

/// Filter a dataset's records, tagging each rejection with its reason.
pub fn filter_records(
    dataset: SourceDataset,
    records: Vec<NormalizedRecord>,
    today: NaiveDate,
) -> QualityOutcome {
    let policy = policy_for(dataset);
    let mut outcome = QualityOutcome::default();
    for record in records {
        match evaluate(dataset, policy, &record, today) {
            None => outcome.kept.push(record),
            Some(reason) => {
                debug!(
                    dataset = dataset.as_str(),
                    title = %record.title,
                    reason = %reason,
                    "record rejected"
                );
                *outcome.rejected.entry(reason).or_insert(0) += 1;
            }
        }
    }
    outcome
}
