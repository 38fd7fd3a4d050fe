//! Tests for row-level admission control.

use chrono::NaiveDate;
use moviz_core::{assign_decades, filter_records};
use moviz_model::{NormalizedRecord, RejectReason, SourceDataset};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date")
}

fn record(title: &str, year: Option<i32>) -> NormalizedRecord {
    NormalizedRecord {
        title: title.to_string(),
        normalized_title: title.to_lowercase(),
        year,
        ..NormalizedRecord::default()
    }
}

fn full_record(title: &str, year: i32) -> NormalizedRecord {
    NormalizedRecord {
        raw_id: Some("tt1".to_string()),
        rating: Some(7.5),
        votes: Some(1200),
        runtime: Some(120),
        genres: vec!["Drama".to_string()],
        budget: Some(1_000_000),
        worldwide_gross: Some(5_000_000),
        description: Some("a film".to_string()),
        release_date: NaiveDate::from_ymd_opt(year, 1, 1),
        status: Some("Released".to_string()),
        ..record(title, Some(year))
    }
}

#[test]
fn missing_title_is_critical_null() {
    let outcome = filter_records(SourceDataset::Tmdb, vec![record("", Some(1999))], today());
    assert!(outcome.kept.is_empty());
    assert_eq!(outcome.rejected.get(&RejectReason::CriticalNull), Some(&1));
}

#[test]
fn missing_year_is_critical_null() {
    let outcome = filter_records(SourceDataset::Genres, vec![record("Heat", None)], today());
    assert_eq!(outcome.rejected.get(&RejectReason::CriticalNull), Some(&1));
}

#[test]
fn out_of_range_year_rejected_even_when_otherwise_valid() {
    // A row dated 1850 with every other field populated.
    let outcome = filter_records(
        SourceDataset::Tmdb,
        vec![full_record("Old Film", 1850)],
        today(),
    );
    assert!(outcome.kept.is_empty());
    assert_eq!(outcome.rejected.get(&RejectReason::YearOutOfRange), Some(&1));
}

#[test]
fn range_boundaries_admitted() {
    let outcome = filter_records(
        SourceDataset::Tmdb,
        vec![full_record("First", 1880), full_record("Last", 2025)],
        today(),
    );
    assert_eq!(outcome.kept.len(), 2);
}

#[test]
fn adult_content_rejected_for_tmdb_only() {
    let mut adult = full_record("Adult", 2000);
    adult.adult = Some(true);
    let outcome = filter_records(SourceDataset::Tmdb, vec![adult], today());
    assert_eq!(
        outcome.rejected.get(&RejectReason::AdultOrUnreleased),
        Some(&1)
    );

    // The same flag on another dataset is not a rejection rule.
    let mut flagged = full_record("Flagged", 2000);
    flagged.adult = Some(true);
    flagged.status = None;
    let outcome = filter_records(SourceDataset::Genres, vec![flagged], today());
    assert_eq!(outcome.kept.len(), 1);
}

#[test]
fn unreleased_status_rejected() {
    let mut upcoming = full_record("Upcoming", 2024);
    upcoming.status = Some("Post Production".to_string());
    let outcome = filter_records(SourceDataset::Tmdb, vec![upcoming], today());
    assert_eq!(
        outcome.rejected.get(&RejectReason::AdultOrUnreleased),
        Some(&1)
    );
}

#[test]
fn missing_status_rejected_like_unreleased() {
    // Absent status is not a pass: only explicit "Released" is admitted.
    let mut undated = full_record("Shelved", 2019);
    undated.status = None;
    let outcome = filter_records(SourceDataset::Tmdb, vec![undated], today());
    assert!(outcome.kept.is_empty());
    assert_eq!(
        outcome.rejected.get(&RejectReason::AdultOrUnreleased),
        Some(&1)
    );

    // Status is a TMDB-only column; its absence elsewhere is no rejection.
    let mut ledger = record("Heat", Some(1995));
    ledger.release_date = NaiveDate::from_ymd_opt(1995, 12, 15);
    ledger.budget = Some(60_000_000);
    ledger.worldwide_gross = Some(187_000_000);
    let outcome = filter_records(SourceDataset::Budgets, vec![ledger], today());
    assert_eq!(outcome.kept.len(), 1);
}

#[test]
fn empty_financial_payload_rejected_for_tmdb_only() {
    // Runtime, budget and revenue all zero or null; the rest populated.
    let mut hollow = full_record("Hollow", 2005);
    hollow.runtime = Some(0);
    hollow.budget = Some(0);
    hollow.worldwide_gross = None;
    let outcome = filter_records(SourceDataset::Tmdb, vec![hollow], today());
    assert!(outcome.kept.is_empty());
    assert_eq!(outcome.rejected.get(&RejectReason::MissingPayload), Some(&1));

    // The same shape on another dataset passes.
    let mut sparse = full_record("Sparse Elsewhere", 2005);
    sparse.runtime = Some(0);
    sparse.budget = Some(0);
    sparse.worldwide_gross = None;
    let outcome = filter_records(SourceDataset::Genres, vec![sparse], today());
    assert_eq!(outcome.kept.len(), 1);
}

#[test]
fn ninety_percent_missing_non_critical_rejected() {
    // Title, year and status present, essentially everything else null.
    let mut bare = record("Sparse", Some(2001));
    bare.status = Some("Released".to_string());
    let outcome = filter_records(SourceDataset::Tmdb, vec![bare], today());
    assert!(outcome.kept.is_empty());
    assert_eq!(
        outcome.rejected.get(&RejectReason::NonCriticalThreshold),
        Some(&1)
    );
}

#[test]
fn moderate_missingness_admitted() {
    let mut partial = record("Partial", Some(2001));
    partial.raw_id = Some("tt9".to_string());
    partial.rating = Some(6.0);
    partial.votes = Some(10);
    partial.runtime = Some(90);
    partial.genres = vec!["Comedy".to_string()];
    partial.status = Some("Released".to_string());
    // 4 of 9 non-critical fields missing: under the threshold.
    let outcome = filter_records(SourceDataset::Tmdb, vec![partial], today());
    assert_eq!(outcome.kept.len(), 1);
}

#[test]
fn future_release_rejected_for_budgets() {
    let mut upcoming = record("Announced", Some(2025));
    upcoming.release_date = NaiveDate::from_ymd_opt(2025, 12, 25);
    upcoming.budget = Some(50_000_000);
    upcoming.worldwide_gross = Some(1);
    let outcome = filter_records(SourceDataset::Budgets, vec![upcoming], today());
    assert_eq!(outcome.rejected.get(&RejectReason::FutureRelease), Some(&1));
}

#[test]
fn first_violated_rule_is_reported() {
    // Both critical-null and threshold violations apply; critical wins.
    let empty = record("", None);
    let outcome = filter_records(SourceDataset::Tmdb, vec![empty], today());
    assert_eq!(outcome.rejected.get(&RejectReason::CriticalNull), Some(&1));
    assert_eq!(outcome.rejected.len(), 1);
}

#[test]
fn kept_records_satisfy_range_invariant_after_augmentation() {
    let mut records = vec![
        full_record("A", 1994),
        full_record("B", 2020),
        full_record("C", 1850),
    ];
    let mut outcome = filter_records(SourceDataset::Tmdb, std::mem::take(&mut records), today());
    assign_decades(&mut outcome.kept);
    for record in &outcome.kept {
        let year = record.year.expect("kept records have a year");
        assert!((1880..=2025).contains(&year));
        assert_eq!(record.decade, Some(year - year % 10));
    }
    assert_eq!(outcome.kept.len(), 2);
}
