//! Field-level normalization.
//!
//! Turns untyped source rows into [`NormalizedRecord`]s with unified column
//! names. Title normalization is a single shared function across all three
//! datasets; fallback-key matching is only valid because of that.

use chrono::NaiveDate;
use tracing::trace;

use moviz_ingest::{ColumnLookup, RawTable};
use moviz_model::{MAX_YEAR, MIN_YEAR, NormalizedRecord, RejectReason, SourceDataset};
use moviz_standards::{Standards, columns_for};

/// Normalize a title for fallback-key matching: lowercase, punctuation and
/// special characters mapped to spaces, whitespace runs collapsed, trimmed.
///
/// Idempotent: normalizing an already-normalized title is a no-op.
pub fn normalize_title(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut pending_space = false;
    for ch in title.chars() {
        if ch.is_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.extend(ch.to_lowercase());
        } else {
            pending_space = true;
        }
    }
    out
}

/// Extract a release year from a heterogeneous date representation: a full
/// date, a bare year, or a year-range string ("2010-2012", "(2019)").
///
/// Prefers the first standalone 4-digit token inside the valid range and
/// falls back to the first 4-digit token found, so out-of-range years reach
/// the quality filter instead of vanishing here.
pub fn extract_year(value: &str) -> Option<i32> {
    let mut first: Option<i32> = None;
    let bytes = value.as_bytes();
    let mut idx = 0;
    while idx < bytes.len() {
        if !bytes[idx].is_ascii_digit() {
            idx += 1;
            continue;
        }
        let start = idx;
        while idx < bytes.len() && bytes[idx].is_ascii_digit() {
            idx += 1;
        }
        if idx - start == 4 {
            let year: i32 = value[start..idx].parse().ok()?;
            if (MIN_YEAR..=MAX_YEAR).contains(&year) {
                return Some(year);
            }
            if first.is_none() {
                first = Some(year);
            }
        }
    }
    first
}

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%b %d, %Y", "%B %d, %Y"];

/// Parse a full calendar date from the formats seen across the catalogs.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

/// Parse a monetary amount, tolerating `$` signs, thousands separators, and
/// surrounding quotes. Zero amounts are treated as absent: the catalogs use
/// 0 for "unknown", and a zero budget would otherwise defeat the
/// missingness policy and financial fill-in.
pub fn parse_money(value: &str) -> Option<i64> {
    let cleaned: String = value
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '-')
        .collect();
    let amount: i64 = cleaned.parse().ok()?;
    if amount == 0 { None } else { Some(amount) }
}

fn parse_i64(value: &str) -> Option<i64> {
    let cleaned: String = value.chars().filter(|ch| !ch.eq(&',')).collect();
    let trimmed = cleaned.trim();
    trimmed
        .parse::<i64>()
        .ok()
        .or_else(|| trimmed.parse::<f64>().ok().map(|v| v as i64))
}

fn parse_f64(value: &str) -> Option<f64> {
    value.trim().parse().ok()
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn field_value<'a>(
    dataset: SourceDataset,
    lookup: &ColumnLookup,
    row: &'a [String],
    field: &str,
) -> &'a str {
    match columns_for(dataset).spec(field) {
        Some(spec) => lookup.value_of_any(row, spec.sources),
        None => "",
    }
}

/// Normalize one source row into a [`NormalizedRecord`].
///
/// Returns `Err(RejectReason::MalformedField)` when a date-bearing column is
/// non-empty but unparseable. An empty date column is not malformed; the
/// record surfaces later as a critical-null rejection.
pub fn normalize_row(
    dataset: SourceDataset,
    lookup: &ColumnLookup,
    row: &[String],
    standards: &Standards,
) -> Result<NormalizedRecord, RejectReason> {
    let title = field_value(dataset, lookup, row, "title").to_string();
    let normalized_title = normalize_title(&title);

    // Year extraction: the genres catalog carries a bare year column, the
    // other two carry a date column.
    let (year, release_date) = match dataset {
        SourceDataset::Genres => {
            let raw = field_value(dataset, lookup, row, "year");
            let year = extract_year(raw);
            if year.is_none() && !raw.trim().is_empty() {
                trace!(dataset = dataset.as_str(), value = raw, "unparseable year");
                return Err(RejectReason::MalformedField);
            }
            (year, None)
        }
        SourceDataset::Tmdb | SourceDataset::Budgets => {
            let raw = field_value(dataset, lookup, row, "release_date");
            let date = parse_date(raw);
            let year = date.map(|d| {
                use chrono::Datelike;
                d.year()
            });
            let year = year.or_else(|| extract_year(raw));
            if year.is_none() && !raw.trim().is_empty() {
                trace!(dataset = dataset.as_str(), value = raw, "unparseable date");
                return Err(RejectReason::MalformedField);
            }
            (year, date)
        }
    };

    let certificate = standards
        .certificates
        .lookup(field_value(dataset, lookup, row, "certificate"));
    let genres = standards
        .genres
        .split_and_canonicalize(field_value(dataset, lookup, row, "genres"));

    Ok(NormalizedRecord {
        raw_id: non_empty(field_value(dataset, lookup, row, "raw_id")),
        title,
        normalized_title,
        year,
        decade: None,
        release_date,
        rating: parse_f64(field_value(dataset, lookup, row, "rating")),
        votes: parse_i64(field_value(dataset, lookup, row, "votes")),
        runtime: parse_i64(field_value(dataset, lookup, row, "runtime")),
        certificate,
        genres,
        budget: parse_money(field_value(dataset, lookup, row, "budget")),
        domestic_gross: parse_money(field_value(dataset, lookup, row, "domestic_gross")),
        worldwide_gross: parse_money(field_value(dataset, lookup, row, "worldwide_gross")),
        description: non_empty(field_value(dataset, lookup, row, "description")),
        adult: parse_bool(field_value(dataset, lookup, row, "adult")),
        status: non_empty(field_value(dataset, lookup, row, "status")),
    })
}

/// Outcome of normalizing a full dataset table.
#[derive(Debug, Default)]
pub struct NormalizeOutcome {
    pub records: Vec<NormalizedRecord>,
    pub malformed: usize,
}

/// Normalize every row of a stacked dataset table. Malformed rows are
/// dropped and counted; they never abort the run.
pub fn normalize_table(
    dataset: SourceDataset,
    table: &RawTable,
    standards: &Standards,
) -> NormalizeOutcome {
    let lookup = table.lookup();
    let mut outcome = NormalizeOutcome::default();
    for row in &table.rows {
        match normalize_row(dataset, &lookup, row, standards) {
            Ok(record) => outcome.records.push(record),
            Err(_) => outcome.malformed += 1,
        }
    }
    outcome
}
