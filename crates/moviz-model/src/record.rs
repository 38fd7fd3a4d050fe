//! Per-source canonical record representation.
//!
//! A [`NormalizedRecord`] is what a raw source row becomes after column-name
//! unification and field-level normalization. It is the currency of every
//! pipeline stage up to entity resolution.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::certificate::Certificate;

/// Valid release-year range. Rows outside it are rejected, never clamped.
pub const MIN_YEAR: i32 = 1880;
pub const MAX_YEAR: i32 = 2025;

/// The three source catalogs the pipeline reconciles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SourceDataset {
    /// TMDB metadata catalog (largest coverage, carries IMDb ids).
    Tmdb,
    /// IMDb genre/certificate catalog (carries IMDb ids).
    Genres,
    /// Financial records catalog (no cross-dataset identifier).
    Budgets,
}

impl SourceDataset {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tmdb => "tmdb",
            Self::Genres => "genres",
            Self::Budgets => "budgets",
        }
    }
}

/// Canonical per-source record with unified field names.
///
/// `normalized_title` is a pure function of `title`; `decade` is a pure
/// function of `year` and is filled in by the augmentation stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    /// Source-native identifier (IMDb id); absent for the budgets catalog.
    pub raw_id: Option<String>,
    /// Title in original case.
    pub title: String,
    /// Lowercased, punctuation-stripped, whitespace-collapsed title.
    pub normalized_title: String,
    pub year: Option<i32>,
    pub decade: Option<i32>,
    pub release_date: Option<NaiveDate>,
    pub rating: Option<f64>,
    pub votes: Option<i64>,
    pub runtime: Option<i64>,
    pub certificate: Option<Certificate>,
    /// Canonicalized genre labels (may be empty).
    pub genres: Vec<String>,
    pub budget: Option<i64>,
    pub domestic_gross: Option<i64>,
    pub worldwide_gross: Option<i64>,
    pub description: Option<String>,
    /// TMDB adult-content flag.
    pub adult: Option<bool>,
    /// TMDB release status (e.g. "Released", "Post Production").
    pub status: Option<String>,
}

impl NormalizedRecord {
    /// Compound key used to match records lacking a shared native id.
    pub fn fallback_key(&self) -> Option<(String, i32)> {
        let year = self.year?;
        if self.normalized_title.is_empty() {
            return None;
        }
        Some((self.normalized_title.clone(), year))
    }

    /// Whether `year` is inside the accepted [`MIN_YEAR`]..=[`MAX_YEAR`] range.
    pub fn year_in_range(&self) -> bool {
        self.year.is_some_and(|y| (MIN_YEAR..=MAX_YEAR).contains(&y))
    }

    /// Null/empty test for a canonical field name, used by the declarative
    /// non-critical missingness policy.
    ///
    /// Unknown field names count as missing so a policy typo surfaces as an
    /// overly strict filter in tests rather than a silently ignored column.
    pub fn field_is_missing(&self, field: &str) -> bool {
        match field {
            "raw_id" => self.raw_id.as_deref().is_none_or(|v| v.trim().is_empty()),
            "title" => self.title.trim().is_empty(),
            "year" => self.year.is_none(),
            "release_date" => self.release_date.is_none(),
            "rating" => self.rating.is_none(),
            "votes" => self.votes.is_none(),
            "runtime" => self.runtime.is_none_or(|v| v == 0),
            "certificate" => self.certificate.is_none(),
            "genres" => self.genres.is_empty(),
            "budget" => self.budget.is_none_or(|v| v == 0),
            "domestic_gross" => self.domestic_gross.is_none_or(|v| v == 0),
            "worldwide_gross" => self.worldwide_gross.is_none_or(|v| v == 0),
            "description" => self
                .description
                .as_deref()
                .is_none_or(|v| v.trim().is_empty()),
            _ => true,
        }
    }
}
