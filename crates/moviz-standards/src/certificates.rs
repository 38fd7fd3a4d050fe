//! Certificate remap table.
//!
//! Maps foreign and legacy rating labels (TV ratings, Indian UA tiers,
//! pre-1968 MPAA labels, video-game ratings) onto the fixed MPAA-equivalent
//! enumeration. Lookups are case-sensitive on the trimmed label, matching the
//! source catalogs' exact spellings; anything unmapped resolves to
//! [`Certificate::Unknown`].

use std::collections::BTreeMap;
use std::path::Path;

use moviz_model::Certificate;

use crate::error::StandardsError;

/// Built-in remap entries. Overridable from a two-column CSV via
/// [`CertificateMap::load_csv`].
const DEFAULT_ENTRIES: &[(&str, Certificate)] = &[
    // Rated G
    ("G", Certificate::G),
    ("TV-G", Certificate::G),
    ("U", Certificate::G),
    ("E", Certificate::G),
    ("E10+", Certificate::G),
    ("TV-Y", Certificate::G),
    // Rated PG
    ("PG", Certificate::Pg),
    ("TV-PG", Certificate::Pg),
    ("TV-Y7", Certificate::Pg),
    ("M", Certificate::Pg),
    ("UA", Certificate::Pg),
    ("M/PG", Certificate::Pg),
    ("Open", Certificate::Pg),
    ("UA 7+", Certificate::Pg),
    ("GP", Certificate::Pg),
    ("TV-Y7-FV", Certificate::Pg),
    // Rated PG-13
    ("PG-13", Certificate::Pg13),
    ("TV-14", Certificate::Pg13),
    ("13+", Certificate::Pg13),
    ("TV-13", Certificate::Pg13),
    ("UA 13+", Certificate::Pg13),
    ("13", Certificate::Pg13),
    // Rated R
    ("R", Certificate::R),
    ("TV-MA", Certificate::R),
    ("16", Certificate::R),
    ("16+", Certificate::R),
    ("18", Certificate::R),
    ("18+", Certificate::R),
    ("UA 16+", Certificate::R),
    ("MA-13", Certificate::R),
    ("MA-17", Certificate::R),
    // Rated NC-17
    ("NC-17", Certificate::Nc17),
    ("X", Certificate::Nc17),
    ("AO", Certificate::Nc17),
    // Pre-1968 and explicit unrated labels
    ("Approved", Certificate::Approved),
    ("Passed", Certificate::Passed),
    ("Unrated", Certificate::Unrated),
    ("Not Rated", Certificate::NotRated),
];

#[derive(Debug, Clone)]
pub struct CertificateMap {
    entries: BTreeMap<String, Certificate>,
}

impl Default for CertificateMap {
    fn default() -> Self {
        let entries = DEFAULT_ENTRIES
            .iter()
            .map(|(label, cert)| ((*label).to_string(), *cert))
            .collect();
        Self { entries }
    }
}

impl CertificateMap {
    /// Remap a raw certificate label. Unmapped labels pass through as
    /// [`Certificate::Unknown`]; empty input yields `None`.
    pub fn lookup(&self, raw: &str) -> Option<Certificate> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(
            self.entries
                .get(trimmed)
                .copied()
                .unwrap_or(Certificate::Unknown),
        )
    }

    /// Load a remap table from a CSV with `label,certificate` columns.
    ///
    /// Certificate values use the canonical output labels ("PG-13",
    /// "Not Rated", ...). Unknown target labels in the file are an error;
    /// unknown *source* labels at lookup time are not.
    pub fn load_csv(path: &Path) -> Result<Self, StandardsError> {
        let bytes = std::fs::read(path).map_err(|e| StandardsError::io(path, e))?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(bytes.as_slice());
        let mut entries = BTreeMap::new();
        for row in reader.records() {
            let row = row.map_err(|e| StandardsError::csv(path, e.to_string()))?;
            let label = row.get(0).map(str::trim).unwrap_or("");
            let target = row.get(1).map(str::trim).unwrap_or("");
            if label.is_empty() {
                continue;
            }
            let cert = parse_certificate(target).ok_or_else(|| {
                StandardsError::csv(path, format!("unknown certificate label: {target}"))
            })?;
            entries.insert(label.to_string(), cert);
        }
        Ok(Self { entries })
    }
}

fn parse_certificate(label: &str) -> Option<Certificate> {
    match label {
        "G" => Some(Certificate::G),
        "PG" => Some(Certificate::Pg),
        "PG-13" => Some(Certificate::Pg13),
        "R" => Some(Certificate::R),
        "NC-17" => Some(Certificate::Nc17),
        "Approved" => Some(Certificate::Approved),
        "Passed" => Some(Certificate::Passed),
        "Unrated" => Some(Certificate::Unrated),
        "Not Rated" => Some(Certificate::NotRated),
        "Unknown" => Some(Certificate::Unknown),
        _ => None,
    }
}
