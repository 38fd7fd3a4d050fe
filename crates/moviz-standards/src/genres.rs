//! Genre label canonicalization.
//!
//! Open vocabulary: a small alias table folds known spelling variants onto a
//! canonical name, and any label the table does not cover becomes its own
//! canonical entry (title-cased, trimmed). No label is ever rejected.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::StandardsError;

/// Alias spellings observed across the source catalogs. Keys are the
/// case-folded form of the raw label.
const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("sci-fi", "Science Fiction"),
    ("sci fi", "Science Fiction"),
    ("scifi", "Science Fiction"),
    ("science-fiction", "Science Fiction"),
    ("film noir", "Film-Noir"),
    ("film-noir", "Film-Noir"),
    ("tv movie", "TV Movie"),
    ("musical", "Music"),
    ("rom-com", "Romance"),
    ("kids", "Family"),
    ("docu", "Documentary"),
];

#[derive(Debug, Clone)]
pub struct GenreVocabulary {
    aliases: BTreeMap<String, String>,
}

impl Default for GenreVocabulary {
    fn default() -> Self {
        let aliases = DEFAULT_ALIASES
            .iter()
            .map(|(alias, canonical)| ((*alias).to_string(), (*canonical).to_string()))
            .collect();
        Self { aliases }
    }
}

impl GenreVocabulary {
    /// Canonicalize a single free-text genre label. Returns `None` for
    /// blank input.
    pub fn canonicalize(&self, raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        let folded = trimmed.to_lowercase();
        if let Some(canonical) = self.aliases.get(&folded) {
            return Some(canonical.clone());
        }
        Some(title_case(trimmed))
    }

    /// Split a comma-separated genre string and canonicalize each part,
    /// dropping blanks and exact repeats while preserving order.
    pub fn split_and_canonicalize(&self, raw: &str) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for part in raw.split(',') {
            let Some(canonical) = self.canonicalize(part) else {
                continue;
            };
            if !out.contains(&canonical) {
                out.push(canonical);
            }
        }
        out
    }

    /// Load aliases from a CSV with `alias,canonical` columns.
    pub fn load_csv(path: &Path) -> Result<Self, StandardsError> {
        let bytes = std::fs::read(path).map_err(|e| StandardsError::io(path, e))?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(bytes.as_slice());
        let mut aliases = BTreeMap::new();
        for row in reader.records() {
            let row = row.map_err(|e| StandardsError::csv(path, e.to_string()))?;
            let alias = row.get(0).map(str::trim).unwrap_or("");
            let canonical = row.get(1).map(str::trim).unwrap_or("");
            if alias.is_empty() || canonical.is_empty() {
                continue;
            }
            aliases.insert(alias.to_lowercase(), canonical.to_string());
        }
        Ok(Self { aliases })
    }
}

/// Title-case each whitespace-separated word, preserving interior hyphens
/// ("film-noir" -> "Film-Noir").
fn title_case(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut capitalize = true;
    for ch in label.chars() {
        if ch.is_whitespace() || ch == '-' {
            capitalize = true;
            out.push(ch);
        } else if capitalize {
            out.extend(ch.to_uppercase());
            capitalize = false;
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    // Collapse whitespace runs that survived trimming of the parts.
    let mut collapsed = String::with_capacity(out.len());
    let mut last_space = false;
    for ch in out.trim().chars() {
        if ch.is_whitespace() {
            if !last_space {
                collapsed.push(' ');
            }
            last_space = true;
        } else {
            collapsed.push(ch);
            last_space = false;
        }
    }
    collapsed
}
