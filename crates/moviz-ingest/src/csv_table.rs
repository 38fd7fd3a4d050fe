//! Raw CSV reading.
//!
//! A [`RawTable`] is the untyped, ephemeral representation of one source
//! dataset: trimmed headers and trimmed string cells. It exists only long
//! enough for the normalizer to turn rows into typed records.

use std::collections::BTreeMap;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn lookup(&self) -> ColumnLookup {
        ColumnLookup::new(&self.headers)
    }
}

/// Case-insensitive header name to column index map.
#[derive(Debug, Clone)]
pub struct ColumnLookup {
    by_name: BTreeMap<String, usize>,
}

impl ColumnLookup {
    pub fn new(headers: &[String]) -> Self {
        let mut by_name = BTreeMap::new();
        for (idx, header) in headers.iter().enumerate() {
            // First occurrence wins on duplicate headers.
            by_name.entry(header.to_lowercase()).or_insert(idx);
        }
        Self { by_name }
    }

    pub fn index(&self, name: &str) -> Option<usize> {
        self.by_name.get(&name.to_lowercase()).copied()
    }

    /// First matching index among several accepted spellings.
    pub fn index_of_any(&self, names: &[&str]) -> Option<usize> {
        names.iter().find_map(|name| self.index(name))
    }

    /// Trimmed cell value for a column, or `""` when the column is absent
    /// or the row is short.
    pub fn value<'a>(&self, row: &'a [String], name: &str) -> &'a str {
        self.index(name)
            .and_then(|idx| row.get(idx))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn value_of_any<'a>(&self, row: &'a [String], names: &[&str]) -> &'a str {
        self.index_of_any(names)
            .and_then(|idx| row.get(idx))
            .map(String::as_str)
            .unwrap_or("")
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read one CSV file into a [`RawTable`].
///
/// The first record is the header row. Rows are padded or truncated to the
/// header width; fully blank rows are skipped.
pub fn read_csv_table(path: &Path) -> Result<RawTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| IngestError::Csv {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    let mut headers: Vec<String> = Vec::new();
    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::Csv {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        if headers.is_empty() {
            headers = record.iter().map(normalize_header).collect();
            continue;
        }
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            let value = record.get(idx).unwrap_or("");
            row.push(normalize_cell(value));
        }
        rows.push(row);
    }
    Ok(RawTable { headers, rows })
}
