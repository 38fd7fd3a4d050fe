//! Dataset folder discovery and stacking.
//!
//! Each source dataset arrives as a folder of one or more CSV snapshots.
//! All files in a folder are stacked into a single [`RawTable`], aligning
//! columns by case-insensitive header name so partial exports with column
//! reordering still combine correctly.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::csv_table::{ColumnLookup, RawTable, read_csv_table};
use crate::error::{IngestError, Result};

/// Lists all CSV files in a directory, sorted by filename for a stable
/// stacking order.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }
    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        if is_csv {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Load and stack every CSV file in a dataset folder into one table.
///
/// The stacked header set is the union of all file headers in
/// first-appearance order; cells missing from a given file are empty.
pub fn stack_dataset(dir: &Path) -> Result<RawTable> {
    let files = list_csv_files(dir)?;
    if files.is_empty() {
        return Err(IngestError::EmptyDataset {
            path: dir.to_path_buf(),
        });
    }
    let mut stacked = RawTable::default();
    for path in &files {
        let table = read_csv_table(path)?;
        debug!(
            file = %path.display(),
            rows = table.rows.len(),
            columns = table.headers.len(),
            "stacked csv file"
        );
        append_table(&mut stacked, table);
    }
    Ok(stacked)
}

fn append_table(stacked: &mut RawTable, table: RawTable) {
    if stacked.headers.is_empty() {
        *stacked = table;
        return;
    }
    let stacked_lookup = ColumnLookup::new(&stacked.headers);
    for header in &table.headers {
        if stacked_lookup.index(header).is_none()
            && !stacked
                .headers
                .iter()
                .any(|existing| existing.eq_ignore_ascii_case(header))
        {
            stacked.headers.push(header.clone());
        }
    }
    // Re-derive the lookup after any header extension.
    let stacked_lookup = ColumnLookup::new(&stacked.headers);
    let incoming_lookup = ColumnLookup::new(&table.headers);
    let width = stacked.headers.len();
    for row in table.rows {
        let mut aligned = vec![String::new(); width];
        for header in &table.headers {
            let Some(src_idx) = incoming_lookup.index(header) else {
                continue;
            };
            let Some(dst_idx) = stacked_lookup.index(header) else {
                continue;
            };
            if let Some(value) = row.get(src_idx) {
                aligned[dst_idx] = value.clone();
            }
        }
        stacked.rows.push(aligned);
    }
    // Pad earlier rows if the header set grew.
    for row in &mut stacked.rows {
        row.resize(width, String::new());
    }
}
