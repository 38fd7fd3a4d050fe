//! Tests for CSV reading and dataset stacking.

use std::fs;

use moviz_ingest::{IngestError, list_csv_files, read_csv_table, stack_dataset};

fn write_file(dir: &std::path::Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

#[test]
fn reads_headers_and_trims_cells() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_file(
        dir.path(),
        "movies.csv",
        "title, release_date ,vote_average\n  The Matrix ,1999-03-31, 8.2 \n",
    );
    let table = read_csv_table(&path).expect("read table");
    assert_eq!(table.headers, vec!["title", "release_date", "vote_average"]);
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0], vec!["The Matrix", "1999-03-31", "8.2"]);
}

#[test]
fn strips_bom_and_skips_blank_rows() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_file(
        dir.path(),
        "movies.csv",
        "\u{feff}title,year\nAvatar,2009\n,\nInception,2010\n",
    );
    let table = read_csv_table(&path).expect("read table");
    assert_eq!(table.headers[0], "title");
    assert_eq!(table.rows.len(), 2);
}

#[test]
fn pads_short_rows_to_header_width() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_file(dir.path(), "movies.csv", "title,year,rating\nAvatar,2009\n");
    let table = read_csv_table(&path).expect("read table");
    assert_eq!(table.rows[0], vec!["Avatar", "2009", ""]);
}

#[test]
fn column_lookup_is_case_insensitive() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_file(dir.path(), "movies.csv", "Movie,Release Date\nAvatar,2009\n");
    let table = read_csv_table(&path).expect("read table");
    let lookup = table.lookup();
    assert_eq!(lookup.value(&table.rows[0], "movie"), "Avatar");
    assert_eq!(lookup.value_of_any(&table.rows[0], &["release date"]), "2009");
    assert_eq!(lookup.value(&table.rows[0], "missing"), "");
}

#[test]
fn stacks_files_with_reordered_columns() {
    let dir = tempfile::tempdir().expect("tempdir");
    write_file(dir.path(), "a.csv", "title,year\nAvatar,2009\n");
    write_file(dir.path(), "b.csv", "year,title,rating\n2010,Inception,8.8\n");
    let table = stack_dataset(dir.path()).expect("stack dataset");
    assert_eq!(table.headers, vec!["title", "year", "rating"]);
    assert_eq!(table.rows.len(), 2);
    let lookup = table.lookup();
    assert_eq!(lookup.value(&table.rows[0], "title"), "Avatar");
    assert_eq!(lookup.value(&table.rows[0], "rating"), "");
    assert_eq!(lookup.value(&table.rows[1], "title"), "Inception");
    assert_eq!(lookup.value(&table.rows[1], "rating"), "8.8");
}

#[test]
fn missing_directory_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("nope");
    assert!(matches!(
        list_csv_files(&missing),
        Err(IngestError::DirectoryNotFound { .. })
    ));
}

#[test]
fn empty_dataset_folder_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    assert!(matches!(
        stack_dataset(dir.path()),
        Err(IngestError::EmptyDataset { .. })
    ));
}
