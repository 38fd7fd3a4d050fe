//! Output generation for the normalized movie tables.
//!
//! Currently a single format: three CSV files (`movies.csv`, `genres.csv`,
//! `movie_genres.csv`) written with staging-then-swap semantics so a failed
//! run never leaves a partial table set behind.

mod csv_tables;

pub use csv_tables::{OutputPaths, write_table_outputs};
