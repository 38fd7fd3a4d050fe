//! Pipeline orchestration with explicit stages.
//!
//! Per dataset: ingest -> normalize -> quality filter -> dedupe -> augment.
//! The three cleaned datasets then converge at entity resolution, followed
//! by schema construction. Record-level problems are dropped and counted;
//! the only fatal conditions are structural (a dataset folder or a required
//! column missing), raised before any table is handed to storage.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use tracing::{info, info_span};

use moviz_ingest::{RawTable, stack_dataset};
use moviz_model::{MovieTables, NormalizedRecord, RejectReason, SourceDataset};
use moviz_standards::{Standards, columns_for};

use crate::augment::assign_decades;
use crate::dedupe::dedupe_records;
use crate::normalize::normalize_table;
use crate::quality::filter_records;
use crate::resolve::{ResolutionStats, resolve_entities};
use crate::schema::build_schema;

/// Pipeline run configuration.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub tmdb_dir: PathBuf,
    pub genres_dir: PathBuf,
    pub budgets_dir: PathBuf,
    pub standards: Standards,
    /// Run date for the future-release cutoff.
    pub today: NaiveDate,
}

impl PipelineConfig {
    /// Conventional raw-data layout: `<root>/tmdb_movies`, `<root>/genres`,
    /// `<root>/budgets`.
    pub fn from_data_root(root: &Path, today: NaiveDate) -> Self {
        Self {
            tmdb_dir: root.join("tmdb_movies"),
            genres_dir: root.join("genres"),
            budgets_dir: root.join("budgets"),
            standards: Standards::default(),
            today,
        }
    }

    fn dir_for(&self, dataset: SourceDataset) -> &Path {
        match dataset {
            SourceDataset::Tmdb => &self.tmdb_dir,
            SourceDataset::Genres => &self.genres_dir,
            SourceDataset::Budgets => &self.budgets_dir,
        }
    }
}

/// Per-dataset cleaning counters.
#[derive(Debug, Default, Clone)]
pub struct DatasetStats {
    pub input_rows: usize,
    pub malformed: usize,
    pub rejected: BTreeMap<RejectReason, usize>,
    pub duplicates_removed: usize,
    pub kept: usize,
}

impl DatasetStats {
    /// Quality rejections only; malformed rows are counted separately.
    pub fn rejected_total(&self) -> usize {
        self.rejected.values().sum()
    }
}

#[derive(Debug, Default)]
pub struct PipelineResult {
    pub tables: MovieTables,
    pub datasets: BTreeMap<SourceDataset, DatasetStats>,
    pub resolution: ResolutionStats,
}

/// Verify a stacked dataset carries every structurally required column.
fn check_required_columns(dataset: SourceDataset, table: &RawTable) -> Result<()> {
    let lookup = table.lookup();
    for spec in columns_for(dataset).required_specs() {
        if lookup.index_of_any(spec.sources).is_none() {
            bail!(
                "dataset {} is missing a required column for {} (expected one of: {})",
                dataset.as_str(),
                spec.field,
                spec.sources.join(", ")
            );
        }
    }
    Ok(())
}

/// Run ingest through augmentation for one dataset.
fn clean_dataset(
    config: &PipelineConfig,
    dataset: SourceDataset,
) -> Result<(Vec<NormalizedRecord>, DatasetStats)> {
    let span = info_span!("clean_dataset", dataset = dataset.as_str());
    let _guard = span.enter();
    let start = Instant::now();

    let table = stack_dataset(config.dir_for(dataset))
        .with_context(|| format!("ingest {} dataset", dataset.as_str()))?;
    check_required_columns(dataset, &table)?;
    let input_rows = table.rows.len();

    let normalized = normalize_table(dataset, &table, &config.standards);
    let filtered = filter_records(dataset, normalized.records, config.today);
    let deduped = dedupe_records(dataset, filtered.kept);
    let duplicates_removed = deduped.removed_total();
    let mut records = deduped.kept;
    assign_decades(&mut records);

    let stats = DatasetStats {
        input_rows,
        malformed: normalized.malformed,
        rejected: filtered.rejected,
        duplicates_removed,
        kept: records.len(),
    };
    info!(
        dataset = dataset.as_str(),
        input_rows,
        malformed = stats.malformed,
        rejected = stats.rejected_total(),
        duplicates_removed = stats.duplicates_removed,
        kept = stats.kept,
        duration_ms = start.elapsed().as_millis() as u64,
        "dataset cleaned"
    );
    Ok((records, stats))
}

/// Execute the full pipeline and return the three relational tables with
/// run statistics. No output is written here; the caller hands the tables
/// to the storage layer as one atomic set.
pub fn run_pipeline(config: &PipelineConfig) -> Result<PipelineResult> {
    let run_start = Instant::now();
    let mut datasets = BTreeMap::new();

    let (metadata, tmdb_stats) = clean_dataset(config, SourceDataset::Tmdb)?;
    datasets.insert(SourceDataset::Tmdb, tmdb_stats);
    let (genre_records, genres_stats) = clean_dataset(config, SourceDataset::Genres)?;
    datasets.insert(SourceDataset::Genres, genres_stats);
    let (financial, budgets_stats) = clean_dataset(config, SourceDataset::Budgets)?;
    datasets.insert(SourceDataset::Budgets, budgets_stats);

    let resolution = {
        let span = info_span!("resolve");
        let _guard = span.enter();
        let start = Instant::now();
        let resolution = resolve_entities(&metadata, &genre_records, &financial);
        info!(
            movies = resolution.stats.movies,
            matched_both = resolution.stats.matched_both,
            metadata_only = resolution.stats.metadata_only,
            genres_only = resolution.stats.genres_only,
            financial_matched = resolution.stats.financial_matched,
            financial_unmatched = resolution.stats.financial_unmatched,
            fallback_collisions = resolution.stats.fallback_collisions,
            duration_ms = start.elapsed().as_millis() as u64,
            "entities resolved"
        );
        resolution
    };

    let schema = {
        let span = info_span!("schema");
        let _guard = span.enter();
        build_schema(&resolution.movies)
    };

    let tables = MovieTables {
        movies: resolution.movies,
        genres: schema.genres,
        movie_genres: schema.movie_genres,
    };
    info!(
        movies = tables.movies.len(),
        genres = tables.genres.len(),
        movie_genres = tables.movie_genres.len(),
        duration_ms = run_start.elapsed().as_millis() as u64,
        "pipeline complete"
    );

    Ok(PipelineResult {
        tables,
        datasets,
        resolution: resolution.stats,
    })
}
