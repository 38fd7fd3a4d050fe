use std::collections::BTreeMap;
use std::path::PathBuf;

use moviz_core::{DatasetStats, ResolutionStats};
use moviz_model::SourceDataset;
use moviz_output::OutputPaths;

/// Result of a `process` run, rendered by the end-of-run summary.
#[derive(Debug)]
pub struct ProcessResult {
    pub output_dir: PathBuf,
    pub dry_run: bool,
    pub datasets: BTreeMap<SourceDataset, DatasetStats>,
    pub resolution: ResolutionStats,
    pub movies: usize,
    pub genres: usize,
    pub movie_genres: usize,
    /// Written table paths; `None` on a dry run.
    pub outputs: Option<OutputPaths>,
}
