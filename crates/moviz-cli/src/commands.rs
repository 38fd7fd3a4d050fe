use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Local;
use comfy_table::Table;
use tracing::{info, info_span};

use moviz_core::{PipelineConfig, run_pipeline};
use moviz_model::SourceDataset;
use moviz_output::write_table_outputs;
use moviz_standards::columns_for;

use crate::cli::ProcessArgs;
use crate::summary::apply_table_style;
use crate::types::ProcessResult;

/// Print the expected source datasets with their column contracts.
pub fn run_datasets() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Dataset", "Field", "Source columns", "Required"]);
    apply_table_style(&mut table);
    for dataset in [
        SourceDataset::Tmdb,
        SourceDataset::Genres,
        SourceDataset::Budgets,
    ] {
        for spec in columns_for(dataset).specs {
            table.add_row(vec![
                dataset.as_str().to_string(),
                spec.field.to_string(),
                spec.sources.join(", "),
                if spec.required { "yes" } else { "" }.to_string(),
            ]);
        }
    }
    println!("{table}");
    Ok(())
}

/// Run the full pipeline over a data folder and optionally write the tables.
pub fn run_process(args: &ProcessArgs) -> Result<ProcessResult> {
    let run_span = info_span!("process", data_folder = %args.data_folder.display());
    let _run_guard = run_span.enter();
    let start = Instant::now();

    let today = Local::now().date_naive();
    let mut config = PipelineConfig::from_data_root(&args.data_folder, today);
    if let Some(dir) = &args.tmdb_dir {
        config.tmdb_dir = dir.clone();
    }
    if let Some(dir) = &args.genres_dir {
        config.genres_dir = dir.clone();
    }
    if let Some(dir) = &args.budgets_dir {
        config.budgets_dir = dir.clone();
    }

    let result = run_pipeline(&config).context("run pipeline")?;

    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| args.data_folder.join("output"));
    let outputs = if args.dry_run {
        info!("dry run, tables not written");
        None
    } else {
        Some(write_table_outputs(&output_dir, &result.tables).context("write tables")?)
    };

    info!(
        duration_ms = start.elapsed().as_millis() as u64,
        movies = result.tables.movies.len(),
        "process complete"
    );
    Ok(ProcessResult {
        output_dir,
        dry_run: args.dry_run,
        datasets: result.datasets,
        resolution: result.resolution,
        movies: result.tables.movies.len(),
        genres: result.tables.genres.len(),
        movie_genres: result.tables.movie_genres.len(),
        outputs,
    })
}
