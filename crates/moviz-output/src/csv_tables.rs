//! CSV emission for the relational movie tables.
//!
//! All three tables are written into a staging directory next to the final
//! destination and moved into place in one rename. A run that fails partway
//! leaves the previous output untouched and removes its staging directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use moviz_model::{Genre, Movie, MovieGenre, MovieTables};

const STAGING_SUFFIX: &str = ".staging";

/// Paths of the three table files after a successful swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub movies: PathBuf,
    pub genres: PathBuf,
    pub movie_genres: PathBuf,
}

/// Write `movies.csv`, `genres.csv` and `movie_genres.csv` under `output_dir`.
///
/// The destination directory is replaced atomically: either all three files
/// appear together or the previous contents remain.
pub fn write_table_outputs(output_dir: &Path, tables: &MovieTables) -> Result<OutputPaths> {
    let staging = staging_dir(output_dir)?;
    if staging.exists() {
        fs::remove_dir_all(&staging)
            .with_context(|| format!("remove stale staging dir {}", staging.display()))?;
    }
    fs::create_dir_all(&staging)
        .with_context(|| format!("create staging dir {}", staging.display()))?;

    if let Err(error) = write_into(&staging, tables).and_then(|()| swap(&staging, output_dir)) {
        // Best effort; the original error is the one worth reporting.
        let _ = fs::remove_dir_all(&staging);
        return Err(error);
    }

    info!(
        output_dir = %output_dir.display(),
        movies = tables.movies.len(),
        genres = tables.genres.len(),
        movie_genres = tables.movie_genres.len(),
        "tables written"
    );
    Ok(OutputPaths {
        movies: output_dir.join("movies.csv"),
        genres: output_dir.join("genres.csv"),
        movie_genres: output_dir.join("movie_genres.csv"),
    })
}

fn staging_dir(output_dir: &Path) -> Result<PathBuf> {
    let name = output_dir
        .file_name()
        .with_context(|| format!("output dir {} has no name", output_dir.display()))?;
    let mut staged = name.to_os_string();
    staged.push(STAGING_SUFFIX);
    Ok(match output_dir.parent() {
        Some(parent) => parent.join(staged),
        None => PathBuf::from(staged),
    })
}

fn swap(staging: &Path, output_dir: &Path) -> Result<()> {
    if output_dir.exists() {
        fs::remove_dir_all(output_dir)
            .with_context(|| format!("replace output dir {}", output_dir.display()))?;
    }
    fs::rename(staging, output_dir).with_context(|| {
        format!(
            "move staged tables {} -> {}",
            staging.display(),
            output_dir.display()
        )
    })
}

fn write_into(dir: &Path, tables: &MovieTables) -> Result<()> {
    write_movies(&dir.join("movies.csv"), &tables.movies)?;
    write_genres(&dir.join("genres.csv"), &tables.genres)?;
    write_movie_genres(&dir.join("movie_genres.csv"), &tables.movie_genres)?;
    Ok(())
}

fn write_movies(path: &Path, movies: &[Movie]) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;
    writer.write_record([
        "movie_id",
        "title",
        "year",
        "decade",
        "certificate",
        "rating",
        "votes",
        "runtime",
        "budget",
        "domestic_gross",
        "worldwide_gross",
        "description",
    ])?;
    for movie in movies {
        writer.write_record([
            movie.movie_id.to_string(),
            movie.title.clone(),
            movie.year.to_string(),
            movie.decade.to_string(),
            movie
                .certificate
                .map(|c| c.as_str().to_string())
                .unwrap_or_default(),
            opt_field(movie.rating),
            opt_field(movie.votes),
            opt_field(movie.runtime),
            opt_field(movie.budget),
            opt_field(movie.domestic_gross),
            opt_field(movie.worldwide_gross),
            movie.description.clone().unwrap_or_default(),
        ])?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    debug!(path = %path.display(), rows = movies.len(), "movies table staged");
    Ok(())
}

fn write_genres(path: &Path, genres: &[Genre]) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;
    writer.write_record(["genre_id", "name"])?;
    for genre in genres {
        writer.write_record([genre.genre_id.to_string(), genre.name.clone()])?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    debug!(path = %path.display(), rows = genres.len(), "genres table staged");
    Ok(())
}

fn write_movie_genres(path: &Path, associations: &[MovieGenre]) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;
    writer.write_record(["movie_id", "genre_id"])?;
    for association in associations {
        writer.write_record([
            association.movie_id.to_string(),
            association.genre_id.to_string(),
        ])?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    debug!(path = %path.display(), rows = associations.len(), "associations table staged");
    Ok(())
}

fn opt_field<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
