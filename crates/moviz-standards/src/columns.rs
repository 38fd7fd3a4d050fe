//! Per-dataset column maps and quality policies.
//!
//! The three source catalogs name their columns differently; each dataset
//! gets a declarative map from canonical field name to accepted source
//! column spellings. The quality filter consumes an equally declarative
//! critical/non-critical classification instead of per-dataset branches.

use moviz_model::record::SourceDataset;

/// One canonical field and the source column spellings that feed it.
/// Source names are matched case-insensitively by the ingest layer.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub field: &'static str,
    pub sources: &'static [&'static str],
    /// Structural requirement: a dataset missing this column entirely
    /// aborts the run before any table is written.
    pub required: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct DatasetColumns {
    pub dataset: SourceDataset,
    pub specs: &'static [ColumnSpec],
}

impl DatasetColumns {
    pub fn spec(&self, field: &str) -> Option<&ColumnSpec> {
        self.specs.iter().find(|spec| spec.field == field)
    }

    pub fn required_specs(&self) -> impl Iterator<Item = &ColumnSpec> {
        self.specs.iter().filter(|spec| spec.required)
    }
}

const TMDB_COLUMNS: DatasetColumns = DatasetColumns {
    dataset: SourceDataset::Tmdb,
    specs: &[
        ColumnSpec { field: "raw_id", sources: &["imdb_id"], required: false },
        ColumnSpec { field: "title", sources: &["title"], required: true },
        ColumnSpec { field: "release_date", sources: &["release_date"], required: true },
        ColumnSpec { field: "rating", sources: &["vote_average"], required: false },
        ColumnSpec { field: "votes", sources: &["vote_count"], required: false },
        ColumnSpec { field: "runtime", sources: &["runtime"], required: false },
        ColumnSpec { field: "genres", sources: &["genres"], required: false },
        ColumnSpec { field: "budget", sources: &["budget"], required: false },
        ColumnSpec { field: "worldwide_gross", sources: &["revenue"], required: false },
        ColumnSpec { field: "description", sources: &["overview"], required: false },
        ColumnSpec { field: "adult", sources: &["adult"], required: false },
        ColumnSpec { field: "status", sources: &["status"], required: false },
    ],
};

const GENRES_COLUMNS: DatasetColumns = DatasetColumns {
    dataset: SourceDataset::Genres,
    specs: &[
        ColumnSpec { field: "raw_id", sources: &["movie_id"], required: false },
        ColumnSpec { field: "title", sources: &["movie_name"], required: true },
        ColumnSpec { field: "year", sources: &["year"], required: true },
        ColumnSpec { field: "certificate", sources: &["certificate"], required: false },
        ColumnSpec { field: "runtime", sources: &["runtime"], required: false },
        ColumnSpec { field: "genres", sources: &["genre"], required: false },
        ColumnSpec { field: "description", sources: &["description"], required: false },
        ColumnSpec { field: "rating", sources: &["rating"], required: false },
        ColumnSpec { field: "votes", sources: &["votes"], required: false },
        ColumnSpec { field: "worldwide_gross", sources: &["gross(in $)"], required: false },
    ],
};

const BUDGETS_COLUMNS: DatasetColumns = DatasetColumns {
    dataset: SourceDataset::Budgets,
    specs: &[
        ColumnSpec { field: "title", sources: &["Movie"], required: true },
        ColumnSpec { field: "release_date", sources: &["Release Date"], required: true },
        ColumnSpec { field: "budget", sources: &["Production Budget"], required: false },
        ColumnSpec { field: "domestic_gross", sources: &["Domestic Gross"], required: false },
        ColumnSpec { field: "worldwide_gross", sources: &["Worldwide Gross"], required: false },
    ],
};

pub fn columns_for(dataset: SourceDataset) -> &'static DatasetColumns {
    match dataset {
        SourceDataset::Tmdb => &TMDB_COLUMNS,
        SourceDataset::Genres => &GENRES_COLUMNS,
        SourceDataset::Budgets => &BUDGETS_COLUMNS,
    }
}

/// Fraction of non-critical fields a record may lose before rejection.
pub const MISSINGNESS_THRESHOLD: f64 = 0.8;

/// Critical/non-critical classification for one dataset. Critical fields
/// must be present on every record; non-critical fields tolerate absence up
/// to [`MISSINGNESS_THRESHOLD`].
#[derive(Debug, Clone, Copy)]
pub struct ColumnPolicy {
    pub dataset: SourceDataset,
    pub critical: &'static [&'static str],
    pub non_critical: &'static [&'static str],
    pub threshold: f64,
}

const TMDB_POLICY: ColumnPolicy = ColumnPolicy {
    dataset: SourceDataset::Tmdb,
    critical: &["title", "year"],
    non_critical: &[
        "raw_id",
        "release_date",
        "rating",
        "votes",
        "runtime",
        "genres",
        "budget",
        "worldwide_gross",
        "description",
    ],
    threshold: MISSINGNESS_THRESHOLD,
};

const GENRES_POLICY: ColumnPolicy = ColumnPolicy {
    dataset: SourceDataset::Genres,
    critical: &["title", "year"],
    non_critical: &[
        "raw_id",
        "certificate",
        "runtime",
        "genres",
        "description",
        "rating",
        "votes",
        "worldwide_gross",
    ],
    threshold: MISSINGNESS_THRESHOLD,
};

const BUDGETS_POLICY: ColumnPolicy = ColumnPolicy {
    dataset: SourceDataset::Budgets,
    critical: &["title", "year"],
    non_critical: &[
        "release_date",
        "budget",
        "domestic_gross",
        "worldwide_gross",
    ],
    threshold: MISSINGNESS_THRESHOLD,
};

pub fn policy_for(dataset: SourceDataset) -> &'static ColumnPolicy {
    match dataset {
        SourceDataset::Tmdb => &TMDB_POLICY,
        SourceDataset::Genres => &GENRES_POLICY,
        SourceDataset::Budgets => &BUDGETS_POLICY,
    }
}
