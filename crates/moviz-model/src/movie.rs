//! Resolved entities and the relational output tables.

use serde::{Deserialize, Serialize};

use crate::certificate::Certificate;

/// Which source catalogs contributed to a resolved [`Movie`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    pub metadata: bool,
    pub genres: bool,
    pub financial: bool,
}

/// One resolved film. Created by the entity resolver, immutable thereafter.
///
/// Financial fields are nullable by design: their presence depends entirely
/// on financial-catalog coverage, and consumers must treat absence as
/// legitimate, not as an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub movie_id: i64,
    pub title: String,
    pub normalized_title: String,
    pub year: i32,
    pub decade: i32,
    pub certificate: Option<Certificate>,
    pub rating: Option<f64>,
    pub votes: Option<i64>,
    pub runtime: Option<i64>,
    pub budget: Option<i64>,
    pub domestic_gross: Option<i64>,
    pub worldwide_gross: Option<i64>,
    pub description: Option<String>,
    /// Raw per-dataset genre labels; the schema builder turns these into
    /// genre and association rows.
    pub genre_labels: Vec<String>,
    pub provenance: Provenance,
}

/// Genre lookup row. Names are unique after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub genre_id: i64,
    pub name: String,
}

/// Movie-genre association row. The same pair never appears twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MovieGenre {
    pub movie_id: i64,
    pub genre_id: i64,
}

/// The complete relational output, handed to storage as one atomic set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieTables {
    pub movies: Vec<Movie>,
    pub genres: Vec<Genre>,
    pub movie_genres: Vec<MovieGenre>,
}
