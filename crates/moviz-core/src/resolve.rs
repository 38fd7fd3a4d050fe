//! Cross-dataset entity resolution.
//!
//! Reconciles the three cleaned record sets into one Movie per real-world
//! film. The metadata and genre catalogs share a native identifier; the
//! financial catalog matches purely on the fallback key, metadata-derived
//! movies first. Matching is deterministic: an ambiguous fallback key
//! resolves to the first candidate in stable input order, logged, never
//! scored.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use moviz_model::{Movie, NormalizedRecord, Provenance};

use crate::augment::decade_of;

type FallbackKey = (String, i32);

#[derive(Debug, Default, Clone, Copy)]
pub struct ResolutionStats {
    pub movies: usize,
    /// Movies backed by both the metadata and genre catalogs.
    pub matched_both: usize,
    pub metadata_only: usize,
    pub genres_only: usize,
    pub financial_matched: usize,
    /// Financial records matching no movie; dropped from the model since a
    /// Movie identity requires metadata or genre-catalog presence.
    pub financial_unmatched: usize,
    pub fallback_collisions: usize,
}

#[derive(Debug, Default)]
pub struct Resolution {
    pub movies: Vec<Movie>,
    pub stats: ResolutionStats,
}

fn index_by_id(records: &[NormalizedRecord]) -> BTreeMap<String, Vec<usize>> {
    let mut index: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for (idx, record) in records.iter().enumerate() {
        if let Some(id) = record.raw_id.as_deref() {
            let trimmed = id.trim();
            if !trimmed.is_empty() {
                index.entry(trimmed.to_string()).or_default().push(idx);
            }
        }
    }
    index
}

fn index_by_key(records: &[NormalizedRecord]) -> BTreeMap<FallbackKey, Vec<usize>> {
    let mut index: BTreeMap<FallbackKey, Vec<usize>> = BTreeMap::new();
    for (idx, record) in records.iter().enumerate() {
        if let Some(key) = record.fallback_key() {
            index.entry(key).or_default().push(idx);
        }
    }
    index
}

/// First candidate in stable input order; logs and counts the collision
/// when the key is ambiguous.
fn first_candidate(
    candidates: &[usize],
    key: &FallbackKey,
    stats: &mut ResolutionStats,
) -> Option<usize> {
    if candidates.len() > 1 {
        stats.fallback_collisions += 1;
        warn!(
            normalized_title = %key.0,
            year = key.1,
            candidates = candidates.len(),
            "ambiguous fallback match; keeping first candidate"
        );
    }
    candidates.first().copied()
}

/// Combine a primary record with an optional secondary into a Movie.
/// Primary values win field-by-field; genre labels are unioned in order.
fn merge_movie(
    movie_id: i64,
    primary: &NormalizedRecord,
    secondary: Option<&NormalizedRecord>,
    provenance: Provenance,
) -> Movie {
    // Quality filtering guarantees a year on every record that reaches
    // resolution.
    let year = primary.year.unwrap_or_default();
    let mut genre_labels = primary.genres.clone();
    if let Some(other) = secondary {
        for label in &other.genres {
            if !genre_labels.contains(label) {
                genre_labels.push(label.clone());
            }
        }
    }
    let pick = |a: Option<i64>, b: Option<i64>| a.or(b);
    Movie {
        movie_id,
        title: primary.title.clone(),
        normalized_title: primary.normalized_title.clone(),
        year,
        decade: primary.decade.unwrap_or_else(|| decade_of(year)),
        certificate: primary
            .certificate
            .or_else(|| secondary.and_then(|r| r.certificate)),
        rating: primary.rating.or_else(|| secondary.and_then(|r| r.rating)),
        votes: pick(primary.votes, secondary.and_then(|r| r.votes)),
        runtime: pick(primary.runtime, secondary.and_then(|r| r.runtime)),
        budget: pick(primary.budget, secondary.and_then(|r| r.budget)),
        domestic_gross: pick(
            primary.domestic_gross,
            secondary.and_then(|r| r.domestic_gross),
        ),
        worldwide_gross: pick(
            primary.worldwide_gross,
            secondary.and_then(|r| r.worldwide_gross),
        ),
        description: primary
            .description
            .clone()
            .or_else(|| secondary.and_then(|r| r.description.clone())),
        genre_labels,
        provenance,
    }
}

/// Resolve the three cleaned datasets into Movie entities.
pub fn resolve_entities(
    metadata: &[NormalizedRecord],
    genre_records: &[NormalizedRecord],
    financial: &[NormalizedRecord],
) -> Resolution {
    let mut stats = ResolutionStats::default();
    let mut movies: Vec<Movie> = Vec::with_capacity(metadata.len() + genre_records.len());

    let genre_by_id = index_by_id(genre_records);
    let genre_by_key = index_by_key(genre_records);
    let mut claimed = vec![false; genre_records.len()];

    // Primary merge: metadata rows drive; id match first, fallback key
    // otherwise. One-sided rows survive with partial provenance.
    for record in metadata {
        let partner = record
            .raw_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .and_then(|id| genre_by_id.get(id))
            .and_then(|candidates| candidates.first().copied())
            .or_else(|| {
                let key = record.fallback_key()?;
                let candidates = genre_by_key.get(&key)?;
                first_candidate(candidates, &key, &mut stats)
            });
        let movie_id = movies.len() as i64 + 1;
        match partner {
            Some(gidx) => {
                claimed[gidx] = true;
                stats.matched_both += 1;
                movies.push(merge_movie(
                    movie_id,
                    record,
                    Some(&genre_records[gidx]),
                    Provenance {
                        metadata: true,
                        genres: true,
                        financial: false,
                    },
                ));
            }
            None => {
                stats.metadata_only += 1;
                movies.push(merge_movie(
                    movie_id,
                    record,
                    None,
                    Provenance {
                        metadata: true,
                        genres: false,
                        financial: false,
                    },
                ));
            }
        }
    }

    // Genre rows with no metadata counterpart become movies of their own.
    for (gidx, record) in genre_records.iter().enumerate() {
        if claimed[gidx] {
            continue;
        }
        let movie_id = movies.len() as i64 + 1;
        stats.genres_only += 1;
        movies.push(merge_movie(
            movie_id,
            record,
            None,
            Provenance {
                metadata: false,
                genres: true,
                financial: false,
            },
        ));
    }

    // Financial augmentation: fallback key only, metadata-derived movies
    // take priority over genre-only movies.
    let mut metadata_by_key: BTreeMap<FallbackKey, Vec<usize>> = BTreeMap::new();
    let mut genre_only_by_key: BTreeMap<FallbackKey, Vec<usize>> = BTreeMap::new();
    for (idx, movie) in movies.iter().enumerate() {
        let key = (movie.normalized_title.clone(), movie.year);
        if movie.provenance.metadata {
            metadata_by_key.entry(key).or_default().push(idx);
        } else {
            genre_only_by_key.entry(key).or_default().push(idx);
        }
    }

    for record in financial {
        let Some(key) = record.fallback_key() else {
            stats.financial_unmatched += 1;
            continue;
        };
        let target = metadata_by_key
            .get(&key)
            .and_then(|candidates| first_candidate(candidates, &key, &mut stats))
            .or_else(|| {
                genre_only_by_key
                    .get(&key)
                    .and_then(|candidates| first_candidate(candidates, &key, &mut stats))
            });
        match target {
            Some(idx) => {
                let movie = &mut movies[idx];
                movie.budget = movie.budget.or(record.budget);
                movie.domestic_gross = movie.domestic_gross.or(record.domestic_gross);
                movie.worldwide_gross = movie.worldwide_gross.or(record.worldwide_gross);
                movie.provenance.financial = true;
                stats.financial_matched += 1;
            }
            None => {
                stats.financial_unmatched += 1;
                debug!(
                    normalized_title = %key.0,
                    year = key.1,
                    "financial record matched no movie"
                );
            }
        }
    }

    stats.movies = movies.len();
    Resolution { movies, stats }
}
