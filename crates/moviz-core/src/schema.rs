//! Genre lookup and movie-genre association construction.
//!
//! Genre identifiers are assigned in first-occurrence order over the movie
//! sequence, so identical input snapshots reproduce identical identifiers.
//! Association rows are only emitted after the genre table is final, which
//! enforces the referential invariant by construction.

use std::collections::{BTreeMap, BTreeSet};

use moviz_model::{Genre, Movie, MovieGenre};

#[derive(Debug, Default)]
pub struct GenreSchema {
    pub genres: Vec<Genre>,
    pub movie_genres: Vec<MovieGenre>,
}

pub fn build_schema(movies: &[Movie]) -> GenreSchema {
    // Pass 1: finalize the genre table.
    let mut ids_by_name: BTreeMap<String, i64> = BTreeMap::new();
    let mut genres: Vec<Genre> = Vec::new();
    for movie in movies {
        for label in &movie.genre_labels {
            if !ids_by_name.contains_key(label) {
                let genre_id = genres.len() as i64 + 1;
                ids_by_name.insert(label.clone(), genre_id);
                genres.push(Genre {
                    genre_id,
                    name: label.clone(),
                });
            }
        }
    }

    // Pass 2: association rows against the finalized table.
    let mut seen: BTreeSet<(i64, i64)> = BTreeSet::new();
    let mut movie_genres: Vec<MovieGenre> = Vec::new();
    for movie in movies {
        for label in &movie.genre_labels {
            let Some(&genre_id) = ids_by_name.get(label) else {
                continue;
            };
            if seen.insert((movie.movie_id, genre_id)) {
                movie_genres.push(MovieGenre {
                    movie_id: movie.movie_id,
                    genre_id,
                });
            }
        }
    }

    GenreSchema {
        genres,
        movie_genres,
    }
}
