//! Tests for genre/association table construction.

use std::collections::BTreeSet;

use moviz_core::build_schema;
use moviz_model::{Movie, Provenance};

fn movie(movie_id: i64, title: &str, year: i32, genres: &[&str]) -> Movie {
    Movie {
        movie_id,
        title: title.to_string(),
        normalized_title: title.to_lowercase(),
        year,
        decade: year - year % 10,
        certificate: None,
        rating: None,
        votes: None,
        runtime: None,
        budget: None,
        domestic_gross: None,
        worldwide_gross: None,
        description: None,
        genre_labels: genres.iter().map(|g| (*g).to_string()).collect(),
        provenance: Provenance {
            metadata: true,
            genres: false,
            financial: false,
        },
    }
}

#[test]
fn genre_ids_follow_first_occurrence_order() {
    let movies = vec![
        movie(1, "A", 2000, &["Drama", "Action"]),
        movie(2, "B", 2001, &["Action", "Comedy"]),
    ];
    let schema = build_schema(&movies);
    let names: Vec<&str> = schema.genres.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Drama", "Action", "Comedy"]);
    let ids: Vec<i64> = schema.genres.iter().map(|g| g.genre_id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn association_pairs_are_unique() {
    let movies = vec![movie(1, "A", 2000, &["Drama", "Drama", "Action"])];
    let schema = build_schema(&movies);
    assert_eq!(schema.movie_genres.len(), 2);
    let unique: BTreeSet<_> = schema
        .movie_genres
        .iter()
        .map(|mg| (mg.movie_id, mg.genre_id))
        .collect();
    assert_eq!(unique.len(), schema.movie_genres.len());
}

#[test]
fn referential_invariant_holds() {
    let movies = vec![
        movie(1, "A", 2000, &["Drama"]),
        movie(2, "B", 2001, &[]),
        movie(3, "C", 2002, &["Horror", "Thriller"]),
    ];
    let schema = build_schema(&movies);
    let genre_ids: BTreeSet<i64> = schema.genres.iter().map(|g| g.genre_id).collect();
    for association in &schema.movie_genres {
        assert!(genre_ids.contains(&association.genre_id));
    }
    // A movie with no genres contributes no association rows.
    assert!(!schema.movie_genres.iter().any(|mg| mg.movie_id == 2));
}

#[test]
fn genre_names_unique_after_normalization() {
    let movies = vec![
        movie(1, "A", 2000, &["Action"]),
        movie(2, "B", 2001, &["Action"]),
    ];
    let schema = build_schema(&movies);
    assert_eq!(schema.genres.len(), 1);
    assert_eq!(schema.movie_genres.len(), 2);
}

#[test]
fn identical_input_reproduces_identical_identifiers() {
    let movies = vec![
        movie(1, "A", 2000, &["Western", "Drama"]),
        movie(2, "B", 2001, &["Noir"]),
    ];
    let first = build_schema(&movies);
    let second = build_schema(&movies);
    assert_eq!(first.genres, second.genres);
    assert_eq!(first.movie_genres, second.movie_genres);
}
