//! Tests for the lookup tables and their CSV override loaders.

use std::io::Write;

use moviz_model::{Certificate, SourceDataset};
use moviz_standards::{CertificateMap, GenreVocabulary, columns_for, policy_for};

#[test]
fn certificate_defaults_cover_legacy_systems() {
    let map = CertificateMap::default();
    assert_eq!(map.lookup("TV-MA"), Some(Certificate::R));
    assert_eq!(map.lookup("U"), Some(Certificate::G));
    assert_eq!(map.lookup("UA 13+"), Some(Certificate::Pg13));
    assert_eq!(map.lookup("X"), Some(Certificate::Nc17));
    assert_eq!(map.lookup("Passed"), Some(Certificate::Passed));
}

#[test]
fn unmapped_certificate_passes_through_as_unknown() {
    let map = CertificateMap::default();
    // Video-game ratings are unmapped, not row-dropping.
    assert_eq!(map.lookup("T"), Some(Certificate::Unknown));
    assert_eq!(map.lookup("A"), Some(Certificate::Unknown));
    assert_eq!(map.lookup("definitely-not-a-rating"), Some(Certificate::Unknown));
    assert_eq!(map.lookup("   "), None);
}

#[test]
fn certificate_map_loads_from_csv() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "label,certificate").expect("write header");
    writeln!(file, "FSK 16,R").expect("write row");
    writeln!(file, "FSK 0,G").expect("write row");
    file.flush().expect("flush");

    let map = CertificateMap::load_csv(file.path()).expect("load csv");
    assert_eq!(map.lookup("FSK 16"), Some(Certificate::R));
    assert_eq!(map.lookup("FSK 0"), Some(Certificate::G));
    // Entries absent from the override file still fall through to Unknown.
    assert_eq!(map.lookup("PG"), Some(Certificate::Unknown));
}

#[test]
fn certificate_loader_rejects_bad_target() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "label,certificate").expect("write header");
    writeln!(file, "FSK 16,R18").expect("write row");
    file.flush().expect("flush");
    assert!(CertificateMap::load_csv(file.path()).is_err());
}

#[test]
fn genre_aliases_fold_spelling_variants() {
    let vocab = GenreVocabulary::default();
    assert_eq!(
        vocab.canonicalize("Sci-Fi"),
        Some("Science Fiction".to_string())
    );
    assert_eq!(vocab.canonicalize("film noir"), Some("Film-Noir".to_string()));
}

#[test]
fn unmapped_genre_becomes_its_own_canonical_entry() {
    let vocab = GenreVocabulary::default();
    assert_eq!(vocab.canonicalize("reality-tv"), Some("Reality-Tv".to_string()));
    assert_eq!(vocab.canonicalize("  short  "), Some("Short".to_string()));
    assert_eq!(vocab.canonicalize(""), None);
}

#[test]
fn genre_split_preserves_order_and_drops_repeats() {
    let vocab = GenreVocabulary::default();
    let genres = vocab.split_and_canonicalize("Action, sci-fi, Action, , Drama");
    assert_eq!(genres, vec!["Action", "Science Fiction", "Drama"]);
}

#[test]
fn genre_vocabulary_loads_from_csv() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "alias,canonical").expect("write header");
    writeln!(file, "suspense,Thriller").expect("write row");
    file.flush().expect("flush");

    let vocab = GenreVocabulary::load_csv(file.path()).expect("load csv");
    assert_eq!(vocab.canonicalize("Suspense"), Some("Thriller".to_string()));
}

#[test]
fn column_maps_declare_structural_requirements() {
    let tmdb = columns_for(SourceDataset::Tmdb);
    let required: Vec<&str> = tmdb.required_specs().map(|spec| spec.field).collect();
    assert_eq!(required, vec!["title", "release_date"]);
    assert_eq!(tmdb.spec("rating").expect("rating spec").sources, &["vote_average"]);

    let budgets = columns_for(SourceDataset::Budgets);
    assert!(budgets.spec("raw_id").is_none());
}

#[test]
fn policies_classify_title_and_year_as_critical() {
    for dataset in [
        SourceDataset::Tmdb,
        SourceDataset::Genres,
        SourceDataset::Budgets,
    ] {
        let policy = policy_for(dataset);
        assert_eq!(policy.critical, &["title", "year"]);
        assert!(policy.threshold > 0.79 && policy.threshold < 0.81);
        assert!(!policy.non_critical.is_empty());
    }
}
