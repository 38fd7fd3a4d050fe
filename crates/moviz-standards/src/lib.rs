pub mod certificates;
pub mod columns;
pub mod error;
pub mod genres;

pub use certificates::CertificateMap;
pub use columns::{
    ColumnPolicy, ColumnSpec, DatasetColumns, MISSINGNESS_THRESHOLD, columns_for, policy_for,
};
pub use error::StandardsError;
pub use genres::GenreVocabulary;

/// Bundle of all lookup tables a pipeline run needs. Defaults are the
/// compiled-in tables; each table can be overridden from CSV independently.
#[derive(Debug, Clone, Default)]
pub struct Standards {
    pub certificates: CertificateMap,
    pub genres: GenreVocabulary,
}
