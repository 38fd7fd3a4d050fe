pub mod certificate;
pub mod movie;
pub mod record;
pub mod reject;

pub use certificate::Certificate;
pub use movie::{Genre, Movie, MovieGenre, MovieTables, Provenance};
pub use record::{MAX_YEAR, MIN_YEAR, NormalizedRecord, SourceDataset};
pub use reject::RejectReason;
