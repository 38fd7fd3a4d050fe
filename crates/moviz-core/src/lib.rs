pub mod augment;
pub mod dedupe;
pub mod normalize;
pub mod pipeline;
pub mod quality;
pub mod resolve;
pub mod schema;

pub use augment::{assign_decades, decade_of};
pub use dedupe::{DedupeOutcome, dedupe_records};
pub use normalize::{
    NormalizeOutcome, extract_year, normalize_row, normalize_table, normalize_title, parse_date,
    parse_money,
};
pub use pipeline::{DatasetStats, PipelineConfig, PipelineResult, run_pipeline};
pub use quality::{QualityOutcome, evaluate, filter_records};
pub use resolve::{Resolution, ResolutionStats, resolve_entities};
pub use schema::{GenreSchema, build_schema};
