pub mod csv_table;
pub mod discovery;
pub mod error;

pub use csv_table::{ColumnLookup, RawTable, read_csv_table};
pub use discovery::{list_csv_files, stack_dataset};
pub use error::{IngestError, Result};
