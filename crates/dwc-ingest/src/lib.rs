pub mod checklist;
pub mod csv_table;
pub mod error;

pub use checklist::{NormalizeOptions, normalize_checklist};
pub use csv_table::{
    CsvTable, delimiter_for_path, normalize_header, read_csv_table, read_csv_table_with_delimiter,
};
pub use error::{IngestError, Result};
