pub mod common;
pub mod csv_out;
pub mod meta_xml;

pub use common::{RAW_DIR, archive_raw_input, create_output_dir};
pub use csv_out::{TablePaths, write_dwc_tables, write_table};
pub use meta_xml::{META_XML_FILE, write_meta_xml};
