use std::path::PathBuf;

use dwc_model::DwcTable;

#[derive(Debug)]
pub struct MapResult {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub dry_run: bool,
    pub tables: Vec<TableSummary>,
    pub warnings: Vec<String>,
    pub meta_xml: Option<PathBuf>,
    pub raw_archive: Option<PathBuf>,
    pub report: Option<PathBuf>,
}

#[derive(Debug)]
pub struct TableSummary {
    pub table: DwcTable,
    pub records: usize,
    pub path: Option<PathBuf>,
}
