use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Per-table outcome of a mapping run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableReport {
    pub table: String,
    pub records: usize,
    /// Absent on dry runs.
    pub path: Option<PathBuf>,
}

/// Machine-readable summary of one mapping run, written next to the outputs.
///
/// The report is operational metadata, not one of the published artifacts;
/// it carries a timestamp and is the only output that differs between runs
/// over identical input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingReport {
    pub success: bool,
    pub input: PathBuf,
    pub output_dir: PathBuf,
    /// RFC 3339 UTC timestamp of the run.
    pub generated_at: String,
    pub tables: Vec<TableReport>,
    pub warnings: Vec<String>,
}
