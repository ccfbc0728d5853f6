use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{IngestError, Result};

/// A delimited text file read fully into memory: normalized headers plus
/// trimmed string cells. All typing happens later; a cell is just text.
#[derive(Debug, Clone)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Index of a normalized column name, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }
}

/// Normalize a raw header to its canonical form: trimmed, BOM-stripped,
/// lowercased, with every run of non-alphanumeric characters collapsed to a
/// single underscore ("Date first observation" -> "date_first_observation").
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut normalized = String::with_capacity(trimmed.len());
    let mut pending_separator = false;
    for ch in trimmed.chars() {
        if ch.is_alphanumeric() {
            if pending_separator && !normalized.is_empty() {
                normalized.push('_');
            }
            pending_separator = false;
            normalized.extend(ch.to_lowercase());
        } else {
            pending_separator = true;
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Pick the field delimiter from the file extension: tab for `.tsv`/`.tab`,
/// comma otherwise.
pub fn delimiter_for_path(path: &Path) -> u8 {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("tsv") || ext.eq_ignore_ascii_case("tab") => b'\t',
        _ => b',',
    }
}

/// Read a delimited file into a [`CsvTable`], inferring the delimiter from
/// the file extension.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    read_csv_table_with_delimiter(path, delimiter_for_path(path))
}

/// Read a delimited file into a [`CsvTable`] with an explicit delimiter.
///
/// The first row is the header row. Data rows where every cell is empty
/// after trimming are dropped; ragged rows are padded or truncated to the
/// header width.
pub fn read_csv_table_with_delimiter(path: &Path, delimiter: u8) -> Result<CsvTable> {
    let file = File::open(path).map_err(|source| IngestError::io(path, source))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|error| IngestError::csv(path, error.to_string()))?
        .iter()
        .map(normalize_header)
        .collect();

    let mut rows = Vec::new();
    let mut dropped = 0usize;
    for record in reader.records() {
        let record = record.map_err(|error| IngestError::csv(path, error.to_string()))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            dropped += 1;
            continue;
        }
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            let value = record.get(idx).unwrap_or("");
            row.push(normalize_cell(value));
        }
        rows.push(row);
    }
    debug!(
        path = %path.display(),
        rows = rows.len(),
        dropped_empty = dropped,
        "read checklist table"
    );
    Ok(CsvTable { headers, rows })
}
