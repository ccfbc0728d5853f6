//! CSV writers for the four Darwin Core tables.
//!
//! The header row is written from the term tables rather than from serde, so
//! an empty table still carries its full header and the column contract has
//! a single source of truth. Absent values serialize as empty cells.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::WriterBuilder;
use serde::Serialize;
use tracing::info;

use dwc_model::DwcTable;
use dwc_transform::ChecklistTables;

/// Paths of the four written tables.
#[derive(Debug, Clone)]
pub struct TablePaths {
    pub taxon: PathBuf,
    pub distribution: PathBuf,
    pub species_profile: PathBuf,
    pub description: PathBuf,
}

impl TablePaths {
    /// Path of one table.
    pub fn for_table(&self, table: DwcTable) -> &Path {
        match table {
            DwcTable::Taxon => &self.taxon,
            DwcTable::Distribution => &self.distribution,
            DwcTable::SpeciesProfile => &self.species_profile,
            DwcTable::Description => &self.description,
        }
    }
}

/// Write one table to `<output_dir>/<file_name>`.
pub fn write_table<T: Serialize>(
    output_dir: &Path,
    table: DwcTable,
    rows: &[T],
) -> Result<PathBuf> {
    let path = output_dir.join(table.file_name());
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(&path)
        .with_context(|| format!("create {}", path.display()))?;
    writer
        .write_record(table.terms().iter().map(|term| term.name))
        .with_context(|| format!("write header: {}", path.display()))?;
    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("write record: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    info!(table = %table, records = rows.len(), path = %path.display(), "wrote table");
    Ok(path)
}

/// Write all four tables into the output directory.
pub fn write_dwc_tables(output_dir: &Path, tables: &ChecklistTables) -> Result<TablePaths> {
    Ok(TablePaths {
        taxon: write_table(output_dir, DwcTable::Taxon, &tables.taxa)?,
        distribution: write_table(output_dir, DwcTable::Distribution, &tables.distributions)?,
        species_profile: write_table(
            output_dir,
            DwcTable::SpeciesProfile,
            &tables.species_profiles,
        )?,
        description: write_table(output_dir, DwcTable::Description, &tables.descriptions)?,
    })
}
