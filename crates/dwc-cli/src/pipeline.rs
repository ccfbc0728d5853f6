//! Checklist mapping pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: read the checklist dump and build normalized records
//! 2. **Project**: derive the four Darwin Core tables
//! 3. **Check**: scan the records for data quality warnings
//! 4. **Output**: write the CSVs, the meta.xml descriptor, the raw copy,
//!    and the mapping report
//!
//! Each stage takes the output of the previous stage and returns typed
//! results. The projectors are pure; only the output stage touches disk.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use dwc_ingest::{
    NormalizeOptions, delimiter_for_path, normalize_checklist, read_csv_table_with_delimiter,
};
use dwc_model::{ChecklistRecord, MappingReport};
use dwc_report::{
    TablePaths, archive_raw_input, create_output_dir, write_dwc_tables, write_meta_xml,
};
use dwc_transform::{ChecklistTables, project_all, records_missing_hash, unknown_locations};

/// File name of the machine-readable run report.
pub const MAPPING_REPORT_FILE: &str = "mapping-report.json";

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Options for the ingest stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct IngestOptions {
    /// Explicit field delimiter; inferred from the file extension when unset.
    pub delimiter: Option<u8>,
    /// Fill absent source hashes from scientific name and kingdom.
    pub derive_missing_hash: bool,
}

/// Read the checklist dump and build normalized records.
pub fn ingest(input: &Path, options: IngestOptions) -> Result<Vec<ChecklistRecord>> {
    let span = info_span!("ingest");
    let _guard = span.enter();
    let started = Instant::now();
    let delimiter = options
        .delimiter
        .unwrap_or_else(|| delimiter_for_path(input));
    let table = read_csv_table_with_delimiter(input, delimiter)
        .with_context(|| format!("read checklist: {}", input.display()))?;
    let records = normalize_checklist(
        &table,
        NormalizeOptions {
            derive_missing_hash: options.derive_missing_hash,
        },
    )
    .context("normalize checklist")?;
    info!(
        records = records.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "ingested checklist"
    );
    Ok(records)
}

// ============================================================================
// Stage 2: Project
// ============================================================================

/// Derive the four Darwin Core tables from the normalized records.
pub fn project(records: &[ChecklistRecord]) -> ChecklistTables {
    let span = info_span!("project");
    let _guard = span.enter();
    let tables = project_all(records);
    info!(
        taxa = tables.taxa.len(),
        distributions = tables.distributions.len(),
        species_profiles = tables.species_profiles.len(),
        descriptions = tables.descriptions.len(),
        "projected tables"
    );
    tables
}

// ============================================================================
// Stage 3: Check
// ============================================================================

/// Scan the records for data quality findings.
///
/// Findings are warnings only; the mapped output is never altered or
/// rejected because of them.
pub fn collect_warnings(records: &[ChecklistRecord]) -> Vec<String> {
    let mut warnings = Vec::new();
    for (location, count) in unknown_locations(records) {
        let message = format!(
            "unrecognized location {location:?} ({count} records); locationID/locality left empty"
        );
        warn!("{message}");
        warnings.push(message);
    }
    let missing = records_missing_hash(records);
    if missing > 0 {
        let message = format!("{missing} records without taxon_id_hash");
        warn!("{message}");
        warnings.push(message);
    }
    warnings
}

// ============================================================================
// Stage 4: Output
// ============================================================================

/// Configuration for the output stage.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub output_dir: PathBuf,
    pub write_meta_xml: bool,
    pub archive_raw: bool,
    pub dry_run: bool,
}

/// Written artifact paths; all `None` on a dry run.
#[derive(Debug, Default)]
pub struct OutputResult {
    pub tables: Option<TablePaths>,
    pub meta_xml: Option<PathBuf>,
    pub raw_archive: Option<PathBuf>,
}

/// Write all requested artifacts into the output directory.
pub fn output(
    input: &Path,
    tables: &ChecklistTables,
    config: &OutputConfig,
) -> Result<OutputResult> {
    let span = info_span!("output");
    let _guard = span.enter();
    if config.dry_run {
        info!("dry run: skipping all file output");
        return Ok(OutputResult::default());
    }
    create_output_dir(&config.output_dir)?;
    let raw_archive = if config.archive_raw {
        Some(archive_raw_input(input, &config.output_dir)?)
    } else {
        None
    };
    let table_paths = write_dwc_tables(&config.output_dir, tables)?;
    let meta_xml = if config.write_meta_xml {
        Some(write_meta_xml(&config.output_dir)?)
    } else {
        None
    };
    Ok(OutputResult {
        tables: Some(table_paths),
        meta_xml,
        raw_archive,
    })
}

/// Write the mapping report next to the outputs.
pub fn write_mapping_report(output_dir: &Path, report: &MappingReport) -> Result<PathBuf> {
    let path = output_dir.join(MAPPING_REPORT_FILE);
    let json = serde_json::to_string_pretty(report).context("serialize mapping report")?;
    fs::write(&path, json).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), "wrote mapping report");
    Ok(path)
}
