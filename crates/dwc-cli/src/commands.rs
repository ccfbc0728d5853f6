use std::path::Path;

use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use comfy_table::Table;
use tracing::info_span;

use dwc_cli::pipeline::{
    IngestOptions, OutputConfig, collect_warnings, ingest, output, project, write_mapping_report,
};
use dwc_model::{DwcTable, MappingReport, TableReport};

use crate::cli::MapArgs;
use crate::summary::apply_table_style;
use crate::types::{MapResult, TableSummary};

pub fn run_terms() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Table", "File", "Column", "Darwin Core term"]);
    apply_table_style(&mut table);
    for dwc_table in DwcTable::ALL {
        for term in dwc_table.terms() {
            table.add_row(vec![
                dwc_table.label(),
                dwc_table.file_name(),
                term.name,
                term.uri,
            ]);
        }
    }
    println!("{table}");
    Ok(())
}

pub fn run_map(args: &MapArgs) -> Result<MapResult> {
    let input = &args.input;
    let map_span = info_span!("map", input = %input.display());
    let _map_guard = map_span.enter();
    let output_dir = args.output_dir.clone().unwrap_or_else(|| {
        input
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("output")
    });

    let records = ingest(
        input,
        IngestOptions {
            delimiter: args.delimiter.map(|delimiter| delimiter.as_byte()),
            derive_missing_hash: args.derive_taxon_hash,
        },
    )?;
    let tables = project(&records);
    let warnings = collect_warnings(&records);
    let written = output(
        input,
        &tables,
        &OutputConfig {
            output_dir: output_dir.clone(),
            write_meta_xml: !args.no_meta_xml,
            archive_raw: !args.no_raw_archive,
            dry_run: args.dry_run,
        },
    )?;

    let summaries: Vec<TableSummary> = DwcTable::ALL
        .iter()
        .map(|&dwc_table| TableSummary {
            table: dwc_table,
            records: tables.records(dwc_table),
            path: written
                .tables
                .as_ref()
                .map(|paths| paths.for_table(dwc_table).to_path_buf()),
        })
        .collect();

    let report = MappingReport {
        success: true,
        input: input.clone(),
        output_dir: output_dir.clone(),
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        tables: summaries
            .iter()
            .map(|summary| TableReport {
                table: summary.table.label().to_string(),
                records: summary.records,
                path: summary.path.clone(),
            })
            .collect(),
        warnings: warnings.clone(),
    };
    let report_path = if args.dry_run {
        None
    } else {
        Some(write_mapping_report(&output_dir, &report)?)
    };

    Ok(MapResult {
        input: input.clone(),
        output_dir,
        dry_run: args.dry_run,
        tables: summaries,
        warnings,
        meta_xml: written.meta_xml,
        raw_archive: written.raw_archive,
        report: report_path,
    })
}
