//! Builds normalized checklist records from a raw [`CsvTable`].
//!
//! Column presence is validated once here; after that every lookup is by
//! index. The `taxon_id_hash` column and the `introduction_pathway*` family
//! are optional: a record without a hash simply gets an identifier with an
//! empty hash segment, and a sheet without pathway columns produces no
//! distribution rows downstream.

use tracing::{debug, warn};

use dwc_model::{ChecklistRecord, ids};

use crate::csv_table::CsvTable;
use crate::error::{IngestError, Result};

/// Prefix shared by all pathway columns (`introduction_pathway`,
/// `introduction_pathway_2`, ...).
pub const PATHWAY_COLUMN_PREFIX: &str = "introduction_pathway";

/// Hash column feeding the taxon identifier.
pub const TAXON_ID_HASH_COLUMN: &str = "taxon_id_hash";

/// Options for record normalization.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeOptions {
    /// Fill an absent `taxon_id_hash` with a hash derived from scientific
    /// name and kingdom. Off by default: the hash is an upstream input and
    /// a missing value normally flows through as an empty identifier
    /// segment.
    pub derive_missing_hash: bool,
}

/// Resolved column indices for one checklist sheet.
#[derive(Debug, Clone)]
struct Columns {
    scientific_name: usize,
    kingdom: usize,
    phylum: usize,
    order: usize,
    family: usize,
    genus: usize,
    taxon_rank: usize,
    nomenclatural_code: usize,
    location: usize,
    country_code: usize,
    occurrence_status: usize,
    establishment_means: usize,
    degree_of_establishment: usize,
    date_first_observation: usize,
    date_last_observation: usize,
    source: usize,
    occurrence_remarks: usize,
    terrestrial: usize,
    marine: usize,
    freshwater: usize,
    native_range: usize,
    pathways: Vec<usize>,
    taxon_id_hash: Option<usize>,
}

impl Columns {
    fn resolve(table: &CsvTable) -> Result<Self> {
        let require = |name: &str| {
            table
                .column_index(name)
                .ok_or_else(|| IngestError::missing_column(name))
        };
        let pathways: Vec<usize> = table
            .headers
            .iter()
            .enumerate()
            .filter(|(_, header)| header.starts_with(PATHWAY_COLUMN_PREFIX))
            .map(|(idx, _)| idx)
            .collect();
        if pathways.is_empty() {
            warn!("no {PATHWAY_COLUMN_PREFIX}* columns found; distribution output will be empty");
        }
        let taxon_id_hash = table.column_index(TAXON_ID_HASH_COLUMN);
        if taxon_id_hash.is_none() {
            warn!("no {TAXON_ID_HASH_COLUMN} column found; taxon identifiers will lack a hash segment");
        }
        Ok(Self {
            scientific_name: require("scientific_name")?,
            kingdom: require("kingdom")?,
            phylum: require("phylum")?,
            order: require("order")?,
            family: require("family")?,
            genus: require("genus")?,
            taxon_rank: require("taxon_rank")?,
            nomenclatural_code: require("nomenclatural_code")?,
            location: require("location")?,
            country_code: require("country_code")?,
            occurrence_status: require("occurrence_status")?,
            establishment_means: require("establishment_means")?,
            degree_of_establishment: require("degree_of_establishment")?,
            date_first_observation: require("date_first_observation")?,
            date_last_observation: require("date_last_observation")?,
            source: require("source")?,
            occurrence_remarks: require("occurrence_remarks")?,
            terrestrial: require("terrestrial")?,
            marine: require("marine")?,
            freshwater: require("freshwater")?,
            native_range: require("native_range")?,
            pathways,
            taxon_id_hash,
        })
    }
}

fn field(row: &[String], idx: usize) -> Option<String> {
    row.get(idx)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
}

/// Turn a raw table into normalized checklist records.
///
/// Empty rows were already dropped at read time; this step types the
/// remaining rows and derives `taxon_id` for each. Pure apart from logging.
pub fn normalize_checklist(
    table: &CsvTable,
    options: NormalizeOptions,
) -> Result<Vec<ChecklistRecord>> {
    let columns = Columns::resolve(table)?;
    let mut records = Vec::with_capacity(table.rows.len());
    let mut derived_hashes = 0usize;
    for row in &table.rows {
        let scientific_name = field(row, columns.scientific_name);
        let kingdom = field(row, columns.kingdom);
        let mut taxon_id_hash = columns.taxon_id_hash.and_then(|idx| field(row, idx));
        if taxon_id_hash.is_none() && options.derive_missing_hash {
            taxon_id_hash = Some(ids::taxon_hash(
                scientific_name.as_deref(),
                kingdom.as_deref(),
            ));
            derived_hashes += 1;
        }
        let introduction_pathways: Vec<String> = columns
            .pathways
            .iter()
            .filter_map(|&idx| field(row, idx))
            .collect();
        records.push(ChecklistRecord {
            taxon_id: ids::taxon_id(taxon_id_hash.as_deref()),
            scientific_name,
            kingdom,
            phylum: field(row, columns.phylum),
            order: field(row, columns.order),
            family: field(row, columns.family),
            genus: field(row, columns.genus),
            taxon_rank: field(row, columns.taxon_rank),
            nomenclatural_code: field(row, columns.nomenclatural_code),
            location: field(row, columns.location),
            country_code: field(row, columns.country_code),
            occurrence_status: field(row, columns.occurrence_status),
            establishment_means: field(row, columns.establishment_means),
            degree_of_establishment: field(row, columns.degree_of_establishment),
            introduction_pathways,
            date_first_observation: field(row, columns.date_first_observation),
            date_last_observation: field(row, columns.date_last_observation),
            source: field(row, columns.source),
            occurrence_remarks: field(row, columns.occurrence_remarks),
            terrestrial: field(row, columns.terrestrial),
            marine: field(row, columns.marine),
            freshwater: field(row, columns.freshwater),
            native_range: field(row, columns.native_range),
            taxon_id_hash,
        });
    }
    debug!(
        records = records.len(),
        derived_hashes, "normalized checklist records"
    );
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADERS: &[&str] = &[
        "scientific_name",
        "kingdom",
        "phylum",
        "order",
        "family",
        "genus",
        "taxon_rank",
        "nomenclatural_code",
        "location",
        "country_code",
        "occurrence_status",
        "establishment_means",
        "degree_of_establishment",
        "introduction_pathway_1",
        "introduction_pathway_2",
        "date_first_observation",
        "date_last_observation",
        "source",
        "occurrence_remarks",
        "terrestrial",
        "marine",
        "freshwater",
        "native_range",
        "taxon_id_hash",
    ];

    fn table_with_rows(rows: Vec<Vec<&str>>) -> CsvTable {
        CsvTable {
            headers: HEADERS.iter().map(ToString::to_string).collect(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(ToString::to_string).collect())
                .collect(),
        }
    }

    fn sample_row(hash: &str) -> Vec<&str> {
        let mut row = vec![
            "Ondatra zibethicus",
            "Animalia",
            "Chordata",
            "Rodentia",
            "Cricetidae",
            "Ondatra",
            "species",
            "ICZN",
            "Flanders",
            "BE",
            "present",
            "introduced",
            "established",
            "escape_pet",
            "",
            "1987",
            "2016",
            "",
            "",
            "TRUE",
            "",
            "TRUE",
            "Asia|Europe",
        ];
        row.push(hash);
        row
    }

    #[test]
    fn records_get_namespaced_taxon_ids() {
        let table = table_with_rows(vec![sample_row("ab12")]);
        let records = normalize_checklist(&table, NormalizeOptions::default()).expect("normalize");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].taxon_id, "alien-mammals-checklist:taxon:ab12");
        assert_eq!(records[0].taxon_id_hash.as_deref(), Some("ab12"));
    }

    #[test]
    fn missing_hash_yields_empty_segment_by_default() {
        let table = table_with_rows(vec![sample_row("")]);
        let records = normalize_checklist(&table, NormalizeOptions::default()).expect("normalize");
        assert_eq!(records[0].taxon_id, "alien-mammals-checklist:taxon:");
        assert_eq!(records[0].taxon_id_hash, None);
    }

    #[test]
    fn hash_fallback_is_opt_in() {
        let table = table_with_rows(vec![sample_row("")]);
        let options = NormalizeOptions {
            derive_missing_hash: true,
        };
        let records = normalize_checklist(&table, options).expect("normalize");
        let expected = ids::taxon_hash(Some("Ondatra zibethicus"), Some("Animalia"));
        assert_eq!(
            records[0].taxon_id,
            format!("alien-mammals-checklist:taxon:{expected}")
        );
    }

    #[test]
    fn populated_pathways_keep_column_order() {
        let mut row = sample_row("ab12");
        row[13] = "escape_pet";
        row[14] = "contaminant_animal";
        let table = table_with_rows(vec![row]);
        let records = normalize_checklist(&table, NormalizeOptions::default()).expect("normalize");
        assert_eq!(
            records[0].introduction_pathways,
            vec!["escape_pet", "contaminant_animal"]
        );
    }

    #[test]
    fn absent_required_column_is_an_error() {
        let mut table = table_with_rows(vec![]);
        table.headers.retain(|header| header != "native_range");
        let error = normalize_checklist(&table, NormalizeOptions::default()).unwrap_err();
        assert!(
            matches!(error, IngestError::MissingColumn { ref column } if column == "native_range")
        );
    }

    #[test]
    fn absent_hash_column_is_not_an_error() {
        let mut table = table_with_rows(vec![sample_row("ignored")]);
        let hash_idx = table
            .headers
            .iter()
            .position(|header| header == TAXON_ID_HASH_COLUMN)
            .unwrap();
        table.headers.remove(hash_idx);
        for row in &mut table.rows {
            row.remove(hash_idx);
        }
        let records = normalize_checklist(&table, NormalizeOptions::default()).expect("normalize");
        assert_eq!(records[0].taxon_id, "alien-mammals-checklist:taxon:");
    }
}
