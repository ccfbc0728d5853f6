use tracing::debug;

use dwc_model::{ChecklistRecord, TaxonRow, terms};

use crate::dedupe::first_per_taxon;

/// Project the Taxon core table: one row per distinct taxon, taken from the
/// first record observed for that identifier, sorted ascending by `taxonID`.
pub fn project_taxa(records: &[ChecklistRecord]) -> Vec<TaxonRow> {
    let mut rows: Vec<TaxonRow> = first_per_taxon(records)
        .into_iter()
        .map(taxon_row)
        .collect();
    rows.sort_by(|a, b| a.taxon_id.cmp(&b.taxon_id));
    debug!(taxa = rows.len(), "projected taxon core");
    rows
}

fn taxon_row(record: &ChecklistRecord) -> TaxonRow {
    TaxonRow {
        taxon_id: record.taxon_id.clone(),
        language: terms::LANGUAGE.to_string(),
        license: terms::LICENSE.to_string(),
        rights_holder: terms::RIGHTS_HOLDER.to_string(),
        access_rights: terms::ACCESS_RIGHTS.to_string(),
        dataset_id: terms::DATASET_ID.to_string(),
        institution_code: terms::INSTITUTION_CODE.to_string(),
        dataset_name: terms::DATASET_NAME.to_string(),
        scientific_name: record.scientific_name.clone(),
        kingdom: record.kingdom.clone(),
        phylum: record.phylum.clone(),
        order: record.order.clone(),
        family: record.family.clone(),
        genus: record.genus.clone(),
        taxon_rank: record.taxon_rank.clone(),
        nomenclatural_code: record.nomenclatural_code.clone(),
    }
}
