use tracing::debug;

use dwc_model::{ChecklistRecord, SpeciesProfileRow};

use crate::dedupe::first_per_taxon;

/// Project the Species Profile extension: one row per distinct taxon whose
/// first record populates at least one habitat flag. Flag values pass
/// through verbatim; no boolean coercion. Sorted ascending by `taxonID`.
pub fn project_species_profiles(records: &[ChecklistRecord]) -> Vec<SpeciesProfileRow> {
    let mut rows: Vec<SpeciesProfileRow> = first_per_taxon(records)
        .into_iter()
        .filter(|record| record.has_habitat_flag())
        .map(|record| SpeciesProfileRow {
            taxon_id: record.taxon_id.clone(),
            is_marine: record.marine.clone(),
            is_freshwater: record.freshwater.clone(),
            is_terrestrial: record.terrestrial.clone(),
        })
        .collect();
    rows.sort_by(|a, b| a.taxon_id.cmp(&b.taxon_id));
    debug!(
        species_profiles = rows.len(),
        "projected species profile extension"
    );
    rows
}
