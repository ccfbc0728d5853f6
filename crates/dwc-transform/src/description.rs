use tracing::debug;

use dwc_model::{ChecklistRecord, DescriptionRow, terms};

use crate::dedupe::first_per_taxon;

/// Project the Description extension: one native-range row per taxon and
/// `|`-separated token, trimmed, empty tokens skipped. A taxon without a
/// native range contributes no rows. Sorted ascending by `taxonID`; token
/// order within a taxon is preserved.
pub fn project_descriptions(records: &[ChecklistRecord]) -> Vec<DescriptionRow> {
    let mut rows = Vec::new();
    for record in first_per_taxon(records) {
        for token in record.native_range_tokens() {
            rows.push(DescriptionRow {
                taxon_id: record.taxon_id.clone(),
                description: token.to_string(),
                description_type: terms::NATIVE_RANGE_TYPE.to_string(),
                language: terms::LANGUAGE.to_string(),
            });
        }
    }
    rows.sort_by(|a, b| a.taxon_id.cmp(&b.taxon_id));
    debug!(descriptions = rows.len(), "projected description extension");
    rows
}
