use tracing::debug;

use dwc_model::{BelgianRegion, ChecklistRecord, DistributionRow};

use crate::datetime::event_date;

/// Project the Distribution extension: one row per record and populated
/// pathway column. Records without populated pathways contribute nothing.
///
/// Regions outside the fixed Flanders/Wallonia/Brussels lookup leave
/// `locationID`/`locality` empty without failing; a side-band check reports
/// them (see [`crate::checks`]). Final order is ascending by `taxonID` with
/// ties keeping input order.
pub fn project_distributions(records: &[ChecklistRecord]) -> Vec<DistributionRow> {
    let mut rows = Vec::new();
    for record in records {
        let region = record
            .location
            .as_deref()
            .and_then(BelgianRegion::from_location);
        let event_date = event_date(
            record.date_first_observation.as_deref(),
            record.date_last_observation.as_deref(),
        );
        for pathway in &record.introduction_pathways {
            rows.push(DistributionRow {
                taxon_id: record.taxon_id.clone(),
                location_id: region.map(|region| region.location_id().to_string()),
                locality: region.map(|region| region.locality().to_string()),
                country_code: record.country_code.clone(),
                occurrence_status: record.occurrence_status.clone(),
                establishment_means: record.establishment_means.clone(),
                degree_of_establishment: record.degree_of_establishment.clone(),
                pathway: Some(pathway.clone()),
                event_date: event_date.clone(),
                source: record.source.clone(),
                occurrence_remarks: record.occurrence_remarks.clone(),
            });
        }
    }
    rows.sort_by(|a, b| a.taxon_id.cmp(&b.taxon_id));
    debug!(distributions = rows.len(), "projected distribution extension");
    rows
}
