//! Read-only data checks surfaced as warnings.
//!
//! The projectors themselves never reject or report anything: an
//! unrecognized region degrades to empty location fields and a missing hash
//! degrades to an empty identifier segment. These scans give the operator
//! visibility into both without touching the published data.

use std::collections::BTreeMap;

use dwc_model::{BelgianRegion, ChecklistRecord};

/// Distinct `location` values that the fixed region lookup does not
/// recognize, with the number of records carrying each.
pub fn unknown_locations(records: &[ChecklistRecord]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        let Some(location) = record.location.as_deref() else {
            continue;
        };
        if BelgianRegion::from_location(location).is_none() {
            *counts.entry(location.to_string()).or_insert(0) += 1;
        }
    }
    counts
}

/// Number of records without a `taxon_id_hash` value.
pub fn records_missing_hash(records: &[ChecklistRecord]) -> usize {
    records
        .iter()
        .filter(|record| record.taxon_id_hash.is_none())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_locations_counts_distinct_values() {
        let mut known = ChecklistRecord::with_hash("aa");
        known.location = Some("Flanders".to_string());
        let mut unknown = ChecklistRecord::with_hash("bb");
        unknown.location = Some("Benelux".to_string());
        let mut unknown_again = ChecklistRecord::with_hash("cc");
        unknown_again.location = Some("Benelux".to_string());
        let absent = ChecklistRecord::with_hash("dd");

        let counts = unknown_locations(&[known, unknown, unknown_again, absent]);
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get("Benelux"), Some(&2));
    }

    #[test]
    fn missing_hash_counts_records_not_taxa() {
        let with_hash = ChecklistRecord::with_hash("aa");
        let without = ChecklistRecord::default();
        assert_eq!(records_missing_hash(&[with_hash, without.clone(), without]), 2);
    }
}
