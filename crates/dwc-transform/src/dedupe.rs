//! Stable first-occurrence-wins deduplication.
//!
//! Three projectors dedupe by taxon identifier independently; they all go
//! through this one utility so their notion of "first record" can never
//! diverge.

use std::collections::BTreeSet;

use dwc_model::ChecklistRecord;

/// Keep the first item per key, in input order.
pub fn first_by_key<'a, T, K, F>(items: &'a [T], mut key: F) -> Vec<&'a T>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut seen = BTreeSet::new();
    items.iter().filter(|item| seen.insert(key(item))).collect()
}

/// First record per distinct `taxon_id`, in input order.
pub fn first_per_taxon(records: &[ChecklistRecord]) -> Vec<&ChecklistRecord> {
    first_by_key(records, |record| record.taxon_id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_occurrence_wins_in_input_order() {
        let items = vec![("a", 1), ("b", 2), ("a", 3), ("c", 4), ("b", 5)];
        let kept = first_by_key(&items, |item| item.0);
        assert_eq!(kept, vec![&("a", 1), &("b", 2), &("c", 4)]);
    }

    #[test]
    fn records_deduplicate_by_taxon_id() {
        let mut first = ChecklistRecord::with_hash("aa");
        first.location = Some("Flanders".to_string());
        let mut second = ChecklistRecord::with_hash("aa");
        second.location = Some("Wallonia".to_string());
        let other = ChecklistRecord::with_hash("bb");

        let records = vec![first.clone(), second, other.clone()];
        let kept = first_per_taxon(&records);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].location, first.location);
        assert_eq!(kept[1].taxon_id, other.taxon_id);
    }
}
