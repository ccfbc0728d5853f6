//! Stable taxon identifier derivation.

use sha2::Digest;

/// Namespace prefix for every derived taxon identifier.
pub const TAXON_ID_NAMESPACE: &str = "alien-mammals-checklist:taxon:";

/// Derive the stable taxon identifier from the source hash.
///
/// Pure concatenation: two records with the same hash always yield the same
/// identifier. An absent hash produces an identifier with an empty hash
/// segment rather than an error.
pub fn taxon_id(hash: Option<&str>) -> String {
    format!("{TAXON_ID_NAMESPACE}{}", hash.unwrap_or_default())
}

/// Fallback hash over scientific name and kingdom.
///
/// Deterministic: sha256 over the trimmed, case-folded components joined by
/// a NUL byte, hex-encoded first 16 bytes. Used only when the source sheet
/// does not supply `taxon_id_hash`; collisions are tolerated, not detected.
pub fn taxon_hash(scientific_name: Option<&str>, kingdom: Option<&str>) -> String {
    let mut hasher = sha2::Sha256::new();
    hasher.update(fold(scientific_name).as_bytes());
    hasher.update([0u8]);
    hasher.update(fold(kingdom).as_bytes());
    let digest: [u8; 32] = hasher.finalize().into();
    hex::encode(&digest[..16])
}

fn fold(value: Option<&str>) -> String {
    value.unwrap_or_default().trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxon_id_concatenates_namespace_and_hash() {
        assert_eq!(
            taxon_id(Some("ab1c")),
            "alien-mammals-checklist:taxon:ab1c"
        );
        assert_eq!(taxon_id(None), "alien-mammals-checklist:taxon:");
    }

    #[test]
    fn taxon_hash_is_deterministic_and_case_folded() {
        let a = taxon_hash(Some("Ondatra zibethicus"), Some("Animalia"));
        let b = taxon_hash(Some("  ondatra zibethicus "), Some("ANIMALIA"));
        let c = taxon_hash(Some("Myocastor coypus"), Some("Animalia"));

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 32);
    }

    #[test]
    fn taxon_hash_separates_components() {
        // The NUL join keeps "ab" + "c" distinct from "a" + "bc".
        assert_ne!(
            taxon_hash(Some("ab"), Some("c")),
            taxon_hash(Some("a"), Some("bc"))
        );
    }
}
