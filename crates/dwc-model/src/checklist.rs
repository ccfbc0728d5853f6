use crate::ids;

/// One normalized checklist record.
///
/// Every field is carried as an opaque optional string: the source is a
/// loosely typed spreadsheet dump and no value parsing happens at this
/// level. `introduction_pathways` holds the populated `introduction_pathway*`
/// columns in file column order; empty pathway cells are not represented.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecklistRecord {
    /// Derived stable identifier, `alien-mammals-checklist:taxon:<hash>`.
    pub taxon_id: String,
    pub scientific_name: Option<String>,
    pub kingdom: Option<String>,
    pub phylum: Option<String>,
    pub order: Option<String>,
    pub family: Option<String>,
    pub genus: Option<String>,
    pub taxon_rank: Option<String>,
    pub nomenclatural_code: Option<String>,
    pub location: Option<String>,
    pub country_code: Option<String>,
    pub occurrence_status: Option<String>,
    pub establishment_means: Option<String>,
    pub degree_of_establishment: Option<String>,
    pub introduction_pathways: Vec<String>,
    pub date_first_observation: Option<String>,
    pub date_last_observation: Option<String>,
    pub source: Option<String>,
    pub occurrence_remarks: Option<String>,
    pub terrestrial: Option<String>,
    pub marine: Option<String>,
    pub freshwater: Option<String>,
    pub native_range: Option<String>,
    pub taxon_id_hash: Option<String>,
}

impl ChecklistRecord {
    /// Build an otherwise empty record for a given source hash.
    pub fn with_hash(hash: impl Into<String>) -> Self {
        let hash = hash.into();
        Self {
            taxon_id: ids::taxon_id(Some(hash.as_str())),
            taxon_id_hash: Some(hash),
            ..Self::default()
        }
    }

    /// True when at least one habitat flag (terrestrial, marine, freshwater)
    /// is populated.
    pub fn has_habitat_flag(&self) -> bool {
        self.terrestrial.is_some() || self.marine.is_some() || self.freshwater.is_some()
    }

    /// Split `native_range` on `|`, trim each token, keep non-empty tokens in
    /// their original order. An absent `native_range` yields no tokens.
    pub fn native_range_tokens(&self) -> Vec<&str> {
        self.native_range
            .as_deref()
            .map(|value| {
                value
                    .split('|')
                    .map(str::trim)
                    .filter(|token| !token.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}
