//! Projection of normalized checklist records into the four Darwin Core
//! tables.
//!
//! Every projector is a pure function over the same immutable record slice;
//! none depends on another's output, so they may run in any order without
//! changing the result.

pub mod checks;
pub mod datetime;
pub mod dedupe;
pub mod description;
pub mod distribution;
pub mod species_profile;
pub mod taxon;

pub use checks::{records_missing_hash, unknown_locations};
pub use datetime::event_date;
pub use dedupe::{first_by_key, first_per_taxon};
pub use description::project_descriptions;
pub use distribution::project_distributions;
pub use species_profile::project_species_profiles;
pub use taxon::project_taxa;

use dwc_model::{
    ChecklistRecord, DescriptionRow, DistributionRow, DwcTable, SpeciesProfileRow, TaxonRow,
};

/// The four projected tables of one mapping run.
#[derive(Debug, Clone, Default)]
pub struct ChecklistTables {
    pub taxa: Vec<TaxonRow>,
    pub distributions: Vec<DistributionRow>,
    pub species_profiles: Vec<SpeciesProfileRow>,
    pub descriptions: Vec<DescriptionRow>,
}

impl ChecklistTables {
    /// Row count for one table.
    pub fn records(&self, table: DwcTable) -> usize {
        match table {
            DwcTable::Taxon => self.taxa.len(),
            DwcTable::Distribution => self.distributions.len(),
            DwcTable::SpeciesProfile => self.species_profiles.len(),
            DwcTable::Description => self.descriptions.len(),
        }
    }
}

/// Run all four projectors over the normalized records.
pub fn project_all(records: &[ChecklistRecord]) -> ChecklistTables {
    ChecklistTables {
        taxa: project_taxa(records),
        distributions: project_distributions(records),
        species_profiles: project_species_profiles(records),
        descriptions: project_descriptions(records),
    }
}
