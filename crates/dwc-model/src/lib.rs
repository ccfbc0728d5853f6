pub mod checklist;
pub mod ids;
pub mod region;
pub mod report;
pub mod rows;
pub mod terms;

pub use checklist::ChecklistRecord;
pub use ids::{TAXON_ID_NAMESPACE, taxon_hash, taxon_id};
pub use region::BelgianRegion;
pub use report::{MappingReport, TableReport};
pub use rows::{DescriptionRow, DistributionRow, SpeciesProfileRow, TaxonRow};
pub use terms::{DwcTable, DwcTerm};
