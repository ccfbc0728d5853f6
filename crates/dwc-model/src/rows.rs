//! Output row types for the four Darwin Core tables.
//!
//! Field order and serde renames define the serialized column set; absent
//! values serialize as empty cells. Column order is part of the published
//! contract and mirrors the term tables in [`crate::terms`].

use serde::Serialize;

/// One row of the Taxon core table: one per distinct taxon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxonRow {
    #[serde(rename = "taxonID")]
    pub taxon_id: String,
    pub language: String,
    pub license: String,
    #[serde(rename = "rightsHolder")]
    pub rights_holder: String,
    #[serde(rename = "accessRights")]
    pub access_rights: String,
    #[serde(rename = "datasetID")]
    pub dataset_id: String,
    #[serde(rename = "institutionCode")]
    pub institution_code: String,
    #[serde(rename = "datasetName")]
    pub dataset_name: String,
    #[serde(rename = "scientificName")]
    pub scientific_name: Option<String>,
    pub kingdom: Option<String>,
    pub phylum: Option<String>,
    pub order: Option<String>,
    pub family: Option<String>,
    pub genus: Option<String>,
    #[serde(rename = "taxonRank")]
    pub taxon_rank: Option<String>,
    #[serde(rename = "nomenclaturalCode")]
    pub nomenclatural_code: Option<String>,
}

/// One row of the Distribution extension: one per record and populated
/// pathway column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionRow {
    #[serde(rename = "taxonID")]
    pub taxon_id: String,
    #[serde(rename = "locationID")]
    pub location_id: Option<String>,
    pub locality: Option<String>,
    #[serde(rename = "countryCode")]
    pub country_code: Option<String>,
    #[serde(rename = "occurrenceStatus")]
    pub occurrence_status: Option<String>,
    #[serde(rename = "establishmentMeans")]
    pub establishment_means: Option<String>,
    #[serde(rename = "degreeOfEstablishment")]
    pub degree_of_establishment: Option<String>,
    pub pathway: Option<String>,
    #[serde(rename = "eventDate")]
    pub event_date: Option<String>,
    pub source: Option<String>,
    #[serde(rename = "occurrenceRemarks")]
    pub occurrence_remarks: Option<String>,
}

/// One row of the Species Profile extension: habitat flags, values passed
/// through verbatim (no boolean coercion).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeciesProfileRow {
    #[serde(rename = "taxonID")]
    pub taxon_id: String,
    #[serde(rename = "isMarine")]
    pub is_marine: Option<String>,
    #[serde(rename = "isFreshwater")]
    pub is_freshwater: Option<String>,
    #[serde(rename = "isTerrestrial")]
    pub is_terrestrial: Option<String>,
}

/// One row of the Description extension: one native range token per row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescriptionRow {
    #[serde(rename = "taxonID")]
    pub taxon_id: String,
    pub description: String,
    #[serde(rename = "type")]
    pub description_type: String,
    pub language: String,
}
