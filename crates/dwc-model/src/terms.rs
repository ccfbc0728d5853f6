//! Fixed Darwin Core vocabulary: dataset constants, output tables, and the
//! term metadata that pins each output column to its Darwin Core term URI.
//!
//! The term tables below are the single source of truth for column names and
//! column order. The serde field order of the row structs in [`crate::rows`]
//! must match them; a test in `tests/terms.rs` holds the two together.

use std::fmt;

/// Dataset language tag.
pub const LANGUAGE: &str = "en";

/// CC0 waiver applied to the published checklist.
pub const LICENSE: &str = "http://creativecommons.org/publicdomain/zero/1.0/";

/// Rights holder for the dataset.
pub const RIGHTS_HOLDER: &str = "INBO";

/// INBO norms for data use.
pub const ACCESS_RIGHTS: &str = "https://www.inbo.be/en/norms-data-use";

/// Stable dataset identifier (GBIF dataset DOI).
pub const DATASET_ID: &str = "https://doi.org/10.15468/xoida9";

/// Publishing institution code.
pub const INSTITUTION_CODE: &str = "INBO";

/// Human-readable dataset name.
pub const DATASET_NAME: &str = "Checklist of alien mammals of Belgium";

/// Constant `type` value on native range description rows.
pub const NATIVE_RANGE_TYPE: &str = "native range";

/// One output column paired with its Darwin Core term URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DwcTerm {
    pub name: &'static str,
    pub uri: &'static str,
}

const fn term(name: &'static str, uri: &'static str) -> DwcTerm {
    DwcTerm { name, uri }
}

/// Taxon core columns, in output order.
pub const TAXON_TERMS: &[DwcTerm] = &[
    term("taxonID", "http://rs.tdwg.org/dwc/terms/taxonID"),
    term("language", "http://purl.org/dc/terms/language"),
    term("license", "http://purl.org/dc/terms/license"),
    term("rightsHolder", "http://purl.org/dc/terms/rightsHolder"),
    term("accessRights", "http://purl.org/dc/terms/accessRights"),
    term("datasetID", "http://rs.tdwg.org/dwc/terms/datasetID"),
    term("institutionCode", "http://rs.tdwg.org/dwc/terms/institutionCode"),
    term("datasetName", "http://rs.tdwg.org/dwc/terms/datasetName"),
    term("scientificName", "http://rs.tdwg.org/dwc/terms/scientificName"),
    term("kingdom", "http://rs.tdwg.org/dwc/terms/kingdom"),
    term("phylum", "http://rs.tdwg.org/dwc/terms/phylum"),
    term("order", "http://rs.tdwg.org/dwc/terms/order"),
    term("family", "http://rs.tdwg.org/dwc/terms/family"),
    term("genus", "http://rs.tdwg.org/dwc/terms/genus"),
    term("taxonRank", "http://rs.tdwg.org/dwc/terms/taxonRank"),
    term(
        "nomenclaturalCode",
        "http://rs.tdwg.org/dwc/terms/nomenclaturalCode",
    ),
];

/// Distribution extension columns, in output order.
pub const DISTRIBUTION_TERMS: &[DwcTerm] = &[
    term("taxonID", "http://rs.tdwg.org/dwc/terms/taxonID"),
    term("locationID", "http://rs.tdwg.org/dwc/terms/locationID"),
    term("locality", "http://rs.tdwg.org/dwc/terms/locality"),
    term("countryCode", "http://rs.tdwg.org/dwc/terms/countryCode"),
    term(
        "occurrenceStatus",
        "http://rs.tdwg.org/dwc/terms/occurrenceStatus",
    ),
    term(
        "establishmentMeans",
        "http://rs.tdwg.org/dwc/terms/establishmentMeans",
    ),
    term(
        "degreeOfEstablishment",
        "http://rs.tdwg.org/dwc/terms/degreeOfEstablishment",
    ),
    term("pathway", "http://rs.tdwg.org/dwc/terms/pathway"),
    term("eventDate", "http://rs.tdwg.org/dwc/terms/eventDate"),
    term("source", "http://purl.org/dc/terms/source"),
    term(
        "occurrenceRemarks",
        "http://rs.tdwg.org/dwc/terms/occurrenceRemarks",
    ),
];

/// Species profile extension columns, in output order.
pub const SPECIES_PROFILE_TERMS: &[DwcTerm] = &[
    term("taxonID", "http://rs.tdwg.org/dwc/terms/taxonID"),
    term("isMarine", "http://rs.gbif.org/terms/1.0/isMarine"),
    term("isFreshwater", "http://rs.gbif.org/terms/1.0/isFreshwater"),
    term("isTerrestrial", "http://rs.gbif.org/terms/1.0/isTerrestrial"),
];

/// Description extension columns, in output order.
pub const DESCRIPTION_TERMS: &[DwcTerm] = &[
    term("taxonID", "http://rs.tdwg.org/dwc/terms/taxonID"),
    term("description", "http://purl.org/dc/terms/description"),
    term("type", "http://purl.org/dc/terms/type"),
    term("language", "http://purl.org/dc/terms/language"),
];

/// The four output tables of the mapped archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DwcTable {
    Taxon,
    Distribution,
    SpeciesProfile,
    Description,
}

impl DwcTable {
    /// All tables, core first.
    pub const ALL: [DwcTable; 4] = [
        DwcTable::Taxon,
        DwcTable::Distribution,
        DwcTable::SpeciesProfile,
        DwcTable::Description,
    ];

    /// Output file name within the archive directory.
    pub fn file_name(self) -> &'static str {
        match self {
            DwcTable::Taxon => "taxon.csv",
            DwcTable::Distribution => "distribution.csv",
            DwcTable::SpeciesProfile => "speciesprofile.csv",
            DwcTable::Description => "description.csv",
        }
    }

    /// Darwin Core Archive row type URI.
    pub fn row_type(self) -> &'static str {
        match self {
            DwcTable::Taxon => "http://rs.tdwg.org/dwc/terms/Taxon",
            DwcTable::Distribution => "http://rs.gbif.org/terms/1.0/Distribution",
            DwcTable::SpeciesProfile => "http://rs.gbif.org/terms/1.0/SpeciesProfile",
            DwcTable::Description => "http://rs.gbif.org/terms/1.0/Description",
        }
    }

    /// Column metadata in output order.
    pub fn terms(self) -> &'static [DwcTerm] {
        match self {
            DwcTable::Taxon => TAXON_TERMS,
            DwcTable::Distribution => DISTRIBUTION_TERMS,
            DwcTable::SpeciesProfile => SPECIES_PROFILE_TERMS,
            DwcTable::Description => DESCRIPTION_TERMS,
        }
    }

    /// Display label for summaries.
    pub fn label(self) -> &'static str {
        match self {
            DwcTable::Taxon => "Taxon",
            DwcTable::Distribution => "Distribution",
            DwcTable::SpeciesProfile => "Species profile",
            DwcTable::Description => "Description",
        }
    }

    /// True for the archive core table.
    pub fn is_core(self) -> bool {
        matches!(self, DwcTable::Taxon)
    }
}

impl fmt::Display for DwcTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
