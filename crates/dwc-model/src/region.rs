use std::fmt;

/// Belgian administrative regions recognized in the checklist `location`
/// column.
///
/// The lookup is deliberately closed: any other location value (including an
/// absent one) maps to no region, and the distribution output carries empty
/// `locationID`/`locality` fields for it. Unrecognized values are surfaced
/// as warnings by a side-band check, never as failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BelgianRegion {
    Flanders,
    Wallonia,
    Brussels,
}

impl BelgianRegion {
    /// Resolve a checklist `location` value to a region, exact match only.
    pub fn from_location(value: &str) -> Option<Self> {
        match value {
            "Flanders" => Some(BelgianRegion::Flanders),
            "Wallonia" => Some(BelgianRegion::Wallonia),
            "Brussels" => Some(BelgianRegion::Brussels),
            _ => None,
        }
    }

    /// ISO 3166-2 subdivision identifier.
    pub fn location_id(self) -> &'static str {
        match self {
            BelgianRegion::Flanders => "ISO_3166-2:BE-VLG",
            BelgianRegion::Wallonia => "ISO_3166-2:BE-WAL",
            BelgianRegion::Brussels => "ISO_3166-2:BE-BRU",
        }
    }

    /// Official English region name used for `locality`.
    pub fn locality(self) -> &'static str {
        match self {
            BelgianRegion::Flanders => "Flemish Region",
            BelgianRegion::Wallonia => "Walloon Region",
            BelgianRegion::Brussels => "Brussels-Capital Region",
        }
    }

    /// The checklist spelling of the region.
    pub fn as_str(self) -> &'static str {
        match self {
            BelgianRegion::Flanders => "Flanders",
            BelgianRegion::Wallonia => "Wallonia",
            BelgianRegion::Brussels => "Brussels",
        }
    }
}

impl fmt::Display for BelgianRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
