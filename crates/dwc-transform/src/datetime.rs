//! Observation interval derivation.
//!
//! Date values stay opaque strings end to end; no calendar parsing or
//! validation happens here. The interval notation follows ISO 8601 open
//! ranges: a missing endpoint leaves its side of the `/` empty.

/// Derive `eventDate` from the first and last observation dates.
///
/// | first   | last    | result          |
/// |---------|---------|-----------------|
/// | absent  | absent  | `None`          |
/// | absent  | present | `"/last"`       |
/// | present | absent  | `"first/"`      |
/// | present | present | `"first/last"`  |
pub fn event_date(first: Option<&str>, last: Option<&str>) -> Option<String> {
    match (first, last) {
        (None, None) => None,
        (None, Some(last)) => Some(format!("/{last}")),
        (Some(first), None) => Some(format!("{first}/")),
        (Some(first), Some(last)) => Some(format!("{first}/{last}")),
    }
}
