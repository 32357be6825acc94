// src/domain/location.rs

use crate::domain::listing::{LocationGrowth, UNKNOWN_LOCATION};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Letters, spaces and commas straight after a literal "in ".
    static ref LOCATION_REGEX: Regex = Regex::new(r"in ([A-Za-z ,]+)").unwrap();
}

pub const HIGH_ENGAGEMENT_CITIES: [&str; 7] = [
    "London",
    "Edinburgh",
    "Brighton",
    "Cornwall",
    "Liverpool",
    "Manchester",
    "Bath",
];

pub const MEDIUM_ENGAGEMENT_CITIES: [&str; 7] = [
    "Bristol",
    "York",
    "Leeds",
    "Glasgow",
    "Cardiff",
    "Cambridge",
    "Oxford",
];

/// Best-effort place name: whatever follows the first "in ".
///
/// This is a heuristic. "in" inside another word ("within walking distance")
/// matches too, and "In London" at the start of a sentence does not.
pub fn extract_location(text: &str) -> String {
    LOCATION_REGEX
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim_matches(|c: char| c == ',' || c.is_whitespace()))
        .filter(|loc| !loc.is_empty())
        .unwrap_or(UNKNOWN_LOCATION)
        .to_string()
}

/// High-engagement cities are checked first, so a location naming both tiers is High.
pub fn location_growth(location: &str) -> LocationGrowth {
    let lower = location.to_lowercase();
    let mentions = |cities: &[&str]| cities.iter().any(|city| lower.contains(&city.to_lowercase()));

    if mentions(&HIGH_ENGAGEMENT_CITIES) {
        LocationGrowth::High
    } else if mentions(&MEDIUM_ENGAGEMENT_CITIES) {
        LocationGrowth::Medium
    } else {
        LocationGrowth::Low
    }
}
