// src/domain/hook.rs

use crate::domain::listing::PriceBand;

/// Standout features, checked in this order. The first hit writes the hook.
pub const STANDOUT_PATTERNS: &[(&str, &str)] = &[
    ("crittall", "these Crittall windows are doing the heavy lifting"),
    ("vaulted", "the vaulted ceilings are outrageous"),
    ("sea view", "the sea view is absolutely ridiculous"),
    ("grade ii", "it's literally a protected Grade II listed building"),
    ("loft", "this loft conversion goes way harder than it needs to"),
    ("architect", "the architect clearly had something to prove"),
    ("panoramic", "the panoramic view is borderline disrespectful"),
];

/// Phrase for the highest-priority standout feature mentioned, if any.
pub fn standout_feature(text: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();
    STANDOUT_PATTERNS
        .iter()
        .find(|(key, _)| lower.contains(key))
        .map(|(_, phrase)| *phrase)
}

/// One marketing sentence per listing. No randomness.
pub fn generate_hook(text: &str, beauty: u32, band: PriceBand, location: &str) -> String {
    if let Some(standout) = standout_feature(text) {
        return format!("Right, this house in {location} has {standout}.");
    }
    if beauty >= 9 {
        return format!(
            "Right, this might be one of the nicest houses for sale right now in {location}."
        );
    }
    if band == PriceBand::MidHigh {
        return format!("Right, this house is stupidly good value for {location}.");
    }
    format!("Right, this house is way more interesting than it first looks in {location}.")
}
