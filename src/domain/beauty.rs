// src/domain/beauty.rs

//! Keyword-weighted "beauty" score.
//!
//! Every listing starts at [`BASE_SCORE`]. Each vocabulary term found in the
//! lower-cased text adds its weight once, however often it is repeated. The
//! three vocabularies are summed independently, so a word listed in two of
//! them (e.g. "georgian") counts in both. The total is capped at
//! [`MAX_SCORE`]; there are no negative weights so nothing falls below the base.

pub const BASE_SCORE: u32 = 5;
pub const MAX_SCORE: u32 = 10;

/// General architectural vocabulary.
pub const BASE_KEYWORDS: &[(&str, u32)] = &[
    ("georgian", 3),
    ("victorian", 3),
    ("art deco", 4),
    ("period", 2),
    ("architect", 4),
    ("grade ii", 4),
    ("view", 2),
    ("sea", 3),
    ("restored", 3),
    ("unique", 2),
    ("warehouse", 3),
    ("conversion", 2),
];

/// Extra weighting for Georgian / Victorian period detail.
pub const PERIOD_KEYWORDS: &[(&str, u32)] = &[
    ("georgian", 5),
    ("victorian", 4),
    ("regency", 4),
    ("sash windows", 4),
    ("bay window", 3),
    ("period features", 4),
    ("original features", 3),
    ("cornicing", 3),
    ("coving", 3),
    ("fireplace", 2),
    ("townhouse", 3),
    ("stucco", 3),
    ("mouldings", 3),
    ("high ceilings", 4),
    ("cellar", 2),
    ("basement", 2),
];

/// Premium and contemporary features.
pub const PREMIUM_KEYWORDS: &[(&str, u32)] = &[
    ("crittall", 3),
    ("loft", 2),
    ("brutalist", 4),
    ("mid-century", 4),
    ("artisan", 2),
    ("handcrafted", 2),
    ("designer", 2),
    ("restoration", 2),
    ("vaulted", 3),
    ("double-height", 3),
    ("panoramic", 3),
    ("penthouse", 4),
];

const VOCABULARIES: [&[(&str, u32)]; 3] = [BASE_KEYWORDS, PERIOD_KEYWORDS, PREMIUM_KEYWORDS];

/// Every `(term, weight)` that matched, in vocabulary order.
pub fn beauty_breakdown(text: &str) -> Vec<(&'static str, u32)> {
    let lower = text.to_lowercase();

    VOCABULARIES
        .iter()
        .flat_map(|vocab| vocab.iter())
        .filter(|(term, _)| lower.contains(term))
        .copied()
        .collect()
}

pub fn beauty_score(text: &str) -> u32 {
    let bonus: u32 = beauty_breakdown(text).iter().map(|(_, w)| w).sum();
    (BASE_SCORE + bonus).min(MAX_SCORE)
}
