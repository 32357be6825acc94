// src/domain/scores.rs

use crate::domain::listing::{Cluster, LocationGrowth, PriceBand, Virality};

/// Determines how shareable a listing looks.
///
/// The order of checks matters: High needs both a top beauty score and a
/// Mid-High price, while Medium only looks at beauty.
pub fn virality(beauty: u32, band: PriceBand) -> Virality {
    if beauty >= 9 && band == PriceBand::MidHigh {
        return Virality::High;
    }
    if beauty >= 7 {
        return Virality::Medium;
    }
    Virality::Low
}

pub fn cluster(virality: Virality) -> Cluster {
    match virality {
        Virality::High => Cluster::Zero,
        Virality::Medium => Cluster::Two,
        Virality::Low => Cluster::One,
    }
}

fn virality_points(virality: Virality) -> u32 {
    match virality {
        Virality::High => 10,
        Virality::Medium => 6,
        Virality::Low => 2,
    }
}

fn growth_points(growth: LocationGrowth) -> u32 {
    match growth {
        LocationGrowth::High => 10,
        LocationGrowth::Medium => 5,
        LocationGrowth::Low => 1,
    }
}

/// Weighted blend: beauty 40%, virality 40%, location 20%, truncated.
///
/// Worked in tenths so the truncation is exact.
pub fn film_score(beauty: u32, virality: Virality, growth: LocationGrowth) -> u32 {
    (4 * beauty + 4 * virality_points(virality) + 2 * growth_points(growth)) / 10
}
