// src/domain/listing.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal price category derived from fixed thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PriceBand {
    Unknown,
    Low,
    Mid,
    #[serde(rename = "Mid-High")]
    MidHigh,
    High,
}

impl PriceBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceBand::Unknown => "Unknown",
            PriceBand::Low => "Low",
            PriceBand::Mid => "Mid",
            PriceBand::MidHigh => "Mid-High",
            PriceBand::High => "High",
        }
    }
}

/// Coarse guess at how shareable a listing is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Virality {
    Low,
    Medium,
    High,
}

impl Virality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Virality::Low => "Low",
            Virality::Medium => "Medium",
            Virality::High => "High",
        }
    }
}

/// Presumed market momentum of the place a listing is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationGrowth {
    Low,
    Medium,
    High,
}

impl LocationGrowth {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationGrowth::Low => "Low",
            LocationGrowth::Medium => "Medium",
            LocationGrowth::High => "High",
        }
    }
}

/// Fixed label attached to each virality tier. Not a statistical grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cluster {
    #[serde(rename = "Cluster 0")]
    Zero,
    #[serde(rename = "Cluster 1")]
    One,
    #[serde(rename = "Cluster 2")]
    Two,
}

impl Cluster {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cluster::Zero => "Cluster 0",
            Cluster::One => "Cluster 1",
            Cluster::Two => "Cluster 2",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.pad(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(PriceBand, Virality, LocationGrowth, Cluster);

/// Placeholder used when no place name can be pulled out of a listing.
pub const UNKNOWN_LOCATION: &str = "Unknown";

/// One scored row. Field names double as the exported column headers,
/// so the CSV, XLSX and JSON outputs all agree on naming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredListing {
    #[serde(rename = "Price")]
    pub price: Option<u64>,
    #[serde(rename = "Price Band")]
    pub price_band: PriceBand,
    #[serde(rename = "Beauty Score")]
    pub beauty_score: u32,
    #[serde(rename = "Virality")]
    pub virality: Virality,
    #[serde(rename = "Cluster")]
    pub cluster: Cluster,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Location Growth")]
    pub location_growth: LocationGrowth,
    #[serde(rename = "Film Score")]
    pub film_score: u32,
    #[serde(rename = "Hook")]
    pub hook: String,
}

/// Column headers, in render/export order.
pub const COLUMNS: [&str; 9] = [
    "Price",
    "Price Band",
    "Beauty Score",
    "Virality",
    "Cluster",
    "Location",
    "Location Growth",
    "Film Score",
    "Hook",
];

/// Scored listings in the order they appeared in the input.
pub type ResultTable = Vec<ScoredListing>;
