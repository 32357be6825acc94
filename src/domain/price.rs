// src/domain/price.rs

use crate::domain::listing::PriceBand;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Pound sign immediately followed by digits and thousands separators.
    static ref PRICE_REGEX: Regex = Regex::new(r"£([0-9,]+)").unwrap();
}

const MID_FLOOR: u64 = 500_000;
const MID_HIGH_FLOOR: u64 = 1_500_000;
const HIGH_FLOOR: u64 = 4_000_000;

/// Pulls the first `£1,234,567` style amount out of the text.
///
/// Only the first occurrence counts; a listing quoting several prices is
/// scored on whichever comes first. A match without any digits, or one too
/// large for a `u64`, is treated as no price at all.
pub fn extract_price(text: &str) -> Option<u64> {
    let caps = PRICE_REGEX.captures(text)?;
    let digits: String = caps[1].chars().filter(|c| *c != ',').collect();
    digits.parse().ok()
}

pub fn price_band(price: Option<u64>) -> PriceBand {
    match price {
        None => PriceBand::Unknown,
        Some(p) if p < MID_FLOOR => PriceBand::Low,
        Some(p) if p < MID_HIGH_FLOOR => PriceBand::Mid,
        Some(p) if p < HIGH_FLOOR => PriceBand::MidHigh,
        Some(_) => PriceBand::High,
    }
}
