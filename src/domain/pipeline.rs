// src/domain/pipeline.rs

//! Turns a pasted blob of listings into a [`ResultTable`].
//!
//! Listings are separated by a blank line. Each non-empty block runs through
//! price -> band -> beauty -> location -> growth -> virality -> cluster ->
//! film score -> hook and becomes one row. Nothing here holds state between
//! calls: the same text always produces the same table.

use crate::domain::beauty::{beauty_breakdown, beauty_score};
use crate::domain::hook::generate_hook;
use crate::domain::listing::{ResultTable, ScoredListing};
use crate::domain::location::{extract_location, location_growth};
use crate::domain::price::{extract_price, price_band};
use crate::domain::scores::{cluster, film_score, virality};
use std::borrow::Cow;
use tracing::{debug, info};

const LISTING_SEPARATOR: &str = "\n\n";

/// Splits raw input into trimmed, non-empty listing texts.
pub fn split_listings(raw: &str) -> Vec<String> {
    let normalized: Cow<str> = if raw.contains('\r') {
        Cow::Owned(raw.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(raw)
    };

    normalized
        .split(LISTING_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn score_listing(text: &str) -> ScoredListing {
    let price = extract_price(text);
    let band = price_band(price);
    let beauty = beauty_score(text);
    let location = extract_location(text);
    let growth = location_growth(&location);
    let vir = virality(beauty, band);
    let film = film_score(beauty, vir, growth);
    let hook = generate_hook(text, beauty, band, &location);

    debug!(
        beauty,
        matched = ?beauty_breakdown(text),
        location = %location,
        "scored listing"
    );

    ScoredListing {
        price,
        price_band: band,
        beauty_score: beauty,
        virality: vir,
        cluster: cluster(vir),
        location,
        location_growth: growth,
        film_score: film,
        hook,
    }
}

/// Scores every listing in `raw`, in input order.
pub fn analyse(raw: &str) -> ResultTable {
    let table: ResultTable = split_listings(raw)
        .iter()
        .map(|text| score_listing(text))
        .collect();

    info!(listings = table.len(), "analysed listings");
    table
}
