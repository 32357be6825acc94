// src/cli.rs
//
// The `score` and `show` subcommands, kept apart from stdin/stdout and the
// filesystem so they can run against in-memory buffers.

use crate::domain::analyse;
use crate::errors::ServerError;
use crate::spreadsheets::{read_csv, write_csv};
use std::io::{Read, Write};
use tracing_subscriber::EnvFilter;

/// Added on top of whatever `RUST_LOG` says when `score --verbose` is given.
const VERBOSE_DIRECTIVE: &str = "listing_scorer=debug";

/// Log filter for the process: `RUST_LOG` if it parses, else `info`.
/// Verbose mode always turns on debug output for this crate.
pub fn log_filter(verbose: bool, env: Option<&str>) -> EnvFilter {
    let mut filter = env
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"));

    if verbose {
        if let Ok(directive) = VERBOSE_DIRECTIVE.parse() {
            filter = filter.add_directive(directive);
        }
    }
    filter
}

/// Score every listing in `input` and write the CSV to `out`.
///
/// `source` names the input in the decode error. Returns the row count.
pub fn score<R: Read, W: Write>(
    mut input: R,
    source: &str,
    mut out: W,
) -> Result<usize, ServerError> {
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes)?;

    let text =
        String::from_utf8(bytes).map_err(|e| ServerError::Decode(format!("{source}: {e}")))?;

    let table = analyse(&text);
    out.write_all(&write_csv(&table)?)?;
    out.flush()?;
    Ok(table.len())
}

/// Print a previously exported CSV as an aligned text table, one line per row.
pub fn show<R: Read, W: Write>(csv: R, mut out: W) -> Result<usize, ServerError> {
    let rows = read_csv(csv)?;

    for row in &rows {
        let price = row.price.map(|p| format!("£{p}")).unwrap_or_default();
        writeln!(
            out,
            "{:>11}  {:<8}  {:>2}  {:<6}  {:<9}  {:<24}  {:<6}  {:>2}  {}",
            price,
            row.price_band,
            row.beauty_score,
            row.virality,
            row.cluster,
            row.location,
            row.location_growth,
            row.film_score,
            row.hook,
        )?;
    }
    Ok(rows.len())
}
