use crate::domain::listing::{ResultTable, COLUMNS};
use crate::errors::ServerError;
use rust_xlsxwriter::Workbook;

/// Excel refuses string cells longer than this many characters.
pub const MAX_CELL_CHARS: usize = 32_767;

/// Cuts free text down to what a single cell can hold, on a char boundary.
fn cell_text(text: &str) -> &str {
    match text.char_indices().nth(MAX_CELL_CHARS) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

pub fn write_xlsx(table: &ResultTable) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // Headers
    for (col, header) in COLUMNS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    // Rows
    for (i, listing) in table.iter().enumerate() {
        let r = (i + 1) as u32;

        // Unknown price stays a blank cell, same as the CSV.
        if let Some(price) = listing.price {
            worksheet
                .write_number(r, 0, price as f64)
                .map_err(|e| ServerError::XlsxError(format!("Failed to write price: {}", e)))?;
        }

        worksheet
            .write_string(r, 1, listing.price_band.as_str())
            .map_err(|e| ServerError::XlsxError(format!("Failed to write price band: {}", e)))?;

        worksheet
            .write_number(r, 2, listing.beauty_score as f64)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write beauty score: {}", e)))?;

        worksheet
            .write_string(r, 3, listing.virality.as_str())
            .map_err(|e| ServerError::XlsxError(format!("Failed to write virality: {}", e)))?;

        worksheet
            .write_string(r, 4, listing.cluster.as_str())
            .map_err(|e| ServerError::XlsxError(format!("Failed to write cluster: {}", e)))?;

        worksheet
            .write_string(r, 5, cell_text(&listing.location))
            .map_err(|e| ServerError::XlsxError(format!("Failed to write location: {}", e)))?;

        worksheet
            .write_string(r, 6, listing.location_growth.as_str())
            .map_err(|e| {
                ServerError::XlsxError(format!("Failed to write location growth: {}", e))
            })?;

        worksheet
            .write_number(r, 7, listing.film_score as f64)
            .map_err(|e| ServerError::XlsxError(format!("Failed to write film score: {}", e)))?;

        worksheet
            .write_string(r, 8, cell_text(&listing.hook))
            .map_err(|e| ServerError::XlsxError(format!("Failed to write hook: {}", e)))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {}", e)))
}
