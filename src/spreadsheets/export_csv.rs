use crate::domain::listing::{ResultTable, ScoredListing, COLUMNS};
use crate::errors::ServerError;
use std::io::Read;

/// Serialize a result table as UTF-8 CSV with a header row.
///
/// An absent price is written as an empty cell.
pub fn write_csv(table: &ResultTable) -> Result<Vec<u8>, ServerError> {
    // Header is written by hand so an empty table still gets one.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer
        .write_record(COLUMNS)
        .map_err(|e| ServerError::CsvError(format!("Failed to write header: {e}")))?;

    for (i, row) in table.iter().enumerate() {
        writer
            .serialize(row)
            .map_err(|e| ServerError::CsvError(format!("Failed to write row {}: {e}", i + 1)))?;
    }

    writer
        .into_inner()
        .map_err(|e| ServerError::CsvError(format!("Failed to flush CSV: {e}")))
}

/// Parse a CSV produced by [`write_csv`] back into rows.
pub fn read_csv<R: Read>(reader: R) -> Result<ResultTable, ServerError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (line_num, result) in csv_reader.deserialize::<ScoredListing>().enumerate() {
        let row = result.map_err(|e| {
            ServerError::CsvError(format!("CSV parse error at line {}: {e}", line_num + 2))
        })?;
        rows.push(row);
    }
    Ok(rows)
}
