//! CSV record loading.

use std::path::Path;

use crate::error::{CatalogError, CatalogResult};
use crate::types::RawRecord;

/// Read a CSV file into raw records.
///
/// Rules:
///
/// - CSV must have headers; each header becomes a field name.
/// - Every cell is kept as text; conversion happens in [`crate::factory`].
/// - A leading UTF-8 byte-order mark on the first header is ignored.
pub fn ingest_csv_from_path(path: impl AsRef<Path>) -> CatalogResult<Vec<RawRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    ingest_csv_from_reader(&mut rdr)
}

/// Read CSV data from an in-memory string.
pub fn ingest_csv_from_str(input: &str) -> CatalogResult<Vec<RawRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());
    ingest_csv_from_reader(&mut rdr)
}

/// Read CSV data from an existing CSV reader.
pub fn ingest_csv_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
) -> CatalogResult<Vec<RawRecord>> {
    let headers: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_owned())
        .collect();

    if headers.iter().all(String::is_empty) {
        return Err(CatalogError::SchemaMismatch {
            message: "csv input has no header row".to_string(),
        });
    }

    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result?;
        let record: RawRecord = headers
            .iter()
            .enumerate()
            .map(|(idx, header)| (header.clone(), row.get(idx).unwrap_or("")))
            .collect();
        records.push(record);
    }

    Ok(records)
}
