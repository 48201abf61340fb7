use crate::data_models::{CellValue, DataTable, RowRecord};
use crate::errors::ParseError;
use csv::ReaderBuilder;
use log::warn;

/// Parses decoded CSV text into a `DataTable`. The first line is the header;
/// every following line becomes one row record keyed by the trimmed header
/// names. Blank input yields `Ok(None)` — "no data yet" rather than an empty
/// table.
pub fn parse_table(text: &str) -> Result<Option<DataTable>, ParseError> {
    if text.trim().is_empty() {
        return Ok(None);
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| ParseError::HeaderReadError { source: e })?
        .clone();
    let columns: Vec<String> = headers.iter().map(|h| h.trim().to_string()).collect();

    let mut rows: Vec<RowRecord> = Vec::new();
    for (row_index, result) in reader.records().enumerate() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                // Header line is row 1.
                warn!("Skipping unreadable CSV row {}: {}", row_index + 2, e);
                continue;
            }
        };

        let mut row = RowRecord::with_capacity(columns.len());
        for (index, name) in columns.iter().enumerate() {
            let field = record.get(index).unwrap_or("");
            row.insert(name.clone(), CellValue::from_field(field));
        }
        rows.push(row);
    }

    Ok(Some(DataTable { columns, rows }))
}
