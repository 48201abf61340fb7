//! Schema and timestamp validation for stored datasets.

use crate::data_models::{parse_timestamp, CellValue, DataTable};
use crate::errors::ChartError;
use chrono::{DateTime, Utc};

/// Timestamp column shared by both device exports.
pub const DATETIME_COLUMN: &str = "Datetime";

/// The particle counter export: `Datetime` plus six size-bucket columns.
pub const PARTICLE_COLUMN_COUNT: usize = 7;

pub fn require_column(table: &DataTable, name: &str) -> Result<(), ChartError> {
    if table.has_column(name) {
        Ok(())
    } else {
        Err(ChartError::MissingColumn {
            name: name.to_string(),
        })
    }
}

/// Checks the particle dataset shape before the positional bucket renaming:
/// exactly seven columns with `Datetime` first. Anything else would either
/// fail the rename or silently mislabel the size buckets.
pub fn check_particle_schema(table: &DataTable) -> Result<(), ChartError> {
    if table.columns.len() != PARTICLE_COLUMN_COUNT {
        return Err(ChartError::SchemaMismatch {
            expected: PARTICLE_COLUMN_COUNT,
            found: table.columns.len(),
        });
    }
    if table.columns[0] != DATETIME_COLUMN {
        return Err(ChartError::MissingColumn {
            name: DATETIME_COLUMN.to_string(),
        });
    }
    Ok(())
}

/// Parses the `Datetime` column of every row and returns `(row_index,
/// timestamp)` pairs sorted by timestamp. Charting walks rows in this order.
pub fn datetime_index(table: &DataTable) -> Result<Vec<(usize, DateTime<Utc>)>, ChartError> {
    require_column(table, DATETIME_COLUMN)?;

    let mut index = Vec::with_capacity(table.len());
    for (row_index, row) in table.rows.iter().enumerate() {
        let raw = match row.get(DATETIME_COLUMN) {
            Some(CellValue::Text(s)) => s.clone(),
            Some(CellValue::Number(n)) => n.to_string(),
            _ => String::new(),
        };
        let timestamp = parse_timestamp(&raw).ok_or_else(|| ChartError::TimestampParseError {
            row: row_index,
            value: raw.clone(),
        })?;
        index.push((row_index, timestamp));
    }
    index.sort_by_key(|(_, ts)| *ts);
    Ok(index)
}
