//! Particle-count chart: one log-scale line per selected size bucket.

use crate::buckets::BucketSelection;
use crate::charts::placeholder::placeholder_chart;
use crate::charts::{date_buttons, Axis, ChartSpec, DataPoint, Series, TIME_AXIS_TITLE};
use crate::config::DashboardConfig;
use crate::data_models::{CellValue, DataTable};
use crate::errors::ChartError;
use crate::validation::{check_particle_schema, datetime_index};
use chrono::{DateTime, Utc};
use log::warn;

pub const PARTICLE_AXIS_TITLE: &str = "Particles/ft³";

/// Shared log-scale y-range for placeholder and populated charts.
pub const PARTICLE_RANGE: (f64, f64) = (1.0, 10_000_000.0);

/// Builds the particle chart for the current selection. The six data columns
/// are mapped to size buckets by position (column i+1 is bucket i); the
/// schema is checked before the rename.
pub fn render(
    dataset: Option<&DataTable>,
    selection: &BucketSelection,
    config: &DashboardConfig,
    now: DateTime<Utc>,
) -> Result<ChartSpec, ChartError> {
    let mut chart = match dataset {
        Some(table) => {
            check_particle_schema(table)?;
            let index = datetime_index(table)?;

            let order = selection.render_order();
            let mut series = Vec::with_capacity(order.len());
            for bucket in order {
                // Positional rename: the bucket's data lives in the column at
                // its offset, whatever that column's original header said.
                let source_column = &table.columns[bucket.column_offset() + 1];
                let mut points = Vec::with_capacity(index.len());
                for (row, timestamp) in &index {
                    match table.rows[*row].get(source_column).and_then(CellValue::as_f64) {
                        Some(value) => points.push(DataPoint {
                            timestamp: *timestamp,
                            value,
                        }),
                        None => warn!(
                            "Skipping row {} for bucket {}: no numeric value",
                            row,
                            bucket.label()
                        ),
                    }
                }
                series.push(Series {
                    name: bucket.label().to_string(),
                    color: Some(bucket.color().to_string()),
                    points,
                });
            }

            let mut x_axis = Axis::linear();
            x_axis.range_selector = date_buttons();
            ChartSpec::new(series, x_axis, Axis::log_with_range(PARTICLE_RANGE), config)
        }
        None => placeholder_chart(now, 0.0, PARTICLE_RANGE, true, config),
    };

    chart.x_axis.title = TIME_AXIS_TITLE.to_string();
    chart.y_axis.title = PARTICLE_AXIS_TITLE.to_string();
    chart.legend_title = None;

    Ok(chart)
}
