//! Temperature and humidity charts built from the datalogger dataset.

use crate::charts::placeholder::placeholder_chart;
use crate::charts::{date_buttons, Axis, ChartSpec, DataPoint, Series, TIME_AXIS_TITLE};
use crate::config::DashboardConfig;
use crate::data_models::{CellValue, DataTable};
use crate::errors::ChartError;
use crate::validation::{datetime_index, require_column};
use chrono::{DateTime, Utc};
use log::warn;

/// Channel column names as the datalogger writes them.
pub const TEMPERATURE_COLUMN: &str = "Chan 1 - Deg C";
pub const HUMIDITY_COLUMN: &str = "Chan 2 - %RH";

pub const TEMPERATURE_AXIS_TITLE: &str = "Temperature (°C)";
pub const HUMIDITY_AXIS_TITLE: &str = "Relative Humidity (%)";

/// Fixed y-ranges for the absent-data placeholders.
pub const TEMPERATURE_PLACEHOLDER_RANGE: (f64, f64) = (0.0, 20.0);
pub const HUMIDITY_PLACEHOLDER_RANGE: (f64, f64) = (0.0, 40.0);

#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentCharts {
    pub temperature: ChartSpec,
    pub humidity: ChartSpec,
}

/// Builds the temperature and humidity chart pair. With no dataset, both are
/// placeholders with an off-scale point at `now`; otherwise each channel
/// becomes one line over the timestamp-sorted `Datetime` index.
pub fn render(
    dataset: Option<&DataTable>,
    config: &DashboardConfig,
    now: DateTime<Utc>,
) -> Result<EnvironmentCharts, ChartError> {
    let (mut temperature, mut humidity) = match dataset {
        Some(table) => {
            require_column(table, TEMPERATURE_COLUMN)?;
            require_column(table, HUMIDITY_COLUMN)?;
            let index = datetime_index(table)?;
            (
                line_chart(channel_series(table, &index, TEMPERATURE_COLUMN), config),
                line_chart(channel_series(table, &index, HUMIDITY_COLUMN), config),
            )
        }
        None => (
            placeholder_chart(now, -1.0, TEMPERATURE_PLACEHOLDER_RANGE, false, config),
            placeholder_chart(now, -1.0, HUMIDITY_PLACEHOLDER_RANGE, false, config),
        ),
    };

    temperature.x_axis.title = TIME_AXIS_TITLE.to_string();
    temperature.y_axis.title = TEMPERATURE_AXIS_TITLE.to_string();
    humidity.x_axis.title = TIME_AXIS_TITLE.to_string();
    humidity.y_axis.title = HUMIDITY_AXIS_TITLE.to_string();

    Ok(EnvironmentCharts {
        temperature,
        humidity,
    })
}

fn line_chart(series: Series, config: &DashboardConfig) -> ChartSpec {
    let mut x_axis = Axis::linear();
    x_axis.range_selector = date_buttons();
    ChartSpec::new(vec![series], x_axis, Axis::linear(), config)
}

fn channel_series(table: &DataTable, index: &[(usize, DateTime<Utc>)], column: &str) -> Series {
    let mut points = Vec::with_capacity(index.len());
    for (row, timestamp) in index {
        match table.rows[*row].get(column).and_then(CellValue::as_f64) {
            Some(value) => points.push(DataPoint {
                timestamp: *timestamp,
                value,
            }),
            None => warn!("Skipping row {} for '{}': no numeric value", row, column),
        }
    }
    Series {
        name: column.to_string(),
        color: None,
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::csv_parser::parse_table;
    use approx::assert_relative_eq;
    use chrono::TimeZone;

    fn config() -> DashboardConfig {
        DashboardConfig::default()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_single_row_dataset() {
        let table = parse_table(
            "Datetime,Chan 1 - Deg C,Chan 2 - %RH\n2024-01-01T00:00,20.5,45.0\n",
        )
        .unwrap()
        .unwrap();
        let charts = render(Some(&table), &config(), now()).unwrap();

        assert_eq!(charts.temperature.series.len(), 1);
        let temp_points = &charts.temperature.series[0].points;
        assert_eq!(temp_points.len(), 1);
        assert_relative_eq!(temp_points[0].value, 20.5);
        assert_eq!(
            temp_points[0].timestamp,
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        );

        let rh_points = &charts.humidity.series[0].points;
        assert_relative_eq!(rh_points[0].value, 45.0);

        assert_eq!(charts.temperature.y_axis.title, TEMPERATURE_AXIS_TITLE);
        assert_eq!(charts.humidity.y_axis.title, HUMIDITY_AXIS_TITLE);
        assert_eq!(charts.temperature.x_axis.range_selector.len(), 8);
        assert_eq!(charts.humidity.x_axis.range_selector.len(), 8);
    }

    #[test]
    fn test_absent_dataset_placeholders() {
        let charts = render(None, &config(), now()).unwrap();

        let temp = &charts.temperature;
        assert_eq!(temp.series[0].points.len(), 1);
        assert_eq!(temp.series[0].points[0].timestamp, now());
        assert_relative_eq!(temp.series[0].points[0].value, -1.0);
        assert_eq!(temp.y_axis.range, Some(TEMPERATURE_PLACEHOLDER_RANGE));
        assert_eq!(temp.y_axis.title, TEMPERATURE_AXIS_TITLE);

        assert_eq!(
            charts.humidity.y_axis.range,
            Some(HUMIDITY_PLACEHOLDER_RANGE)
        );
        assert_relative_eq!(charts.humidity.series[0].points[0].value, -1.0);
    }

    #[test]
    fn test_points_sorted_by_timestamp() {
        let table = parse_table(
            "Datetime,Chan 1 - Deg C,Chan 2 - %RH\n\
             2024-01-02T00:00,21.0,44.0\n\
             2024-01-01T00:00,20.0,45.0\n",
        )
        .unwrap()
        .unwrap();
        let charts = render(Some(&table), &config(), now()).unwrap();
        let points = &charts.temperature.series[0].points;
        assert!(points[0].timestamp < points[1].timestamp);
        assert_relative_eq!(points[0].value, 20.0);
    }

    #[test]
    fn test_missing_channel_column() {
        let table = parse_table("Datetime,Chan 1 - Deg C\n2024-01-01T00:00,20.0\n")
            .unwrap()
            .unwrap();
        assert!(matches!(
            render(Some(&table), &config(), now()),
            Err(ChartError::MissingColumn { .. })
        ));
    }

    #[test]
    fn test_non_numeric_cell_skipped() {
        let table = parse_table(
            "Datetime,Chan 1 - Deg C,Chan 2 - %RH\n\
             2024-01-01T00:00,oops,45.0\n\
             2024-01-01T01:00,21.0,44.0\n",
        )
        .unwrap()
        .unwrap();
        let charts = render(Some(&table), &config(), now()).unwrap();
        assert_eq!(charts.temperature.series[0].points.len(), 1);
        assert_eq!(charts.humidity.series[0].points.len(), 2);
    }
}
