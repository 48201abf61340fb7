use crate::charts::{Axis, ChartSpec, DataPoint, Series};
use crate::config::DashboardConfig;
use chrono::{DateTime, Utc};

/// Builds the "no data yet" chart: a single point at `now`, plotted against
/// a fixed y-range. Axis titles are filled in by the caller, same as for
/// populated charts.
pub fn placeholder_chart(
    now: DateTime<Utc>,
    y_value: f64,
    y_range: (f64, f64),
    log_scale: bool,
    config: &DashboardConfig,
) -> ChartSpec {
    let series = vec![Series {
        name: String::new(),
        color: None,
        points: vec![DataPoint {
            timestamp: now,
            value: y_value,
        }],
    }];
    let mut y_axis = Axis::linear();
    y_axis.log_scale = log_scale;
    y_axis.range = Some(y_range);
    ChartSpec::new(series, Axis::linear(), y_axis, config)
}
