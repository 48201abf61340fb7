//! Chart descriptors: plain serializable values describing what the front
//! end should draw. Rebuilt wholesale on every store or selection change.

pub mod environment;
pub mod particles;
pub mod placeholder;

use crate::config::DashboardConfig;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// X-axis title shared by all three charts.
pub const TIME_AXIS_TITLE: &str = "Time";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DataPoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    /// Fixed CSS color name, `None` to let the template pick.
    pub color: Option<String>,
    pub points: Vec<DataPoint>,
}

/// Quick-select step unit for the x-axis range selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeStep {
    Day,
    Month,
    Year,
}

/// One range-selector button, stepping backward from the latest point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeButton {
    pub count: u32,
    pub step: RangeStep,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: String,
    pub log_scale: bool,
    /// Fixed display range; `None` autoscales.
    pub range: Option<(f64, f64)>,
    pub range_selector: Vec<RangeButton>,
}

impl Axis {
    pub fn linear() -> Self {
        Self {
            title: String::new(),
            log_scale: false,
            range: None,
            range_selector: Vec::new(),
        }
    }

    pub fn log_with_range(range: (f64, f64)) -> Self {
        Self {
            title: String::new(),
            log_scale: true,
            range: Some(range),
            range_selector: Vec::new(),
        }
    }
}

/// Image dimensions used by the chart's export-to-image control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageExport {
    pub width: u32,
    pub height: u32,
}

/// A complete chart description, ready to hand to a charting library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// `None` renders the legend without a title.
    pub legend_title: Option<String>,
    pub marker_size: u32,
    pub template: String,
    pub export: ImageExport,
}

impl ChartSpec {
    pub fn new(series: Vec<Series>, x_axis: Axis, y_axis: Axis, config: &DashboardConfig) -> Self {
        Self {
            series,
            x_axis,
            y_axis,
            legend_title: None,
            marker_size: config.marker_size,
            template: config.theme.clone(),
            export: ImageExport {
                width: config.export_width,
                height: config.export_height,
            },
        }
    }
}

/// The quick-range buttons attached to every populated chart:
/// 1D, 5D, 1M, 3M, 6M, 1Y, 3Y, 5Y, each stepping backward.
pub fn date_buttons() -> Vec<RangeButton> {
    vec![
        RangeButton { count: 1, step: RangeStep::Day, label: "1D" },
        RangeButton { count: 5, step: RangeStep::Day, label: "5D" },
        RangeButton { count: 1, step: RangeStep::Month, label: "1M" },
        RangeButton { count: 3, step: RangeStep::Month, label: "3M" },
        RangeButton { count: 6, step: RangeStep::Month, label: "6M" },
        RangeButton { count: 1, step: RangeStep::Year, label: "1Y" },
        RangeButton { count: 3, step: RangeStep::Year, label: "3Y" },
        RangeButton { count: 5, step: RangeStep::Year, label: "5Y" },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_buttons_shape() {
        let buttons = date_buttons();
        assert_eq!(buttons.len(), 8);
        assert_eq!(buttons[0].label, "1D");
        assert_eq!(buttons[7].label, "5Y");
        assert_eq!(buttons[7].count, 5);
        assert_eq!(buttons[7].step, RangeStep::Year);
    }

    #[test]
    fn test_range_step_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&RangeStep::Month).unwrap(), "\"month\"");
    }
}
