use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Figure-level rendering settings shared by all three charts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Figure template name handed to the charting layer.
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Point marker size in pixels.
    #[serde(default = "default_marker_size")]
    pub marker_size: u32,
    /// Dimensions used when a chart is exported as an image.
    #[serde(default = "default_export_width")]
    pub export_width: u32,
    #[serde(default = "default_export_height")]
    pub export_height: u32,
}

fn default_theme() -> String {
    "cerulean".to_string()
}

fn default_marker_size() -> u32 {
    3
}

fn default_export_width() -> u32 {
    1101
}

fn default_export_height() -> u32 {
    675
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            marker_size: default_marker_size(),
            export_width: default_export_width(),
            export_height: default_export_height(),
        }
    }
}

impl DashboardConfig {
    /// Loads the configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }
        let file = File::open(path).map_err(|e| ConfigError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let reader = BufReader::new(file);
        let config: DashboardConfig =
            serde_json::from_reader(reader).map_err(|e| ConfigError::JsonParseError {
                path: path.to_path_buf(),
                source: e,
            })?;
        Ok(config)
    }
}
