//! User settings for Pocketbook
//!
//! Manages display and default preferences stored in `config.json`.

use serde::{Deserialize, Serialize};

use super::paths::PocketbookPaths;
use crate::error::PocketbookError;

/// User settings for Pocketbook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol printed in front of amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Color given to new categories when none is specified
    #[serde(default = "default_category_color")]
    pub default_category_color: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Width of the terminal bar chart in the monthly report
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,

    /// Whether history snapshots are written after each change
    #[serde(default = "default_true")]
    pub history_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_category_color() -> String {
    "#3498db".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_chart_width() -> usize {
    30
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_category_color: default_category_color(),
            date_format: default_date_format(),
            chart_width: default_chart_width(),
            history_enabled: default_true(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &PocketbookPaths) -> Result<Self, PocketbookError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                PocketbookError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                PocketbookError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PocketbookPaths) -> Result<(), PocketbookError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            PocketbookError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            PocketbookError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
