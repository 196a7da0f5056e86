//! Configuration entities.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoConfig {
    /// Path of the persisted task collection
    #[serde(default = "default_store_file", rename = "storeFile")]
    pub store_file: PathBuf,

    /// Pattern an explicit due date must match to be stored verbatim
    #[serde(default = "default_date_pattern", rename = "datePattern")]
    pub date_pattern: String,

    /// chrono format used when a day offset is resolved to a date
    #[serde(default = "default_date_format", rename = "dateFormat")]
    pub date_format: String,

    /// File name used when a JSON export is given a blank name
    #[serde(default = "default_json_export_name", rename = "jsonExportName")]
    pub json_export_name: String,

    /// File name used when a CSV export is given a blank name
    #[serde(default = "default_csv_export_name", rename = "csvExportName")]
    pub csv_export_name: String,

    /// Show the startup banner
    #[serde(default = "default_show_banner", rename = "showBanner")]
    pub show_banner: bool,
}

fn default_store_file() -> PathBuf {
    PathBuf::from("ToDo-tasks.json")
}

fn default_date_pattern() -> String {
    r"^\d{2}\.\d{2}\.\d{4}$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_json_export_name() -> String {
    "tasks.json".to_string()
}

fn default_csv_export_name() -> String {
    "tasks.csv".to_string()
}

const fn default_show_banner() -> bool {
    true
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            store_file: default_store_file(),
            date_pattern: default_date_pattern(),
            date_format: default_date_format(),
            json_export_name: default_json_export_name(),
            csv_export_name: default_csv_export_name(),
            show_banner: default_show_banner(),
        }
    }
}

impl TodoConfig {
    /// Default configuration pointed at a different store file
    pub fn with_store_file(store_file: impl Into<PathBuf>) -> Self {
        Self {
            store_file: store_file.into(),
            ..Self::default()
        }
    }
}
