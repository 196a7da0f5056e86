//! Error types for the todo crate.

use thiserror::Error;

/// Error types for task tracking
#[derive(Error, Debug, Clone)]
pub enum TodoError {
    // Position errors
    #[error("Please enter a valid number (got '{input}')")]
    InvalidNumber { input: String },

    #[error("Invalid task number {index}: expected 1..={len}")]
    InvalidIndex { index: String, len: usize },

    // Interchange errors
    #[error("Import file '{path}' not found")]
    ImportNotFound { path: String },

    #[error("Unsupported format '{choice}': choose 'j' (JSON) or 'c' (CSV)")]
    UnsupportedFormat { choice: String },

    #[error("Failed to parse JSON: {reason}")]
    JsonParseError { reason: String },

    #[error("Failed to parse CSV: {reason}")]
    CsvParseError { reason: String },

    // Storage errors
    #[error("Storage error: {reason}")]
    StorageError { reason: String },

    #[error("Failed to read file '{path}': {reason}")]
    FileReadError { path: String, reason: String },

    #[error("Failed to write file '{path}': {reason}")]
    FileWriteError { path: String, reason: String },

    // Configuration errors
    #[error("Configuration error: {reason}")]
    ConfigError { reason: String },

    #[error("Invalid configuration value for '{key}': {reason}")]
    InvalidConfigValue { key: String, reason: String },

    // Terminal errors
    #[error("Prompt failed: {reason}")]
    Prompt { reason: String },
}

impl TodoError {
    /// Whether the error came from malformed user input or file content
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidNumber { .. } | Self::JsonParseError { .. } | Self::CsvParseError { .. }
        )
    }
}

impl From<std::io::Error> for TodoError {
    fn from(err: std::io::Error) -> Self {
        Self::StorageError {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for TodoError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParseError {
            reason: err.to_string(),
        }
    }
}

impl From<csv::Error> for TodoError {
    fn from(err: csv::Error) -> Self {
        Self::CsvParseError {
            reason: err.to_string(),
        }
    }
}

impl From<dialoguer::Error> for TodoError {
    fn from(err: dialoguer::Error) -> Self {
        Self::Prompt {
            reason: err.to_string(),
        }
    }
}

/// Result type alias for todo operations
pub type TodoResult<T> = Result<T, TodoError>;
