//! Interchange codecs for the task collection.
//!
//! JSON is both the persisted store format and an export/import target.
//! CSV is export/import only.

pub mod csv;
pub mod json;

use crate::entities::Task;
use crate::errors::{TodoError, TodoResult};

/// Export/import target selected by a single-letter choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Csv,
}

impl Format {
    /// Parse the `j` / `c` menu choice (case-insensitive)
    pub fn from_choice(choice: &str) -> TodoResult<Self> {
        match choice.trim().to_lowercase().as_str() {
            "j" => Ok(Self::Json),
            "c" => Ok(Self::Csv),
            _ => Err(TodoError::UnsupportedFormat {
                choice: choice.to_string(),
            }),
        }
    }

    /// File extension without the dot
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }

    pub fn encode(self, tasks: &[Task]) -> TodoResult<Vec<u8>> {
        match self {
            Self::Json => json::encode(tasks),
            Self::Csv => self::csv::encode(tasks),
        }
    }

    pub fn decode(self, bytes: &[u8]) -> TodoResult<Vec<Task>> {
        match self {
            Self::Json => json::decode(bytes),
            Self::Csv => self::csv::decode(bytes),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "JSON"),
            Self::Csv => write!(f, "CSV"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_choice() {
        assert_eq!(Format::from_choice("j").unwrap(), Format::Json);
        assert_eq!(Format::from_choice("C").unwrap(), Format::Csv);
        assert_eq!(Format::from_choice(" j ").unwrap(), Format::Json);
    }

    #[test]
    fn test_unsupported_choice() {
        for choice in ["", "x", "json", "csv"] {
            let err = Format::from_choice(choice).unwrap_err();
            assert!(matches!(err, TodoError::UnsupportedFormat { .. }), "{choice}");
        }
    }
}
