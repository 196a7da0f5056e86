//! Due-date input resolution.

use chrono::format::{Item, StrftimeItems};
use chrono::{Days, NaiveDate};
use regex::Regex;
use tracing::warn;

use crate::entities::{DueDate, TodoConfig};
use crate::errors::{TodoError, TodoResult};

/// Turns the free-text due prompt into a stored due date.
///
/// - input matching the date pattern is stored verbatim
/// - digits only means "N days from today", resolved once with the
///   configured chrono format (ISO `%Y-%m-%d` unless overridden)
/// - anything else stores no due date
#[derive(Debug, Clone)]
pub struct DueResolver {
    pattern: Regex,
    date_format: String,
}

impl DueResolver {
    pub fn new(date_pattern: &str, date_format: &str) -> TodoResult<Self> {
        let pattern = Regex::new(date_pattern).map_err(|e| TodoError::InvalidConfigValue {
            key: "datePattern".to_string(),
            reason: e.to_string(),
        })?;

        if StrftimeItems::new(date_format).any(|item| matches!(item, Item::Error)) {
            return Err(TodoError::InvalidConfigValue {
                key: "dateFormat".to_string(),
                reason: format!("'{date_format}' is not a valid date format"),
            });
        }

        Ok(Self {
            pattern,
            date_format: date_format.to_string(),
        })
    }

    pub fn from_config(config: &TodoConfig) -> TodoResult<Self> {
        Self::new(&config.date_pattern, &config.date_format)
    }

    pub fn resolve(&self, input: &str, today: NaiveDate) -> Option<DueDate> {
        if self.pattern.is_match(input) {
            return Some(DueDate::Text(input.to_string()));
        }

        if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let resolved = input
            .parse::<u64>()
            .ok()
            .and_then(|days| today.checked_add_days(Days::new(days)));

        match resolved {
            Some(date) => Some(DueDate::Text(date.format(&self.date_format).to_string())),
            None => {
                warn!(offset = input, "Day offset out of calendar range, ignoring due date");
                None
            }
        }
    }
}
