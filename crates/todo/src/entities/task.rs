//! Task entity and related types.

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Task priority levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum TaskPriority {
    #[default]
    Low,
    Medium,
    High,
}

impl TaskPriority {
    /// Map the `l`/`m`/`h` shorthand typed at the add prompt.
    ///
    /// Anything else, including blank input, falls back to `Low`.
    pub fn from_shorthand(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "m" => Self::Medium,
            "h" => Self::High,
            _ => Self::Low,
        }
    }

    /// Match a full priority name case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

// Unrecognized or non-string priorities load as the default instead of
// failing the whole file.
impl<'de> Deserialize<'de> for TaskPriority {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(value
            .as_str()
            .and_then(Self::from_name)
            .unwrap_or_default())
    }
}

/// Due date as stored on disk.
///
/// New tasks always store text. Integers only appear in files written by
/// older versions and are kept as-is so they survive a save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DueDate {
    Text(String),
    Day(i64),
}

// Any other JSON value (float, bool, object...) loads as no due date.
fn lenient_due<'de, D>(deserializer: D) -> Result<Option<DueDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(text) => Some(DueDate::Text(text)),
        serde_json::Value::Number(n) => n.as_i64().map(DueDate::Day),
        _ => None,
    })
}

impl std::fmt::Display for DueDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text}"),
            Self::Day(day) => write!(f, "{day}"),
        }
    }
}

/// One to-do item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// In-memory identity, never persisted
    #[serde(skip, default = "Uuid::new_v4")]
    pub id: Uuid,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub done: bool,

    #[serde(default, deserialize_with = "lenient_due")]
    pub due: Option<DueDate>,

    #[serde(default)]
    pub priority: TaskPriority,
}

impl Task {
    /// Create a pending task with a fresh identity
    pub fn new(title: impl Into<String>, due: Option<DueDate>, priority: TaskPriority) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            done: false,
            due,
            priority,
        }
    }

    /// Text shown in the status column
    pub fn status_label(&self) -> &'static str {
        if self.done {
            "Completed"
        } else {
            "Pending"
        }
    }
}

// Identity is an in-memory handle; two tasks are equal when their
// persisted content is.
impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.done == other.done
            && self.due == other.due
            && self.priority == other.priority
    }
}

impl Eq for Task {}
