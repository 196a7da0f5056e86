//! CSV codec for export/import.
//!
//! Columns are `Title,Done,Due Date,Priority`. `Done` is written as
//! `True`/`False` and read back case-insensitively. CSV carries no type
//! information, so every non-empty due date is read back as text.

use csv::{ReaderBuilder, StringRecord, Trim, Writer};

use crate::entities::{DueDate, Task, TaskPriority};
use crate::errors::{TodoError, TodoResult};

pub const HEADER: [&str; 4] = ["Title", "Done", "Due Date", "Priority"];

/// Write a header row followed by one row per task in collection order
pub fn encode(tasks: &[Task]) -> TodoResult<Vec<u8>> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(HEADER)?;

    for task in tasks {
        let due = task.due.as_ref().map(ToString::to_string).unwrap_or_default();
        let priority = task.priority.to_string();
        writer.write_record([
            task.title.as_str(),
            if task.done { "True" } else { "False" },
            due.as_str(),
            priority.as_str(),
        ])?;
    }

    writer.into_inner().map_err(|e| TodoError::StorageError {
        reason: e.to_string(),
    })
}

/// Rebuild tasks from CSV rows, locating columns by header name
pub fn decode(bytes: &[u8]) -> TodoResult<Vec<Task>> {
    let mut reader = ReaderBuilder::new().trim(Trim::Headers).from_reader(bytes);
    let columns = Columns::locate(reader.headers()?)?;

    let mut tasks = Vec::new();
    for record in reader.records() {
        tasks.push(columns.task(&record?));
    }
    Ok(tasks)
}

struct Columns {
    title: usize,
    done: usize,
    due: usize,
    priority: usize,
}

impl Columns {
    fn locate(headers: &StringRecord) -> TodoResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.eq_ignore_ascii_case(name))
                .ok_or_else(|| TodoError::CsvParseError {
                    reason: format!("missing column '{name}'"),
                })
        };

        Ok(Self {
            title: find(HEADER[0])?,
            done: find(HEADER[1])?,
            due: find(HEADER[2])?,
            priority: find(HEADER[3])?,
        })
    }

    fn task(&self, record: &StringRecord) -> Task {
        let field = |idx: usize| record.get(idx).unwrap_or_default();

        let mut task = Task::new(
            field(self.title),
            parse_due(field(self.due)),
            TaskPriority::from_name(field(self.priority)).unwrap_or_default(),
        );
        task.done = field(self.done).trim().eq_ignore_ascii_case("true");
        task
    }
}

fn parse_due(raw: &str) -> Option<DueDate> {
    let raw = raw.trim();
    (!raw.is_empty()).then(|| DueDate::Text(raw.to_string()))
}
