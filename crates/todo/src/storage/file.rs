//! File-based storage implementation.

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tempfile::NamedTempFile;
use tokio::fs;
use tracing::debug;

use super::traits::Storage;
use crate::codec::json;
use crate::entities::Task;
use crate::errors::{TodoError, TodoResult};

/// JSON file storage for the task collection
pub struct FileStorage {
    /// Path to the store file (e.g. `ToDo-tasks.json`)
    tasks_file: PathBuf,
}

impl FileStorage {
    /// Create a new file storage instance
    pub fn new(tasks_file: impl AsRef<Path>) -> Self {
        Self {
            tasks_file: tasks_file.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl Storage for FileStorage {
    fn storage_type(&self) -> &'static str {
        "file"
    }

    fn location(&self) -> &Path {
        &self.tasks_file
    }

    async fn exists(&self) -> TodoResult<bool> {
        Ok(fs::try_exists(&self.tasks_file).await?)
    }

    async fn load_tasks(&self) -> TodoResult<Vec<Task>> {
        let content = match fs::read(&self.tasks_file).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.tasks_file.display(), "No task file yet, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(TodoError::FileReadError {
                    path: self.tasks_file.display().to_string(),
                    reason: e.to_string(),
                })
            }
        };

        let tasks = json::decode(&content).map_err(|e| match e {
            TodoError::JsonParseError { reason } => TodoError::JsonParseError {
                reason: format!("{}: {reason}", self.tasks_file.display()),
            },
            other => other,
        })?;
        debug!(path = %self.tasks_file.display(), count = tasks.len(), "Loaded tasks");
        Ok(tasks)
    }

    async fn save_tasks(&self, tasks: &[Task]) -> TodoResult<()> {
        let content = json::encode(tasks)?;
        write_file_atomic(&self.tasks_file, content).await?;
        debug!(path = %self.tasks_file.display(), count = tasks.len(), "Saved tasks");
        Ok(())
    }
}

/// Replace `path` with `content` via a sibling temp file and a rename.
///
/// Readers see either the old file or the new one, never a truncated mix.
pub async fn write_file_atomic(path: &Path, content: Vec<u8>) -> TodoResult<()> {
    let target = path.to_path_buf();
    tokio::task::spawn_blocking(move || write_atomic_blocking(&target, &content))
        .await
        .map_err(|e| TodoError::StorageError {
            reason: e.to_string(),
        })?
}

fn write_atomic_blocking(path: &Path, content: &[u8]) -> TodoResult<()> {
    let write_error = |e: std::io::Error| TodoError::FileWriteError {
        path: path.display().to_string(),
        reason: e.to_string(),
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(write_error)?;

    let mut temp = NamedTempFile::new_in(parent).map_err(write_error)?;
    temp.write_all(content).map_err(write_error)?;
    temp.as_file().sync_all().map_err(write_error)?;
    temp.persist(path).map_err(|e| write_error(e.error))?;
    Ok(())
}
