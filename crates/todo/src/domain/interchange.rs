//! Export/import between the task collection and user-named files.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{info, warn};

use super::confirm::Confirm;
use super::tasks::TasksDomain;
use crate::codec::Format;
use crate::entities::{Task, TodoConfig};
use crate::errors::{TodoError, TodoResult};
use crate::storage::write_file_atomic;

/// Result of an import attempt that got as far as the confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    Imported { count: usize },
    Cancelled,
}

/// Export/import facade
pub struct InterchangeDomain {
    json_export_name: String,
    csv_export_name: String,
}

impl InterchangeDomain {
    pub fn new(config: &TodoConfig) -> Self {
        Self {
            json_export_name: config.json_export_name.clone(),
            csv_export_name: config.csv_export_name.clone(),
        }
    }

    /// Turn the typed export name into a file path.
    ///
    /// Blank input uses the configured default, spaces become underscores
    /// and the format extension is appended unless already present.
    pub fn export_path(&self, format: Format, name_input: &str) -> PathBuf {
        let name = name_input.trim();
        let name = if name.is_empty() {
            match format {
                Format::Json => self.json_export_name.clone(),
                Format::Csv => self.csv_export_name.clone(),
            }
        } else {
            name.replace(' ', "_")
        };

        let path = PathBuf::from(name);
        let has_extension = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(format.extension()));
        if has_extension {
            path
        } else {
            let mut with_ext = path.into_os_string();
            with_ext.push(".");
            with_ext.push(format.extension());
            PathBuf::from(with_ext)
        }
    }

    /// Write the collection to a new file and return where it went
    pub async fn export(
        &self,
        tasks: &[Task],
        format: Format,
        name_input: &str,
    ) -> TodoResult<PathBuf> {
        let path = self.export_path(format, name_input);
        write_file_atomic(&path, format.encode(tasks)?).await?;
        info!(path = %path.display(), %format, count = tasks.len(), "Tasks exported");
        Ok(path)
    }

    /// Read and parse an import file without touching the store
    pub async fn read(&self, format: Format, path: &Path) -> TodoResult<Vec<Task>> {
        let content = match fs::read(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(TodoError::ImportNotFound {
                    path: path.display().to_string(),
                })
            }
            Err(e) => {
                return Err(TodoError::FileReadError {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })
            }
        };

        format.decode(&content)
    }

    /// Replace the whole collection with the contents of `path`.
    ///
    /// A missing or malformed file fails before the user is asked.
    pub async fn import(
        &self,
        domain: &mut TasksDomain,
        format: Format,
        path: &Path,
        confirm: &dyn Confirm,
    ) -> TodoResult<ImportOutcome> {
        let tasks = self.read(format, path).await.inspect_err(|e| {
            warn!(path = %path.display(), error = %e, "Import aborted");
        })?;

        let prompt = format!(
            "Importing {} task(s) from '{}' will replace all {} current task(s). Continue?",
            tasks.len(),
            path.display(),
            domain.len()
        );
        if !confirm.confirm(&prompt)? {
            info!(path = %path.display(), "Import cancelled");
            return Ok(ImportOutcome::Cancelled);
        }

        let count = tasks.len();
        domain.replace_all(tasks).await?;
        info!(path = %path.display(), %format, count, "Tasks imported");
        Ok(ImportOutcome::Imported { count })
    }
}
