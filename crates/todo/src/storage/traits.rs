//! Storage trait definitions.

use std::path::Path;

use async_trait::async_trait;

use crate::entities::Task;
use crate::errors::TodoResult;

/// Storage interface for the task collection.
///
/// The collection is always loaded and saved as a whole; there is no
/// per-task update path.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Get storage type identifier
    fn storage_type(&self) -> &'static str;

    /// Where the collection lives, for messages
    fn location(&self) -> &Path;

    /// Check whether a persisted collection exists yet
    async fn exists(&self) -> TodoResult<bool>;

    /// Load the full collection in persisted order.
    ///
    /// A missing store is an empty collection; a corrupt one is an error.
    async fn load_tasks(&self) -> TodoResult<Vec<Task>>;

    /// Replace the persisted collection with `tasks`
    async fn save_tasks(&self, tasks: &[Task]) -> TodoResult<()>;
}
