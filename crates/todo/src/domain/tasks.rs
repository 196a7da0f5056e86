//! Tasks domain facade.

use std::num::IntErrorKind;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::info;
use uuid::Uuid;

use super::confirm::Confirm;
use super::due::DueResolver;
use crate::entities::{Task, TaskPriority, TodoConfig};
use crate::errors::{TodoError, TodoResult};
use crate::storage::Storage;

/// Owns the in-memory collection and mirrors every change to storage.
///
/// Users address tasks by 1-based position, resolved against the
/// collection at call time. Callers that need a handle surviving
/// reordering use `position_to_id` and `get`. Every change is persisted
/// before it becomes visible in memory.
pub struct TasksDomain {
    storage: Arc<dyn Storage>,
    tasks: Vec<Task>,
    due: DueResolver,
}

impl TasksDomain {
    /// Load the collection from storage
    pub async fn load(storage: Arc<dyn Storage>, config: &TodoConfig) -> TodoResult<Self> {
        let due = DueResolver::from_config(config)?;
        let tasks = storage.load_tasks().await?;
        info!(
            storage = storage.storage_type(),
            path = %storage.location().display(),
            count = tasks.len(),
            "Task collection loaded"
        );
        Ok(Self {
            storage,
            tasks,
            due,
        })
    }

    /// Current collection in display order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Get a task by its in-memory id
    pub fn get(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Resolve a typed 1-based position to the id of the task there
    pub fn position_to_id(&self, input: &str) -> TodoResult<Uuid> {
        let position = self.resolve_position(input)?;
        Ok(self.tasks[position].id)
    }

    // Typed 1-based position -> 0-based offset into `tasks`.
    // A well-formed integer too large for i64 is still a number, just out
    // of range.
    fn resolve_position(&self, input: &str) -> TodoResult<usize> {
        let trimmed = input.trim();
        let out_of_range = || TodoError::InvalidIndex {
            index: trimmed.to_string(),
            len: self.tasks.len(),
        };

        let index: i64 = trimmed.parse().map_err(|e: std::num::ParseIntError| {
            match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => out_of_range(),
                _ => TodoError::InvalidNumber {
                    input: input.to_string(),
                },
            }
        })?;

        usize::try_from(index)
            .ok()
            .filter(|i| (1..=self.tasks.len()).contains(i))
            .map(|i| i - 1)
            .ok_or_else(out_of_range)
    }

    /// Add a task, resolving day offsets against today's local date
    pub async fn add_task(
        &mut self,
        title: &str,
        due_input: &str,
        priority_input: &str,
    ) -> TodoResult<Task> {
        let today = Local::now().date_naive();
        self.add_task_on(today, title, due_input, priority_input)
            .await
    }

    /// Add a task, resolving day offsets against `today`
    pub async fn add_task_on(
        &mut self,
        today: NaiveDate,
        title: &str,
        due_input: &str,
        priority_input: &str,
    ) -> TodoResult<Task> {
        let task = Task::new(
            title,
            self.due.resolve(due_input, today),
            TaskPriority::from_shorthand(priority_input),
        );

        let mut next = self.tasks.clone();
        next.push(task.clone());
        self.commit(next).await?;

        info!(title = %task.title, priority = %task.priority, "Task added");
        Ok(task)
    }

    /// Mark the task at `index_input` as done
    pub async fn complete(&mut self, index_input: &str) -> TodoResult<Task> {
        self.set_done(index_input, true).await
    }

    /// Set the done flag of the task at `index_input` either way
    pub async fn set_done(&mut self, index_input: &str, done: bool) -> TodoResult<Task> {
        let position = self.resolve_position(index_input)?;

        let mut next = self.tasks.clone();
        next[position].done = done;
        let task = next[position].clone();
        self.commit(next).await?;

        info!(title = %task.title, done, "Task updated");
        Ok(task)
    }

    /// Remove the task at `index_input` after confirmation.
    ///
    /// Returns the removed task, or `None` when the user declined.
    pub async fn delete(
        &mut self,
        index_input: &str,
        confirm: &dyn Confirm,
    ) -> TodoResult<Option<Task>> {
        let position = self.resolve_position(index_input)?;

        let prompt = format!(
            "Are you sure you want to delete task {} '{}'?",
            position + 1,
            self.tasks[position].title
        );
        if !confirm.confirm(&prompt)? {
            info!(position = position + 1, "Task deletion cancelled");
            return Ok(None);
        }

        let mut next = self.tasks.clone();
        let removed = next.remove(position);
        self.commit(next).await?;

        info!(title = %removed.title, "Task deleted");
        Ok(Some(removed))
    }

    /// Replace the whole collection, as import does
    pub async fn replace_all(&mut self, tasks: Vec<Task>) -> TodoResult<()> {
        let count = tasks.len();
        self.commit(tasks).await?;
        info!(count, "Task collection replaced");
        Ok(())
    }

    async fn commit(&mut self, next: Vec<Task>) -> TodoResult<()> {
        self.storage.save_tasks(&next).await?;
        self.tasks = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::DueDate;
    use crate::storage::FileStorage;
    use tempfile::TempDir;

    async fn setup() -> (TempDir, TasksDomain) {
        let temp_dir = TempDir::new().unwrap();
        let storage = Arc::new(FileStorage::new(temp_dir.path().join("ToDo-tasks.json")));
        let domain = TasksDomain::load(storage, &TodoConfig::default())
            .await
            .unwrap();
        (temp_dir, domain)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    async fn with_three() -> (TempDir, TasksDomain) {
        let (temp, mut domain) = setup().await;
        for title in ["one", "two", "three"] {
            domain.add_task_on(today(), title, "", "").await.unwrap();
        }
        (temp, domain)
    }

    fn titles(domain: &TasksDomain) -> Vec<&str> {
        domain.tasks().iter().map(|t| t.title.as_str()).collect()
    }

    #[tokio::test]
    async fn test_add_explicit_date_and_priority() {
        let (_temp, mut domain) = setup().await;

        let task = domain
            .add_task_on(today(), "Buy milk", "25.12.2030", "h")
            .await
            .unwrap();

        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.due, Some(DueDate::Text("25.12.2030".to_string())));
        assert_eq!(task.priority, TaskPriority::High);
        assert!(!task.done);
        assert_eq!(domain.tasks().last(), Some(&task));
    }

    #[tokio::test]
    async fn test_add_day_offset() {
        let (_temp, mut domain) = setup().await;

        let task = domain.add_task_on(today(), "Call mom", "3", "").await.unwrap();

        assert_eq!(task.due, Some(DueDate::Text("2024-01-04".to_string())));
        assert_eq!(task.priority, TaskPriority::Low);
    }

    #[tokio::test]
    async fn test_add_allows_empty_and_duplicate_titles() {
        let (_temp, mut domain) = setup().await;

        domain.add_task_on(today(), "", "", "").await.unwrap();
        domain.add_task_on(today(), "dup", "", "").await.unwrap();
        domain.add_task_on(today(), "dup", "", "").await.unwrap();

        assert_eq!(titles(&domain), vec!["", "dup", "dup"]);
    }

    #[tokio::test]
    async fn test_complete_sets_only_target() {
        let (_temp, mut domain) = with_three().await;

        let task = domain.complete("2").await.unwrap();

        assert_eq!(task.title, "two");
        let done: Vec<bool> = domain.tasks().iter().map(|t| t.done).collect();
        assert_eq!(done, vec![false, true, false]);
        assert_eq!(domain.len(), 3);
    }

    #[tokio::test]
    async fn test_set_done_can_undo() {
        let (_temp, mut domain) = with_three().await;

        domain.complete("1").await.unwrap();
        let task = domain.set_done("1", false).await.unwrap();

        assert!(!task.done);
        assert!(domain.tasks().iter().all(|t| !t.done));
    }

    #[tokio::test]
    async fn test_invalid_positions_leave_collection_untouched() {
        let (_temp, mut domain) = with_three().await;
        let before = domain.tasks().to_vec();

        for input in ["0", "-1", "4", "100"] {
            let err = domain.complete(input).await.unwrap_err();
            assert!(matches!(err, TodoError::InvalidIndex { .. }), "{input}");
            let err = domain.delete(input, &|_: &str| true).await.unwrap_err();
            assert!(matches!(err, TodoError::InvalidIndex { .. }), "{input}");
        }
        for input in ["", "abc", "1.5", "two"] {
            let err = domain.complete(input).await.unwrap_err();
            assert!(matches!(err, TodoError::InvalidNumber { .. }), "{input}");
            let err = domain.delete(input, &|_: &str| true).await.unwrap_err();
            assert!(matches!(err, TodoError::InvalidNumber { .. }), "{input}");
        }

        assert_eq!(domain.tasks(), before.as_slice());
    }

    #[tokio::test]
    async fn test_oversized_positions_are_out_of_range() {
        let (_temp, mut domain) = with_three().await;
        let before = domain.tasks().to_vec();

        for input in ["99999999999999999999", "-99999999999999999999"] {
            let err = domain.complete(input).await.unwrap_err();
            assert!(matches!(err, TodoError::InvalidIndex { .. }), "{input}");
            assert!(err.to_string().contains(input), "{input}");
            let err = domain.delete(input, &|_: &str| true).await.unwrap_err();
            assert!(matches!(err, TodoError::InvalidIndex { .. }), "{input}");
        }

        assert_eq!(domain.tasks(), before.as_slice());
    }

    #[tokio::test]
    async fn test_delete_shifts_later_tasks() {
        let (_temp, mut domain) = with_three().await;

        let removed = domain.delete("2", &|_: &str| true).await.unwrap();

        assert_eq!(removed.map(|t| t.title), Some("two".to_string()));
        assert_eq!(titles(&domain), vec!["one", "three"]);
    }

    #[tokio::test]
    async fn test_delete_declined() {
        let (_temp, mut domain) = with_three().await;

        let removed = domain.delete("1", &|_: &str| false).await.unwrap();

        assert!(removed.is_none());
        assert_eq!(domain.len(), 3);
    }

    #[tokio::test]
    async fn test_delete_prompt_names_task() {
        let (_temp, mut domain) = with_three().await;
        let prompt = std::cell::RefCell::new(String::new());

        let confirm = |p: &str| {
            *prompt.borrow_mut() = p.to_string();
            false
        };
        domain.delete("3", &confirm).await.unwrap();

        assert_eq!(
            prompt.borrow().as_str(),
            "Are you sure you want to delete task 3 'three'?"
        );
    }

    #[tokio::test]
    async fn test_mutations_persist() {
        let (temp, mut domain) = with_three().await;
        domain.complete("1").await.unwrap();
        domain.delete("2", &|_: &str| true).await.unwrap();

        let storage = Arc::new(FileStorage::new(temp.path().join("ToDo-tasks.json")));
        let reloaded = TasksDomain::load(storage, &TodoConfig::default())
            .await
            .unwrap();

        assert_eq!(reloaded.tasks(), domain.tasks());
        assert_eq!(titles(&reloaded), vec!["one", "three"]);
        assert!(reloaded.tasks()[0].done);
    }

    #[tokio::test]
    async fn test_position_to_id() {
        let (_temp, domain) = with_three().await;

        let id = domain.position_to_id(" 3 ").unwrap();
        assert_eq!(domain.get(id).map(|t| t.title.as_str()), Some("three"));
    }

    /// Storage that loads a fixed collection and refuses every save
    struct ReadOnlyStorage {
        tasks: Vec<Task>,
    }

    #[async_trait::async_trait]
    impl Storage for ReadOnlyStorage {
        fn storage_type(&self) -> &'static str {
            "read-only"
        }

        fn location(&self) -> &std::path::Path {
            std::path::Path::new("read-only")
        }

        async fn exists(&self) -> TodoResult<bool> {
            Ok(true)
        }

        async fn load_tasks(&self) -> TodoResult<Vec<Task>> {
            Ok(self.tasks.clone())
        }

        async fn save_tasks(&self, _tasks: &[Task]) -> TodoResult<()> {
            Err(TodoError::StorageError {
                reason: "disk full".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_failed_save_leaves_memory_unchanged() {
        let seeded = vec![
            Task::new("one", None, TaskPriority::Low),
            Task::new("two", None, TaskPriority::High),
        ];
        let storage = Arc::new(ReadOnlyStorage {
            tasks: seeded.clone(),
        });
        let mut domain = TasksDomain::load(storage, &TodoConfig::default())
            .await
            .unwrap();

        let err = domain.add_task_on(today(), "three", "3", "m").await.unwrap_err();
        assert!(matches!(err, TodoError::StorageError { .. }));
        assert_eq!(domain.tasks(), seeded.as_slice());

        let err = domain.complete("1").await.unwrap_err();
        assert!(matches!(err, TodoError::StorageError { .. }));
        assert_eq!(domain.tasks(), seeded.as_slice());

        let err = domain.delete("2", &|_: &str| true).await.unwrap_err();
        assert!(matches!(err, TodoError::StorageError { .. }));
        assert_eq!(domain.tasks(), seeded.as_slice());

        let replacement = vec![Task::new("imported", None, TaskPriority::Medium)];
        let err = domain.replace_all(replacement).await.unwrap_err();
        assert!(matches!(err, TodoError::StorageError { .. }));
        assert_eq!(domain.tasks(), seeded.as_slice());
    }
}
