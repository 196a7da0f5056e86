//! Core data structures for task tracking.

mod config;
mod task;

pub use config::TodoConfig;
pub use task::{DueDate, Task, TaskPriority};
