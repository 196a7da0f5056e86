#![warn(clippy::pedantic)]
// Allow common pedantic lints that don't affect correctness
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

//! # Todo
//!
//! Personal task tracking backed by a single local JSON file.
//!
//! This crate provides:
//! - The task record and its persisted JSON shape
//! - File-based storage with atomic whole-file saves
//! - Position-addressed add/complete/delete on an ordered collection
//! - JSON and CSV export/import
//! - Terminal helpers for the interactive menu
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use todo::{FileStorage, TasksDomain, TodoConfig};
//!
//! let config = TodoConfig::default();
//! let storage = Arc::new(FileStorage::new(&config.store_file));
//! let mut domain = TasksDomain::load(storage, &config).await?;
//!
//! domain.add_task("Buy milk", "25.12.2030", "h").await?;
//! domain.complete("1").await?;
//! ```

// Core entities
pub mod entities;

// Error types
pub mod errors;

// Storage layer
pub mod storage;

// JSON / CSV interchange
pub mod codec;

// Domain facades
pub mod domain;

// Terminal UI helpers
pub mod ui;

// Re-export key types for convenience
pub use codec::Format;
pub use domain::{
    Confirm, ConfigDomain, DueResolver, ImportOutcome, InterchangeDomain, TasksDomain,
};
pub use entities::{DueDate, Task, TaskPriority, TodoConfig};
pub use errors::{TodoError, TodoResult};
pub use storage::{FileStorage, Storage};
