//! Storage layer for task persistence.

mod file;
mod traits;

pub use file::{write_file_atomic, FileStorage};
pub use traits::Storage;
