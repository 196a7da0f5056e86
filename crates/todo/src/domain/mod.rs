//! Domain facades for task tracking.
//!
//! These facades combine the in-memory collection with storage and
//! interchange operations.

mod config;
mod confirm;
mod due;
mod interchange;
mod tasks;

pub use config::ConfigDomain;
pub use confirm::{is_affirmative, Confirm};
pub use due::DueResolver;
pub use interchange::{ImportOutcome, InterchangeDomain};
pub use tasks::TasksDomain;
