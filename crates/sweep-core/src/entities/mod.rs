//! Domain entities
//!
//! Request-scoped values that flow through the sweep pipeline.

mod command;
mod file;
mod filter;
mod outcome;

pub use command::IncomingCommand;
pub use file::{FileListPage, FileRecord, Paging};
pub use filter::{FileFilterRequest, Scope};
pub use outcome::{DeletionFailure, DeletionOutcome};
