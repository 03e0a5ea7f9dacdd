//! # sweep-core
//!
//! Domain layer for the file sweeper: the slash-command grammar, the filter
//! request and its validation, file records, deletion outcomes, and the
//! `FileApi` port implemented by the infrastructure layer.
//! This crate has no dependency on HTTP or any concrete API client.

pub mod entities;
pub mod error;
pub mod parser;
pub mod traits;
pub mod validation;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    DeletionFailure, DeletionOutcome, FileFilterRequest, FileListPage, FileRecord,
    IncomingCommand, Paging, Scope,
};
pub use error::{FileApiError, ValidationError};
pub use parser::{parse_date, tokenize, CommandParser, ParsedCommand};
pub use traits::{ApiResult, FileApi};
pub use validation::validate;
pub use value_objects::Locale;
