//! Business logic services
//!
//! The command pipeline, the deletion orchestrator, and the reply
//! formatter, all sharing one `ServiceContext`.

pub mod command;
pub mod context;
pub mod deletion;
pub mod error;
pub mod messages;
pub mod reply;

// Re-export all services for convenience
pub use command::{CommandOutcome, CommandService};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use deletion::DeletionService;
pub use error::{ServiceError, ServiceResult};
pub use reply::ReplyFormatter;
