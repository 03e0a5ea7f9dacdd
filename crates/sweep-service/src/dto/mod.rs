//! Data transfer objects for the webhook request and reply
//!
//! This module provides:
//! - The slash-command form payload with validation
//! - The chat reply and health check bodies

pub mod requests;
pub mod responses;

pub use requests::SlashCommandForm;
pub use responses::{ChatReply, HealthResponse};
