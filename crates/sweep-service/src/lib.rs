//! # sweep-service
//!
//! Application layer: runs a slash command through parse, validate, lookup
//! and delete, and turns the terminal state into a chat reply.

pub mod dto;
pub mod services;

pub use dto::{ChatReply, HealthResponse, SlashCommandForm};
pub use services::{
    CommandOutcome, CommandService, DeletionService, ReplyFormatter, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
