//! # sweep-slack
//!
//! Slack Web API implementation of the `FileApi` port: `files.list` for the
//! lookup and `files.delete` for each deletion.

pub mod client;
pub mod mappers;
pub mod models;

pub use client::SlackFileClient;
pub use models::{FileDeleteRequest, FileDeleteResponse, FileListResponse, SlackFile, SlackPaging};
