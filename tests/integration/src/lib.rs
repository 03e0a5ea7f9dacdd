//! Integration test utilities for the file sweeper
//!
//! Runs the real webhook server against an in-process fake of the Slack
//! file endpoints.

pub mod fake_slack;
pub mod fixtures;

pub use fake_slack::*;
pub use fixtures::*;
pub use helpers::*;
