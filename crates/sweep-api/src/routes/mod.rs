//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{commands, health};
use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(health_routes())
        .merge(slack_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health::health_check))
}

/// Slack webhook routes
fn slack_routes() -> Router<AppState> {
    Router::new().route("/slack/commands", post(commands::slash_command))
}
