//! Response DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sweep_common::ReplyConfig;

/// Message posted back to the invoking channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub text: String,
    pub icon_emoji: String,
    pub username: String,
    /// Resolve @-mentions in `text`
    pub link_names: bool,
}

impl ChatReply {
    /// Reply with the configured presentation metadata
    pub fn new(text: impl Into<String>, config: &ReplyConfig) -> Self {
        Self {
            text: text.into(),
            icon_emoji: config.icon_emoji.clone(),
            username: config.username.clone(),
            link_names: config.link_names,
        }
    }
}

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy(service: impl Into<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            service: service.into(),
            timestamp: Utc::now(),
        }
    }
}
