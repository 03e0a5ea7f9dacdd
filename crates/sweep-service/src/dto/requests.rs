//! Request DTOs
//!
//! Slack posts slash commands as `application/x-www-form-urlencoded`.
//! Fields the sweeper does not use are still accepted so decoding never
//! fails on them.

use serde::Deserialize;
use sweep_core::IncomingCommand;
use validator::Validate;

/// Slash-command payload
#[derive(Clone, Deserialize, Validate)]
pub struct SlashCommandForm {
    /// Legacy verification token (not checked)
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub team_id: Option<String>,
    #[serde(default)]
    pub team_domain: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "channel_id is required"))]
    pub channel_id: String,

    #[serde(default)]
    pub channel_name: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "user_id is required"))]
    pub user_id: String,

    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub command: Option<String>,

    /// Free-text argument; empty when the command was sent bare
    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub response_url: Option<String>,
    #[serde(default)]
    pub trigger_id: Option<String>,
}

impl std::fmt::Debug for SlashCommandForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlashCommandForm")
            .field("team_id", &self.team_id)
            .field("channel_id", &self.channel_id)
            .field("user_id", &self.user_id)
            .field("command", &self.command)
            .field("text", &self.text)
            .finish_non_exhaustive()
    }
}

impl From<SlashCommandForm> for IncomingCommand {
    fn from(form: SlashCommandForm) -> Self {
        Self {
            text: form.text,
            channel_id: form.channel_id,
            user_id: form.user_id,
        }
    }
}
