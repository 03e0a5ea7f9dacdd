//! Slash command handler

use axum::{extract::State, Json};
use sweep_core::IncomingCommand;
use sweep_service::{ChatReply, CommandService, SlashCommandForm};
use tracing::info;

use crate::extractors::ValidatedForm;
use crate::state::AppState;

/// Run a slash command and reply in the invoking channel
///
/// POST /slack/commands
///
/// Every well-formed invocation answers 200 with exactly one reply,
/// including when the file lookup fails.
pub async fn slash_command(
    State(state): State<AppState>,
    ValidatedForm(form): ValidatedForm<SlashCommandForm>,
) -> Json<ChatReply> {
    info!(
        command = ?form.command,
        channel = %form.channel_id,
        user = %form.user_id,
        "Slash command received"
    );

    let command = IncomingCommand::from(form);
    let reply = CommandService::new(state.service_context())
        .handle(&command)
        .await;
    Json(reply)
}
