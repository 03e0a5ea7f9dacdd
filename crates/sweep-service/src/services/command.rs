//! Slash command pipeline
//!
//! parse → (help) | validate → (invalid) | lookup → (empty) | delete.
//! Each invocation ends in exactly one `CommandOutcome` and therefore
//! exactly one chat reply.

use sweep_core::{validate, DeletionOutcome, IncomingCommand, ParsedCommand, ValidationError};
use tracing::{error, info, instrument};

use super::context::ServiceContext;
use super::deletion::DeletionService;
use super::error::ServiceResult;
use super::reply::ReplyFormatter;
use crate::dto::ChatReply;

/// Terminal state of one command invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Help,
    Invalid(ValidationError),
    NothingToDelete,
    Deleted {
        outcome: DeletionOutcome,
        /// Matching files beyond the processed page
        remaining: usize,
    },
    LookupFailed,
}

/// Command service runs a slash command end to end
pub struct CommandService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommandService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Run the pipeline; a failed lookup is returned as an error
    #[instrument(
        skip(self, command),
        fields(channel = %command.channel_id, user = %command.user_id)
    )]
    pub async fn execute(&self, command: &IncomingCommand) -> ServiceResult<CommandOutcome> {
        let filter = match self.ctx.parser().parse(command) {
            ParsedCommand::Help => return Ok(CommandOutcome::Help),
            ParsedCommand::Filter(filter) => filter,
        };

        if let Err(e) = validate(&filter) {
            info!(code = e.code(), "Rejected filter");
            return Ok(CommandOutcome::Invalid(e));
        }

        let page = self.ctx.file_api().list_files(&filter).await?;
        if page.is_empty() {
            info!("No files matched");
            return Ok(CommandOutcome::NothingToDelete);
        }

        let remaining = page.remaining();
        let outcome = DeletionService::new(self.ctx).delete_all(&page.files).await;

        Ok(CommandOutcome::Deleted { outcome, remaining })
    }

    /// Run the pipeline and always produce a reply
    pub async fn handle(&self, command: &IncomingCommand) -> ChatReply {
        let outcome = match self.execute(command).await {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(error = %e, code = e.error_code(), "Command failed");
                CommandOutcome::LookupFailed
            }
        };

        ReplyFormatter::new(self.ctx.reply_config()).format(&outcome)
    }
}
