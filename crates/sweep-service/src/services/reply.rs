//! Reply formatter - one chat reply per terminal state

use sweep_common::ReplyConfig;

use super::command::CommandOutcome;
use super::messages::Messages;
use crate::dto::ChatReply;

/// Turns a `CommandOutcome` into the reply posted to the channel
pub struct ReplyFormatter<'a> {
    config: &'a ReplyConfig,
    messages: Messages,
}

impl<'a> ReplyFormatter<'a> {
    pub fn new(config: &'a ReplyConfig) -> Self {
        Self {
            config,
            messages: Messages::new(config.locale),
        }
    }

    pub fn format(&self, outcome: &CommandOutcome) -> ChatReply {
        ChatReply::new(self.text(outcome), self.config)
    }

    fn text(&self, outcome: &CommandOutcome) -> String {
        match outcome {
            CommandOutcome::Help => self.messages.help().to_string(),
            CommandOutcome::Invalid(e) => e.message(self.config.locale).to_string(),
            CommandOutcome::NothingToDelete => self.messages.nothing_to_delete().to_string(),
            CommandOutcome::LookupFailed => self.messages.lookup_failed().to_string(),
            CommandOutcome::Deleted { outcome, remaining } => {
                let mut text = self.messages.deleted(outcome.deleted);
                match &outcome.failure {
                    Some(failure) => {
                        text.push_str(&self.messages.failed(&failure.file_name, &failure.reason));
                    }
                    // Rerun hint only after a complete page
                    None if *remaining > 0 => {
                        text.push('\n');
                        text.push_str(&self.messages.remaining(*remaining));
                    }
                    None => {}
                }
                text
            }
        }
    }
}
