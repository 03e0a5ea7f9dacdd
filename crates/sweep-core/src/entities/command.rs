//! Incoming slash command

/// The fields of a slash-command invocation the sweeper acts on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingCommand {
    /// Free-text argument typed after the command name
    pub text: String,
    pub channel_id: String,
    pub user_id: String,
}

impl IncomingCommand {
    pub fn new(
        text: impl Into<String>,
        channel_id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            channel_id: channel_id.into(),
            user_id: user_id.into(),
        }
    }
}
