//! Slash-command grammar
//!
//! ```text
//! /delete-file <start> <end> [--all-channels|-ac] [--all-users|-au]
//!              [--from|-f <date>] [--to|-t <date>] [--help|-h]
//! ```
//!
//! Positional tokens are the start and end dates in order. Flags may appear
//! anywhere. Named date options win over positionals. Unknown flags are
//! ignored.

mod date;

pub use date::parse_date;

use chrono::{FixedOffset, Offset, Utc};

use crate::entities::{FileFilterRequest, IncomingCommand, Scope};

const HELP_FLAGS: [&str; 2] = ["--help", "-h"];
const ALL_CHANNELS_FLAGS: [&str; 2] = ["--all-channels", "-ac"];
const ALL_USERS_FLAGS: [&str; 3] = ["--all-users", "--all-user", "-au"];
const FROM_OPTIONS: [&str; 2] = ["--from", "-f"];
const TO_OPTIONS: [&str; 2] = ["--to", "-t"];

/// Result of parsing a command's text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    Help,
    Filter(FileFilterRequest),
}

/// Split command text on runs of whitespace
///
/// Full-width spaces (U+3000) count as whitespace.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Help is requested when a help flag occurs anywhere in the raw text
fn is_help(text: &str) -> bool {
    HELP_FLAGS.iter().any(|flag| text.contains(flag))
}

#[inline]
fn is_flag(token: &str) -> bool {
    token.starts_with('-')
}

/// Parses command text into a filter request
#[derive(Debug, Clone, Copy)]
pub struct CommandParser {
    offset: FixedOffset,
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::utc()
    }
}

impl CommandParser {
    /// Parser that reads naive dates in the given time zone
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Parser that reads naive dates as UTC
    pub fn utc() -> Self {
        Self::new(Utc.fix())
    }

    /// Parser for a UTC offset in minutes; `None` if the offset is out of range
    pub fn with_offset_minutes(minutes: i32) -> Option<Self> {
        minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .map(Self::new)
    }

    /// Parse one invocation
    ///
    /// Never fails: unparseable dates become absent bounds, which the
    /// validator reports.
    pub fn parse(&self, command: &IncomingCommand) -> ParsedCommand {
        if is_help(&command.text) {
            return ParsedCommand::Help;
        }

        let tokens = tokenize(&command.text);
        let mut positionals: Vec<&str> = Vec::new();
        let mut from_option: Option<Option<&str>> = None;
        let mut to_option: Option<Option<&str>> = None;
        let mut all_channels = false;
        let mut all_users = false;

        let mut iter = tokens.into_iter().peekable();
        while let Some(token) = iter.next() {
            if ALL_CHANNELS_FLAGS.contains(&token) {
                all_channels = true;
            } else if ALL_USERS_FLAGS.contains(&token) {
                all_users = true;
            } else if FROM_OPTIONS.contains(&token) || TO_OPTIONS.contains(&token) {
                // An option directly followed by another flag has no value
                let value = iter.next_if(|next| !is_flag(next));
                if FROM_OPTIONS.contains(&token) {
                    from_option = Some(value);
                } else {
                    to_option = Some(value);
                }
            } else if !is_flag(token) {
                positionals.push(token);
            }
        }

        let start = from_option.unwrap_or_else(|| positionals.first().copied());
        let end = to_option.unwrap_or_else(|| positionals.get(1).copied());

        ParsedCommand::Filter(FileFilterRequest {
            from: start.and_then(|token| parse_date(token, self.offset)),
            to: end.and_then(|token| parse_date(token, self.offset)),
            channel: if all_channels {
                Scope::All
            } else {
                Scope::Only(command.channel_id.clone())
            },
            user: if all_users {
                Scope::All
            } else {
                Scope::Only(command.user_id.clone())
            },
        })
    }
}
