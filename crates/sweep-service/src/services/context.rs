//! Service context - dependency container for services
//!
//! Holds the file API client, the command parser and the reply settings.
//! Built once at startup; every request borrows it read-only.

use std::sync::Arc;

use sweep_common::{AppConfig, ReplyConfig};
use sweep_core::{CommandParser, FileApi};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    file_api: Arc<dyn FileApi>,
    parser: CommandParser,
    reply: ReplyConfig,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(file_api: Arc<dyn FileApi>, parser: CommandParser, reply: ReplyConfig) -> Self {
        Self {
            file_api,
            parser,
            reply,
        }
    }

    /// Get the file API client
    pub fn file_api(&self) -> &dyn FileApi {
        self.file_api.as_ref()
    }

    /// Get the command parser
    pub fn parser(&self) -> &CommandParser {
        &self.parser
    }

    /// Get the reply presentation settings
    pub fn reply_config(&self) -> &ReplyConfig {
        &self.reply
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("file_api", &"FileApi")
            .field("parser", &self.parser)
            .field("reply", &self.reply)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    file_api: Option<Arc<dyn FileApi>>,
    parser: Option<CommandParser>,
    reply: Option<ReplyConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file_api(mut self, file_api: Arc<dyn FileApi>) -> Self {
        self.file_api = Some(file_api);
        self
    }

    pub fn parser(mut self, parser: CommandParser) -> Self {
        self.parser = Some(parser);
        self
    }

    pub fn reply_config(mut self, reply: ReplyConfig) -> Self {
        self.reply = Some(reply);
        self
    }

    /// Take the parser time zone and reply settings from application config
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if the configured UTC offset is out of range
    pub fn with_config(self, config: &AppConfig) -> ServiceResult<Self> {
        let parser = CommandParser::with_offset_minutes(config.command.utc_offset_minutes)
            .ok_or_else(|| {
                ServiceError::validation(format!(
                    "utc offset out of range: {} minutes",
                    config.command.utc_offset_minutes
                ))
            })?;
        Ok(self.parser(parser).reply_config(config.reply.clone()))
    }

    /// Build the ServiceContext
    ///
    /// The parser defaults to UTC and the reply settings to their defaults.
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if the file API client is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.file_api
                .ok_or_else(|| ServiceError::validation("file_api is required"))?,
            self.parser.unwrap_or_default(),
            self.reply.unwrap_or_default(),
        ))
    }
}
