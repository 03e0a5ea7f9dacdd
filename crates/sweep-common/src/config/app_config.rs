//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use serde::Deserialize;
use std::env;
use std::fmt;
use sweep_core::Locale;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub slack: SlackConfig,
    pub reply: ReplyConfig,
    pub command: CommandConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Slack Web API access
#[derive(Clone, Deserialize)]
pub struct SlackConfig {
    /// Long-lived credential used for both listing and deleting
    pub token: String,
    #[serde(default = "default_slack_api_base_url")]
    pub api_base_url: String,
}

impl fmt::Debug for SlackConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlackConfig")
            .field("token", &"[REDACTED]")
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

/// Presentation of chat replies
#[derive(Debug, Clone, Deserialize)]
pub struct ReplyConfig {
    #[serde(default = "default_reply_username")]
    pub username: String,
    #[serde(default = "default_reply_icon_emoji")]
    pub icon_emoji: String,
    /// Ask the chat platform to resolve @-mentions in reply text
    #[serde(default = "default_link_names")]
    pub link_names: bool,
    #[serde(default)]
    pub locale: Locale,
}

impl Default for ReplyConfig {
    fn default() -> Self {
        Self {
            username: default_reply_username(),
            icon_emoji: default_reply_icon_emoji(),
            link_names: default_link_names(),
            locale: Locale::default(),
        }
    }
}

/// Command interpretation settings
#[derive(Debug, Clone, Copy, Deserialize, Default)]
pub struct CommandConfig {
    /// Time zone for date tokens without an explicit offset, minutes east of UTC
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

// Default value functions
fn default_app_name() -> String {
    "slack-file-sweeper".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_slack_api_base_url() -> String {
    "https://slack.com/api".to_string()
}

fn default_reply_username() -> String {
    "ファイル削除bot".to_string()
}

fn default_reply_icon_emoji() -> String {
    ":yami:".to_string()
}

fn default_link_names() -> bool {
    true
}

/// Largest offset accepted for `COMMAND_UTC_OFFSET_MINUTES` (exclusive)
const MAX_OFFSET_MINUTES: i32 = 24 * 60;

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or invalid
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_source(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key/value source
    pub fn from_source<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            app: AppSettings {
                name: get("APP_NAME").unwrap_or_else(default_app_name),
                env: get("APP_ENV")
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            api: ServerConfig {
                host: get("API_HOST").unwrap_or_else(default_host),
                port: get("API_PORT")
                    .ok_or(ConfigError::MissingVar("API_PORT"))?
                    .parse()
                    .map_err(|_| {
                        ConfigError::InvalidValue("API_PORT", "expected a port number".to_string())
                    })?,
            },
            slack: SlackConfig {
                token: get("SLACK_TOKEN")
                    .filter(|s| !s.trim().is_empty())
                    .ok_or(ConfigError::MissingVar("SLACK_TOKEN"))?,
                api_base_url: get("SLACK_API_BASE_URL")
                    .map(|s| s.trim_end_matches('/').to_string())
                    .unwrap_or_else(default_slack_api_base_url),
            },
            reply: ReplyConfig {
                username: get("REPLY_USERNAME").unwrap_or_else(default_reply_username),
                icon_emoji: get("REPLY_ICON_EMOJI").unwrap_or_else(default_reply_icon_emoji),
                link_names: match get("REPLY_LINK_NAMES") {
                    Some(s) => parse_bool(&s).ok_or_else(|| {
                        ConfigError::InvalidValue("REPLY_LINK_NAMES", s.clone())
                    })?,
                    None => default_link_names(),
                },
                locale: match get("REPLY_LOCALE") {
                    Some(s) => s
                        .parse()
                        .map_err(|e: sweep_core::value_objects::LocaleParseError| {
                            ConfigError::InvalidValue("REPLY_LOCALE", e.to_string())
                        })?,
                    None => Locale::default(),
                },
            },
            command: CommandConfig {
                utc_offset_minutes: match get("COMMAND_UTC_OFFSET_MINUTES") {
                    Some(s) => s
                        .trim()
                        .parse::<i32>()
                        .ok()
                        .filter(|m| m.abs() < MAX_OFFSET_MINUTES)
                        .ok_or(ConfigError::InvalidValue("COMMAND_UTC_OFFSET_MINUTES", s))?,
                    None => 0,
                },
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
