//! Slack file API client
//!
//! `files.list` authenticates with the `token` query parameter and
//! `files.delete` with a bearer header; both use the same credential.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use sweep_common::SlackConfig;
use sweep_core::{ApiResult, FileApi, FileApiError, FileFilterRequest, FileListPage};
use tracing::{debug, info, instrument, warn};

use crate::mappers::to_file_list_page;
use crate::models::{FileDeleteRequest, FileDeleteResponse, FileListResponse};

const FILES_LIST: &str = "files.list";
const FILES_DELETE: &str = "files.delete";

/// Fallback when Slack answers `ok: false` without an error code
const UNKNOWN_ERROR: &str = "unknown_error";

/// HTTP client for the Slack file endpoints
#[derive(Clone)]
pub struct SlackFileClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl std::fmt::Debug for SlackFileClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackFileClient")
            .field("base_url", &self.base_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl SlackFileClient {
    /// Create a client sharing an existing connection pool
    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    /// Create a client from sweep-common config
    pub fn from_config(http: reqwest::Client, config: &SlackConfig) -> Self {
        Self::new(http, config.api_base_url.clone(), config.token.clone())
    }

    fn url(&self, method: &str) -> String {
        format!("{}/{}", self.base_url, method)
    }

    /// Query parameters for `files.list`, excluding the credential
    ///
    /// Scopes set to "all" are omitted so the API applies no filter on them.
    pub fn list_query(filter: &FileFilterRequest) -> Vec<(&'static str, String)> {
        let mut query = Vec::with_capacity(4);
        if let Some(from) = filter.from {
            query.push(("ts_from", from.to_string()));
        }
        if let Some(to) = filter.to {
            query.push(("ts_to", to.to_string()));
        }
        if let Some(channel) = filter.channel.as_filter() {
            query.push(("channel", channel.to_string()));
        }
        if let Some(user) = filter.user.as_filter() {
            query.push(("user", user.to_string()));
        }
        query
    }

    /// Check the HTTP status and decode the body
    async fn read_body<T: DeserializeOwned>(
        method: &'static str,
        response: reqwest::Response,
    ) -> ApiResult<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(FileApiError::Status {
                method,
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| FileApiError::Transport {
            method,
            reason: e.to_string(),
        })?;
        debug!(method, body = %body, "Slack API response");

        serde_json::from_str(&body).map_err(|e| FileApiError::Decode {
            method,
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl FileApi for SlackFileClient {
    #[instrument(skip(self))]
    async fn list_files(&self, filter: &FileFilterRequest) -> ApiResult<FileListPage> {
        let query = Self::list_query(filter);
        debug!(?query, "Requesting file list");

        let response = self
            .http
            .get(self.url(FILES_LIST))
            .query(&[("token", self.token.as_str())])
            .query(&query)
            .send()
            .await
            .map_err(|e| FileApiError::Transport {
                method: FILES_LIST,
                reason: e.to_string(),
            })?;

        let body: FileListResponse = Self::read_body(FILES_LIST, response).await?;
        if !body.ok {
            let error = body.error.unwrap_or_else(|| UNKNOWN_ERROR.to_string());
            warn!(error = %error, "files.list rejected");
            return Err(FileApiError::Api {
                method: FILES_LIST,
                error,
            });
        }

        let page = to_file_list_page(body);
        info!(
            files = page.files.len(),
            total = page.paging.map(|p| p.total),
            "File list fetched"
        );
        Ok(page)
    }

    #[instrument(skip(self))]
    async fn delete_file(&self, file_id: &str) -> ApiResult<()> {
        let response = self
            .http
            .post(self.url(FILES_DELETE))
            .bearer_auth(&self.token)
            .json(&FileDeleteRequest { file: file_id })
            .send()
            .await
            .map_err(|e| FileApiError::Transport {
                method: FILES_DELETE,
                reason: e.to_string(),
            })?;

        let body: FileDeleteResponse = Self::read_body(FILES_DELETE, response).await?;
        if !body.ok {
            return Err(FileApiError::Api {
                method: FILES_DELETE,
                error: body.error.unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
            });
        }

        debug!(file_id, "File deleted");
        Ok(())
    }
}
