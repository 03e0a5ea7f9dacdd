//! Slack Web API wire types
//!
//! Only the fields the sweeper reads are modelled; everything else in the
//! response is ignored. Most fields default so that sparse responses decode.

use serde::{Deserialize, Serialize};

/// `files.list` response
#[derive(Debug, Clone, Deserialize)]
pub struct FileListResponse {
    pub ok: bool,
    /// Error code when `ok` is false
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub files: Vec<SlackFile>,
    #[serde(default)]
    pub paging: Option<SlackPaging>,
}

/// A file object as returned by `files.list`
#[derive(Debug, Clone, Deserialize)]
pub struct SlackFile {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub created: Option<i64>,
    #[serde(default)]
    pub filetype: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
}

/// Paging block of `files.list`
#[derive(Debug, Clone, Copy, Deserialize, Default)]
pub struct SlackPaging {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub pages: u32,
}

/// `files.delete` request body
#[derive(Debug, Clone, Serialize)]
pub struct FileDeleteRequest<'a> {
    pub file: &'a str,
}

/// `files.delete` response
#[derive(Debug, Clone, Deserialize)]
pub struct FileDeleteResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
}
