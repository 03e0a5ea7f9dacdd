//! File API port - the external file index and delete endpoints
//!
//! The domain states what it needs; the Slack client crate provides the
//! implementation, and tests substitute in-memory fakes.

use async_trait::async_trait;

use crate::entities::{FileFilterRequest, FileListPage};
use crate::error::FileApiError;

/// Result type for file API operations
pub type ApiResult<T> = Result<T, FileApiError>;

#[async_trait]
pub trait FileApi: Send + Sync {
    /// Fetch the first page of files matching the filter
    async fn list_files(&self, filter: &FileFilterRequest) -> ApiResult<FileListPage>;

    /// Delete a single file by id
    async fn delete_file(&self, file_id: &str) -> ApiResult<()>;
}
