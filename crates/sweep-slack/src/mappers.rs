//! Conversions from Slack wire types to domain entities

use sweep_core::{FileListPage, FileRecord, Paging};

use crate::models::{FileListResponse, SlackFile, SlackPaging};

impl From<SlackFile> for FileRecord {
    fn from(file: SlackFile) -> Self {
        Self {
            id: file.id,
            name: file.name.unwrap_or_default(),
            title: file.title,
            user: file.user,
            created: file.created.unwrap_or_default(),
            filetype: file.filetype,
            size: file.size,
        }
    }
}

impl From<SlackPaging> for Paging {
    fn from(paging: SlackPaging) -> Self {
        Self {
            count: paging.count,
            total: paging.total,
            page: paging.page,
            pages: paging.pages,
        }
    }
}

/// Build the domain page from a successful `files.list` response
pub fn to_file_list_page(response: FileListResponse) -> FileListPage {
    FileListPage::new(
        response.files.into_iter().map(FileRecord::from).collect(),
        response.paging.map(Paging::from),
    )
}
