//! File record entity - a candidate returned by the file index

/// A file returned by the lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub id: String,
    pub name: String,
    pub title: Option<String>,
    /// Uploader
    pub user: Option<String>,
    /// Upload time, seconds since epoch
    pub created: i64,
    pub filetype: Option<String>,
    pub size: Option<u64>,
}

impl FileRecord {
    /// Create a record with only the fields the deletion logic needs
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            title: None,
            user: None,
            created: 0,
            filetype: None,
            size: None,
        }
    }

    /// Name shown to users: the file name, falling back to title then id
    pub fn display_name(&self) -> &str {
        if !self.name.is_empty() {
            &self.name
        } else if let Some(title) = self.title.as_deref().filter(|t| !t.is_empty()) {
            title
        } else {
            &self.id
        }
    }
}

/// Paging metadata reported alongside a lookup page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Paging {
    pub count: u32,
    pub total: u32,
    pub page: u32,
    pub pages: u32,
}

/// First page of a lookup
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileListPage {
    pub files: Vec<FileRecord>,
    pub paging: Option<Paging>,
}

impl FileListPage {
    pub fn new(files: Vec<FileRecord>, paging: Option<Paging>) -> Self {
        Self { files, paging }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Matching files beyond this page, as reported by the index
    pub fn remaining(&self) -> usize {
        self.paging.map_or(0, |p| {
            (p.total as usize).saturating_sub(self.files.len())
        })
    }
}
