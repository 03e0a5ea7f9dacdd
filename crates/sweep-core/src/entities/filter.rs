//! File filter request - the resolved query intent of one command

/// One filter dimension (channel or user)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Scope {
    /// No restriction on this dimension
    #[default]
    All,
    /// Restrict to a single identifier
    Only(String),
}

impl Scope {
    /// Identifier to send upstream, `None` when unrestricted
    pub fn as_filter(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Only(id) => Some(id.as_str()),
        }
    }

    #[inline]
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

/// Resolved filter for a file lookup
///
/// Bounds are seconds since the Unix epoch (UTC). An absent bound means the
/// argument was not supplied or could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileFilterRequest {
    pub from: Option<i64>,
    pub to: Option<i64>,
    pub channel: Scope,
    pub user: Scope,
}

impl FileFilterRequest {
    /// Both bounds, if both are present
    pub fn range(&self) -> Option<(i64, i64)> {
        Some((self.from?, self.to?))
    }
}
