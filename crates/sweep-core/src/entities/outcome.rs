//! Deletion outcome - the terminal state of the delete loop

/// The file a deletion stopped at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionFailure {
    pub file_id: String,
    pub file_name: String,
    pub reason: String,
}

/// Result of deleting a sequence of files
///
/// `deleted` counts files removed before the loop ended and never exceeds
/// `total`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeletionOutcome {
    pub total: usize,
    pub deleted: usize,
    pub failure: Option<DeletionFailure>,
}

impl DeletionOutcome {
    /// Start an outcome for `total` candidate files
    pub fn new(total: usize) -> Self {
        Self {
            total,
            deleted: 0,
            failure: None,
        }
    }

    /// Record one successful delete
    pub fn record_deleted(&mut self) {
        self.deleted = (self.deleted + 1).min(self.total);
    }

    /// Record the failure that ends the loop
    pub fn record_failure(
        &mut self,
        file_id: impl Into<String>,
        file_name: impl Into<String>,
        reason: impl Into<String>,
    ) {
        self.failure = Some(DeletionFailure {
            file_id: file_id.into(),
            file_name: file_name.into(),
            reason: reason.into(),
        });
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }
}
