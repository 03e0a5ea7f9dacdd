//! Deletion orchestrator
//!
//! Deletes files one at a time in lookup order and stops at the first
//! failure. No retry, no rollback: files removed before the failure stay
//! removed and are reported.

use sweep_core::{DeletionOutcome, FileRecord};
use tracing::{info, instrument, warn};

use super::context::ServiceContext;

/// Sequential delete loop over a looked-up file set
pub struct DeletionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DeletionService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Delete `files` in order, ending early on the first error
    #[instrument(skip(self, files), fields(total = files.len()))]
    pub async fn delete_all(&self, files: &[FileRecord]) -> DeletionOutcome {
        let mut outcome = DeletionOutcome::new(files.len());

        for file in files {
            if let Err(e) = self.ctx.file_api().delete_file(&file.id).await {
                warn!(
                    file_id = %file.id,
                    deleted = outcome.deleted,
                    error = %e,
                    "Delete failed, stopping"
                );
                outcome.record_failure(&file.id, file.display_name(), e.reason());
                return outcome;
            }
            outcome.record_deleted();
        }

        info!(deleted = outcome.deleted, "All files deleted");
        outcome
    }
}
