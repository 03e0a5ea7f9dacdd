//! Filter validation
//!
//! Runs before any network call. Pure: the same request always yields the
//! same answer.

use crate::entities::FileFilterRequest;
use crate::error::ValidationError;

/// Check that a filter request has a complete, ordered date range
pub fn validate(request: &FileFilterRequest) -> Result<(), ValidationError> {
    let from = request.from.ok_or(ValidationError::MissingStart)?;
    let to = request.to.ok_or(ValidationError::MissingEnd)?;

    if from > to {
        return Err(ValidationError::InvertedRange { from, to });
    }

    Ok(())
}
