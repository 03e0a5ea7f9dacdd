//! Domain errors

mod file_api_error;
mod validation_error;

pub use file_api_error::FileApiError;
pub use validation_error::ValidationError;
