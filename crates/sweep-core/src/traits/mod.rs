//! Port traits implemented by the infrastructure layer

mod file_api;

pub use file_api::{ApiResult, FileApi};
