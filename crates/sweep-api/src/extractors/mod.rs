//! Custom extractors for Axum handlers

mod validated;

pub use validated::ValidatedForm;
