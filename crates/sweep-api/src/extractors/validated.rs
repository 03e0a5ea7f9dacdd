//! Validated form extractor
//!
//! Extracts and validates `application/x-www-form-urlencoded` bodies using
//! the validator crate.

use axum::{
    async_trait,
    extract::{rejection::FormRejection, FromRequest, Request},
    Form,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::response::ApiError;

/// Validated form extractor
///
/// The inner type must implement both `Deserialize` and `Validate`.
#[derive(Debug, Clone)]
pub struct ValidatedForm<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state).await.map_err(|e| match e {
            FormRejection::InvalidFormContentType(e) => ApiError::invalid_form(e.body_text()),
            FormRejection::FailedToDeserializeForm(e) => ApiError::invalid_form(e.body_text()),
            FormRejection::FailedToDeserializeFormBody(e) => {
                ApiError::invalid_form(e.body_text())
            }
            FormRejection::BytesRejection(e) => ApiError::invalid_form(e.body_text()),
            _ => ApiError::invalid_form("Invalid form body"),
        })?;

        value.validate()?;

        Ok(ValidatedForm(value))
    }
}
