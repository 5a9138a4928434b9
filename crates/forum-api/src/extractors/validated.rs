//! Validated JSON extractor
//!
//! Extracts and validates JSON request bodies. Rejections are reported with
//! the same field-oriented messages as payload validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use forum_service::ValidatePayload;
use serde::de::DeserializeOwned;

use crate::response::ApiError;

/// Reported when the body is missing, malformed or not an object
const NOT_AN_OBJECT: &str = "\"value\" must be of type object";

/// Validated JSON extractor
///
/// Extracts a JSON body and validates it with [`ValidatePayload`].
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + ValidatePayload,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::validation(rejection_message(&rejection)))?;

        value.validate_payload().map_err(ApiError::Validation)?;

        Ok(ValidatedJson(value))
    }
}

fn rejection_message(rejection: &JsonRejection) -> String {
    match rejection {
        JsonRejection::JsonDataError(e) => type_error_message(&e.body_text()),
        _ => NOT_AN_OBJECT.to_string(),
    }
}

/// Turn `"<prefix>: <field>: invalid type: ..."` into `"<field>" must be a string`
fn type_error_message(detail: &str) -> String {
    let detail = detail
        .split_once("target type: ")
        .map_or(detail, |(_, rest)| rest);

    match detail.split_once(": ") {
        Some((field, rest)) if !detail.starts_with("invalid type") && rest.starts_with("invalid type") => {
            if rest.contains("expected a string") {
                format!("\"{field}\" must be a string")
            } else {
                format!("\"{field}\" is invalid")
            }
        }
        _ => NOT_AN_OBJECT.to_string(),
    }
}
