//! Response types and error handling for API endpoints
//!
//! Every body uses the `status` envelope: `success` with optional `message`
//! and `data`, `fail` for client errors and `error` for server errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use forum_common::{AppError, ErrorResponse};
use forum_core::DomainError;
use forum_service::ServiceError;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    App(#[from] AppError),

    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Payload or path validation failure, message shown verbatim
    #[error("{0}")]
    Validation(String),

    #[error("Missing authentication")]
    MissingAuth,
}

impl ApiError {
    /// Create a validation error with a custom message
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Collapse into the application error that decides status and message
    fn into_app_error(self) -> AppError {
        match self {
            Self::App(e) => e,
            Self::Service(e) => e.into(),
            Self::Domain(e) => AppError::Domain(e),
            Self::Validation(msg) => AppError::Validation(msg),
            Self::MissingAuth => AppError::MissingAuth,
        }
    }

    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        let code = match self {
            Self::App(e) => e.status_code(),
            Self::Service(e) => e.status_code(),
            Self::Domain(e) => AppError::status_code_for(e),
            Self::Validation(_) => 400,
            Self::MissingAuth => 401,
        };
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let app_err = self.into_app_error();

        if status.is_server_error() {
            error!(code = app_err.error_code(), error = ?app_err, "Server error occurred");
        } else {
            debug!(code = app_err.error_code(), status = status.as_u16(), "Request rejected");
        }

        let body = ErrorResponse::from(app_err);
        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Success envelope
#[derive(Debug, Serialize)]
pub struct Success<T> {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

impl<T> Success<T> {
    /// `{"status": "success", "data": ...}`
    pub fn data(data: T) -> Self {
        Self {
            status: "success",
            message: None,
            data: Some(data),
        }
    }

    /// `{"status": "success", "message": ..., "data": ...}`
    pub fn with_message(message: &'static str, data: T) -> Self {
        Self {
            status: "success",
            message: Some(message),
            data: Some(data),
        }
    }
}

impl Success<()> {
    /// `{"status": "success"}`
    pub fn empty() -> Self {
        Self {
            status: "success",
            message: None,
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for Success<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Created response (201) with JSON body
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        *response.status_mut() = StatusCode::CREATED;
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_status_codes() {
        assert_eq!(ApiError::MissingAuth.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::validation("\"content\" is required").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::from(DomainError::NotResourceOwner).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::from(ServiceError::from(DomainError::ThreadNotFound)).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_success_envelope() {
        let body = serde_json::to_value(Success::data(serde_json::json!({"id": 1}))).unwrap();
        assert_eq!(body["status"], "success");
        assert_eq!(body["data"]["id"], 1);
        assert!(body.get("message").is_none());

        let body = serde_json::to_value(Success::empty()).unwrap();
        assert_eq!(body, serde_json::json!({"status": "success"}));
    }
}
