//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use forum_common::AppError;
use forum_core::DomainError;
use std::fmt;

/// Service layer error type
#[derive(Debug)]
pub enum ServiceError {
    /// Domain rule violation
    Domain(DomainError),

    /// Application error (auth, tokens, hashing)
    App(AppError),

    /// Invalid input
    Validation(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain(e) => write!(f, "{e}"),
            Self::App(e) => write!(f, "{e}"),
            Self::Validation(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Domain(e) => Some(e),
            Self::App(e) => Some(e),
            _ => None,
        }
    }
}

impl ServiceError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => AppError::status_code_for(e),
            Self::App(e) => e.status_code(),
            Self::Validation(_) => 400,
        }
    }
}

impl From<DomainError> for ServiceError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<AppError> for ServiceError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Domain(e) => Self::Domain(e),
            other => Self::App(other),
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::App(e) => e,
            ServiceError::Validation(msg) => AppError::Validation(msg),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_status_codes() {
        assert_eq!(ServiceError::from(DomainError::ThreadNotFound).status_code(), 404);
        assert_eq!(ServiceError::from(DomainError::NotResourceOwner).status_code(), 403);
        assert_eq!(ServiceError::from(DomainError::UsernameTaken).status_code(), 400);
        assert_eq!(
            ServiceError::from(DomainError::DatabaseError("boom".into())).status_code(),
            500
        );
    }

    #[test]
    fn test_validation_error_keeps_message() {
        let err = ServiceError::validation("\"content\" is required");
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.to_string(), "\"content\" is required");
    }

    #[test]
    fn test_app_domain_error_is_unwrapped() {
        let err = ServiceError::from(AppError::Domain(DomainError::CommentNotFound));
        assert!(matches!(err, ServiceError::Domain(DomainError::CommentNotFound)));
    }

    #[test]
    fn test_convert_to_app_error() {
        let app_err: AppError = ServiceError::from(DomainError::ReplyNotFound).into();
        assert_eq!(app_err.status_code(), 404);
        assert_eq!(app_err.to_string(), "Balasan tidak ditemukan");

        let app_err: AppError = ServiceError::from(DomainError::DatabaseError("boom".into())).into();
        assert!(app_err.is_server_error());
    }
}
