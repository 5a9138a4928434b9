//! Domain errors - error types for the domain layer
//!
//! Display strings are user-facing: the API returns them verbatim as the
//! `message` of a failed response.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("thread tidak ditemukan")]
    ThreadNotFound,

    #[error("Komentar pada thread ini tidak ditemukan")]
    CommentNotFound,

    #[error("Balasan tidak ditemukan")]
    ReplyNotFound,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("{0}")]
    ValidationError(String),

    #[error("username tidak ditemukan")]
    UsernameNotFound,

    #[error("refresh token tidak valid")]
    InvalidRefreshToken,

    #[error("refresh token tidak ditemukan di database")]
    RefreshTokenNotFound,

    // =========================================================================
    // Authentication Errors
    // =========================================================================
    #[error("kredensial yang Anda masukkan salah")]
    InvalidCredentials,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Anda tidak berhak mengakses resource ini")]
    NotResourceOwner,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("username tidak tersedia")]
    UsernameTaken,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for logs and API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::ThreadNotFound => "UNKNOWN_THREAD",
            Self::CommentNotFound => "UNKNOWN_COMMENT",
            Self::ReplyNotFound => "UNKNOWN_REPLY",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::UsernameNotFound => "UNKNOWN_USERNAME",
            Self::InvalidRefreshToken => "INVALID_REFRESH_TOKEN",
            Self::RefreshTokenNotFound => "UNKNOWN_REFRESH_TOKEN",

            // Authentication
            Self::InvalidCredentials => "INVALID_CREDENTIALS",

            // Authorization
            Self::NotResourceOwner => "NOT_RESOURCE_OWNER",

            Self::UsernameTaken => "USERNAME_TAKEN",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ThreadNotFound | Self::CommentNotFound | Self::ReplyNotFound
        )
    }

    /// Check if this is a validation error
    ///
    /// Username conflicts are reported as bad input rather than 409.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::UsernameNotFound
                | Self::InvalidRefreshToken
                | Self::RefreshTokenNotFound
                | Self::UsernameTaken
        )
    }

    /// Check if this is an authentication error
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::InvalidCredentials)
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotResourceOwner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(DomainError::ThreadNotFound.code(), "UNKNOWN_THREAD");
        assert_eq!(DomainError::NotResourceOwner.code(), "NOT_RESOURCE_OWNER");
        assert_eq!(DomainError::UsernameTaken.code(), "USERNAME_TAKEN");
    }

    #[test]
    fn test_is_not_found() {
        assert!(DomainError::ThreadNotFound.is_not_found());
        assert!(DomainError::CommentNotFound.is_not_found());
        assert!(DomainError::ReplyNotFound.is_not_found());
        assert!(!DomainError::NotResourceOwner.is_not_found());
    }

    #[test]
    fn test_is_authorization() {
        assert!(DomainError::NotResourceOwner.is_authorization());
        assert!(!DomainError::InvalidCredentials.is_authorization());
        assert!(DomainError::InvalidCredentials.is_authentication());
    }

    #[test]
    fn test_username_taken_is_validation() {
        assert!(DomainError::UsernameTaken.is_validation());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            DomainError::CommentNotFound.to_string(),
            "Komentar pada thread ini tidak ditemukan"
        );
        assert_eq!(
            DomainError::ValidationError("\"content\" is required".to_string()).to_string(),
            "\"content\" is required"
        );
    }
}
