//! Error handling utilities for repositories

use forum_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_error_falls_back() {
        let err = map_unique_violation(SqlxError::RowNotFound, || DomainError::UsernameTaken);
        assert!(matches!(err, DomainError::DatabaseError(_)));
    }

    #[test]
    fn test_map_db_error() {
        let err = map_db_error(SqlxError::PoolTimedOut);
        assert_eq!(err.code(), "DATABASE_ERROR");
    }
}
