//! User database models

use sqlx::FromRow;

/// Login lookup row
#[derive(Debug, Clone, FromRow)]
pub struct CredentialsModel {
    pub id: String,
    pub password: String,
}
