//! Comment database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Comment row joined with the author's username
#[derive(Debug, Clone, FromRow)]
pub struct CommentModel {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub is_deleted: bool,
}
