//! Reply database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Reply row joined with the author's username
#[derive(Debug, Clone, FromRow)]
pub struct ReplyModel {
    pub id: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub username: String,
    pub comment_id: String,
    pub is_deleted: bool,
}
