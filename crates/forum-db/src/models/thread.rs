//! Thread database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Thread row joined with the owner's username
#[derive(Debug, Clone, FromRow)]
pub struct ThreadModel {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
}
