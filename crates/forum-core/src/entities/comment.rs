//! Comment entity - a reply attached directly to a thread

use chrono::{DateTime, Utc};

/// Comment as fetched for a thread, joined with the author's username
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub is_deleted: bool,
}

/// A comment about to be persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub id: String,
    pub thread_id: String,
    pub content: String,
    pub owner: String,
    pub date: DateTime<Utc>,
}

impl NewComment {
    /// Create a new comment stamped with the current time
    pub fn new(id: String, thread_id: String, content: String, owner: String) -> Self {
        Self {
            id,
            thread_id,
            content,
            owner,
            date: Utc::now(),
        }
    }
}

/// Result of a successful comment creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedComment {
    pub id: String,
    pub content: String,
    pub owner: String,
}

impl From<&NewComment> for AddedComment {
    fn from(comment: &NewComment) -> Self {
        Self {
            id: comment.id.clone(),
            content: comment.content.clone(),
            owner: comment.owner.clone(),
        }
    }
}
