//! Reply entity - a reply attached to a comment

use chrono::{DateTime, Utc};

/// Reply as fetched for a whole thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub id: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub username: String,
    /// Parent comment; the only key used to nest replies
    pub comment_id: String,
    pub is_deleted: bool,
}

/// A reply about to be persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReply {
    pub id: String,
    pub comment_id: String,
    pub content: String,
    pub owner: String,
    pub date: DateTime<Utc>,
}

impl NewReply {
    /// Create a new reply stamped with the current time
    pub fn new(id: String, comment_id: String, content: String, owner: String) -> Self {
        Self {
            id,
            comment_id,
            content,
            owner,
            date: Utc::now(),
        }
    }
}

/// Result of a successful reply creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedReply {
    pub id: String,
    pub content: String,
    pub owner: String,
}

impl From<&NewReply> for AddedReply {
    fn from(reply: &NewReply) -> Self {
        Self {
            id: reply.id.clone(),
            content: reply.content.clone(),
            owner: reply.owner.clone(),
        }
    }
}
