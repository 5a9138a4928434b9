//! Thread entity - a top-level discussion topic

use chrono::{DateTime, Utc};

/// Thread as read back from storage, joined with the owner's username
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thread {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
}

/// A thread about to be persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewThread {
    pub id: String,
    pub title: String,
    pub body: String,
    /// User ID of the creator
    pub owner: String,
    pub date: DateTime<Utc>,
}

impl NewThread {
    /// Create a new thread stamped with the current time
    pub fn new(id: String, title: String, body: String, owner: String) -> Self {
        Self {
            id,
            title,
            body,
            owner,
            date: Utc::now(),
        }
    }
}

/// Result of a successful thread creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedThread {
    pub id: String,
    pub title: String,
    pub owner: String,
}

impl From<&NewThread> for AddedThread {
    fn from(thread: &NewThread) -> Self {
        Self {
            id: thread.id.clone(),
            title: thread.title.clone(),
            owner: thread.owner.clone(),
        }
    }
}
