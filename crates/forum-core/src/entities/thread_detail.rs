//! Aggregated thread view
//!
//! Joins a thread with its comments and the comments' replies into a single
//! read projection. Soft-deleted content is replaced with a fixed sentinel and
//! the storage bookkeeping fields (`is_deleted`, `comment_id`) are dropped.

use chrono::{DateTime, Utc};

use super::{Comment, Reply, Thread};

/// Shown in place of a soft-deleted comment's content
pub const DELETED_COMMENT_CONTENT: &str = "**komentar telah dihapus**";

/// Shown in place of a soft-deleted reply's content
pub const DELETED_REPLY_CONTENT: &str = "**balasan telah dihapus**";

/// A thread with its comments and their replies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadDetail {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
    pub comments: Vec<CommentDetail>,
}

/// Comment as it appears inside a [`ThreadDetail`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDetail {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub replies: Vec<ReplyDetail>,
}

/// Reply as it appears inside a [`CommentDetail`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyDetail {
    pub id: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub username: String,
}

impl ThreadDetail {
    /// Assemble the view from independently fetched rows.
    ///
    /// Comment order and reply order are taken as given. Each comment receives
    /// the replies whose `comment_id` equals its `id`, in their original order.
    pub fn assemble(thread: Thread, comments: Vec<Comment>, replies: Vec<Reply>) -> Self {
        let comments = comments
            .into_iter()
            .map(|comment| {
                let replies = replies
                    .iter()
                    .filter(|reply| reply.comment_id == comment.id)
                    .map(ReplyDetail::from)
                    .collect();
                CommentDetail::new(comment, replies)
            })
            .collect();

        Self {
            id: thread.id,
            title: thread.title,
            body: thread.body,
            date: thread.date,
            username: thread.username,
            comments,
        }
    }
}

impl CommentDetail {
    fn new(comment: Comment, replies: Vec<ReplyDetail>) -> Self {
        let content = if comment.is_deleted {
            DELETED_COMMENT_CONTENT.to_string()
        } else {
            comment.content
        };

        Self {
            id: comment.id,
            username: comment.username,
            date: comment.date,
            content,
            replies,
        }
    }
}

impl From<&Reply> for ReplyDetail {
    fn from(reply: &Reply) -> Self {
        let content = if reply.is_deleted {
            DELETED_REPLY_CONTENT.to_string()
        } else {
            reply.content.clone()
        };

        Self {
            id: reply.id.clone(),
            content,
            date: reply.date,
            username: reply.username.clone(),
        }
    }
}
