//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use forum_core::entities::{
    AddedComment, AddedReply, AddedThread, AddedUser, CommentDetail, ReplyDetail, ThreadDetail,
};
use forum_common::TokenPair;

use super::responses::{
    AddedCommentResponse, AddedReplyResponse, AddedThreadResponse, AddedUserResponse,
    CommentDetailResponse, ReplyDetailResponse, ThreadDetailResponse, TokenPairResponse,
};

impl From<AddedUser> for AddedUserResponse {
    fn from(user: AddedUser) -> Self {
        Self {
            id: user.id,
            username: user.username,
            fullname: user.fullname,
        }
    }
}

impl From<TokenPair> for TokenPairResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        }
    }
}

impl From<AddedThread> for AddedThreadResponse {
    fn from(thread: AddedThread) -> Self {
        Self {
            id: thread.id,
            title: thread.title,
            owner: thread.owner,
        }
    }
}

impl From<AddedComment> for AddedCommentResponse {
    fn from(comment: AddedComment) -> Self {
        Self {
            id: comment.id,
            content: comment.content,
            owner: comment.owner,
        }
    }
}

impl From<AddedReply> for AddedReplyResponse {
    fn from(reply: AddedReply) -> Self {
        Self {
            id: reply.id,
            content: reply.content,
            owner: reply.owner,
        }
    }
}

// ============================================================================
// Thread Detail Mappers
// ============================================================================

impl From<ThreadDetail> for ThreadDetailResponse {
    fn from(detail: ThreadDetail) -> Self {
        Self {
            id: detail.id,
            title: detail.title,
            body: detail.body,
            date: detail.date,
            username: detail.username,
            comments: detail.comments.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<CommentDetail> for CommentDetailResponse {
    fn from(comment: CommentDetail) -> Self {
        Self {
            id: comment.id,
            username: comment.username,
            date: comment.date,
            content: comment.content,
            replies: comment.replies.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<ReplyDetail> for ReplyDetailResponse {
    fn from(reply: ReplyDetail) -> Self {
        Self {
            id: reply.id,
            content: reply.content,
            date: reply.date,
            username: reply.username,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use forum_core::entities::{Comment, Reply, Thread};

    use super::*;

    #[test]
    fn test_thread_detail_json_omits_bookkeeping_fields() {
        let date = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
        let detail = ThreadDetail::assemble(
            Thread {
                id: "thread-123".to_string(),
                title: "judul".to_string(),
                body: "isi".to_string(),
                date,
                username: "dicoding".to_string(),
            },
            vec![Comment {
                id: "comment-123".to_string(),
                username: "dicoding".to_string(),
                date,
                content: "ini adalah isi komentar".to_string(),
                is_deleted: false,
            }],
            vec![Reply {
                id: "reply-123".to_string(),
                content: "ini adalah isi balasan".to_string(),
                date,
                username: "jhon".to_string(),
                comment_id: "comment-123".to_string(),
                is_deleted: false,
            }],
        );

        let json = serde_json::to_value(ThreadDetailResponse::from(detail)).unwrap();
        let comment = &json["comments"][0];
        let reply = &comment["replies"][0];

        assert!(comment.get("is_deleted").is_none());
        assert!(comment.get("isDeleted").is_none());
        assert!(reply.get("comment_id").is_none());
        assert!(reply.get("is_deleted").is_none());
        assert_eq!(reply["content"], "ini adalah isi balasan");
        assert_eq!(reply["username"], "jhon");
    }
}
