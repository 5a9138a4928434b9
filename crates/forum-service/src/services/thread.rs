//! Thread service
//!
//! Thread creation and the aggregated thread view.

use forum_core::entities::{AddedThread, NewThread, ThreadDetail};
use forum_core::{DomainError, IdPrefix};
use tracing::{info, instrument};

use crate::dto::{AddThreadRequest, AddedThreadResponse, ThreadDetailResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Thread service
pub struct ThreadService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ThreadService<'a> {
    /// Create a new ThreadService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a thread owned by the caller
    #[instrument(skip(self, request))]
    pub async fn add_thread(
        &self,
        owner: &str,
        request: AddThreadRequest,
    ) -> ServiceResult<AddedThreadResponse> {
        let thread = NewThread::new(
            self.ctx.generate_id(IdPrefix::Thread),
            request.title.unwrap_or_default(),
            request.body.unwrap_or_default(),
            owner.to_string(),
        );

        self.ctx.thread_repo().create(&thread).await?;

        info!(thread_id = %thread.id, "Thread created");

        Ok(AddedThread::from(&thread).into())
    }

    /// Get a thread with its comments and their replies
    ///
    /// The thread is fetched first; a missing thread fails before any comment
    /// or reply is read. Replies for the whole thread come from a single fetch
    /// and are grouped in memory.
    #[instrument(skip(self))]
    pub async fn get_thread_by_id(&self, thread_id: &str) -> ServiceResult<ThreadDetailResponse> {
        let thread = self
            .ctx
            .thread_repo()
            .find_by_id(thread_id)
            .await?
            .ok_or(DomainError::ThreadNotFound)?;

        let comments = self.ctx.comment_repo().find_by_thread(thread_id).await?;
        let replies = self.ctx.reply_repo().find_by_thread(thread_id).await?;

        Ok(ThreadDetail::assemble(thread, comments, replies).into())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use forum_core::entities::{NewComment, NewReply};
    use forum_core::{DELETED_COMMENT_CONTENT, DELETED_REPLY_CONTENT};

    use super::*;
    use crate::services::ServiceError;
    use crate::testing::InMemoryForum;

    fn seeded_forum(deleted: bool) -> InMemoryForum {
        let forum = InMemoryForum::new();
        let date = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
        forum.add_user("user-123", "dicoding");
        forum.add_user("user-456", "jhon");

        let mut thread = NewThread::new(
            "thread-123".into(),
            "sebuah thread".into(),
            "sebuah body thread".into(),
            "user-123".into(),
        );
        thread.date = date;
        forum.add_thread(thread);

        let mut comment = NewComment::new(
            "comment-123".into(),
            "thread-123".into(),
            "ini adalah isi komentar".into(),
            "user-123".into(),
        );
        comment.date = date;
        forum.add_comment(comment, deleted);

        let mut reply = NewReply::new(
            "reply-123".into(),
            "comment-123".into(),
            "ini adalah isi balasan".into(),
            "user-456".into(),
        );
        reply.date = date;
        forum.add_reply(reply, deleted);

        forum
    }

    #[tokio::test]
    async fn test_get_thread_with_visible_comment_and_reply() {
        let forum = seeded_forum(false);
        let ctx = forum.service_context();

        let thread = ThreadService::new(&ctx)
            .get_thread_by_id("thread-123")
            .await
            .unwrap();

        assert_eq!(thread.id, "thread-123");
        assert_eq!(thread.username, "dicoding");
        assert_eq!(thread.comments.len(), 1);

        let comment = &thread.comments[0];
        assert_eq!(comment.id, "comment-123");
        assert_eq!(comment.content, "ini adalah isi komentar");
        assert_eq!(comment.replies.len(), 1);

        let reply = &comment.replies[0];
        assert_eq!(reply.id, "reply-123");
        assert_eq!(reply.content, "ini adalah isi balasan");
        assert_eq!(reply.username, "jhon");
        assert_eq!(reply.date, Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap());
    }

    #[tokio::test]
    async fn test_get_thread_masks_deleted_content() {
        let forum = seeded_forum(true);
        let ctx = forum.service_context();

        let thread = ThreadService::new(&ctx)
            .get_thread_by_id("thread-123")
            .await
            .unwrap();

        let comment = &thread.comments[0];
        assert_eq!(comment.content, DELETED_COMMENT_CONTENT);
        assert_eq!(comment.replies[0].content, DELETED_REPLY_CONTENT);
    }

    #[tokio::test]
    async fn test_get_thread_without_comments() {
        let forum = InMemoryForum::new();
        forum.add_user("user-123", "dicoding");
        forum.add_thread(NewThread::new(
            "thread-123".into(),
            "judul".into(),
            "isi".into(),
            "user-123".into(),
        ));
        let ctx = forum.service_context();

        let thread = ThreadService::new(&ctx)
            .get_thread_by_id("thread-123")
            .await
            .unwrap();
        assert!(thread.comments.is_empty());
    }

    #[tokio::test]
    async fn test_missing_thread_skips_comment_and_reply_fetches() {
        let forum = seeded_forum(false);
        let ctx = forum.service_context();

        let err = ThreadService::new(&ctx)
            .get_thread_by_id("thread-xxx")
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Domain(DomainError::ThreadNotFound)));
        assert_eq!(err.status_code(), 404);
        assert_eq!(forum.comment_fetches(), 0);
        assert_eq!(forum.reply_fetches(), 0);
    }

    #[tokio::test]
    async fn test_replies_fetched_once_per_thread() {
        let forum = seeded_forum(false);
        forum.add_comment(
            NewComment::new(
                "comment-456".into(),
                "thread-123".into(),
                "komentar kedua".into(),
                "user-456".into(),
            ),
            false,
        );
        let ctx = forum.service_context();

        let thread = ThreadService::new(&ctx)
            .get_thread_by_id("thread-123")
            .await
            .unwrap();

        assert_eq!(thread.comments.len(), 2);
        assert!(thread.comments[1].replies.is_empty());
        assert_eq!(forum.comment_fetches(), 1);
        assert_eq!(forum.reply_fetches(), 1);
    }

    #[tokio::test]
    async fn test_add_thread() {
        let forum = InMemoryForum::new();
        forum.add_user("user-123", "dicoding");
        let ctx = forum.service_context();

        let added = ThreadService::new(&ctx)
            .add_thread(
                "user-123",
                AddThreadRequest {
                    title: Some("sebuah thread".into()),
                    body: Some("sebuah body thread".into()),
                },
            )
            .await
            .unwrap();

        assert!(added.id.starts_with("thread-"));
        assert_eq!(added.title, "sebuah thread");
        assert_eq!(added.owner, "user-123");

        let stored = ThreadService::new(&ctx)
            .get_thread_by_id(&added.id)
            .await
            .unwrap();
        assert_eq!(stored.body, "sebuah body thread");
        assert_eq!(stored.username, "dicoding");
    }
}
