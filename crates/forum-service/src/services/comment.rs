//! Comment service
//!
//! Adding comments to threads and soft-deleting them.

use forum_core::entities::{AddedComment, NewComment};
use forum_core::{DomainError, IdPrefix};
use tracing::{info, instrument, warn};

use crate::dto::{AddCommentRequest, AddedCommentResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add a comment to an existing thread
    #[instrument(skip(self, request))]
    pub async fn add_comment(
        &self,
        thread_id: &str,
        owner: &str,
        request: AddCommentRequest,
    ) -> ServiceResult<AddedCommentResponse> {
        if !self.ctx.thread_repo().exists(thread_id).await? {
            return Err(DomainError::ThreadNotFound.into());
        }

        let comment = NewComment::new(
            self.ctx.generate_id(IdPrefix::Comment),
            thread_id.to_string(),
            request.content.unwrap_or_default(),
            owner.to_string(),
        );

        self.ctx.comment_repo().create(&comment).await?;

        info!(comment_id = %comment.id, "Comment added");

        Ok(AddedComment::from(&comment).into())
    }

    /// Soft-delete a comment owned by the caller
    #[instrument(skip(self))]
    pub async fn delete_comment(
        &self,
        thread_id: &str,
        comment_id: &str,
        owner: &str,
    ) -> ServiceResult<()> {
        let comment_owner = self
            .ctx
            .comment_repo()
            .find_owner(comment_id, thread_id)
            .await?
            .ok_or(DomainError::CommentNotFound)?;

        if comment_owner != owner {
            warn!(comment_id, caller = owner, "Comment delete rejected: not owner");
            return Err(DomainError::NotResourceOwner.into());
        }

        self.ctx.comment_repo().soft_delete(comment_id).await?;

        info!(comment_id, "Comment deleted");

        Ok(())
    }
}
