//! Reply service

use forum_core::entities::{AddedReply, NewReply};
use forum_core::{DomainError, IdPrefix};
use tracing::{info, instrument, warn};

use crate::dto::{AddReplyRequest, AddedReplyResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Reply service
pub struct ReplyService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReplyService<'a> {
    /// Create a new ReplyService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Reply to a comment of an existing thread
    #[instrument(skip(self, request))]
    pub async fn add_reply(
        &self,
        thread_id: &str,
        comment_id: &str,
        owner: &str,
        request: AddReplyRequest,
    ) -> ServiceResult<AddedReplyResponse> {
        if !self.ctx.thread_repo().exists(thread_id).await? {
            return Err(DomainError::ThreadNotFound.into());
        }

        if self
            .ctx
            .comment_repo()
            .find_owner(comment_id, thread_id)
            .await?
            .is_none()
        {
            return Err(DomainError::CommentNotFound.into());
        }

        let reply = NewReply::new(
            self.ctx.generate_id(IdPrefix::Reply),
            comment_id.to_string(),
            request.content.unwrap_or_default(),
            owner.to_string(),
        );

        self.ctx.reply_repo().create(&reply).await?;

        info!(reply_id = %reply.id, "Reply added");

        Ok(AddedReply::from(&reply).into())
    }

    /// Soft-delete a reply owned by the caller
    #[instrument(skip(self))]
    pub async fn delete_reply(
        &self,
        thread_id: &str,
        comment_id: &str,
        reply_id: &str,
        owner: &str,
    ) -> ServiceResult<()> {
        let reply_owner = self
            .ctx
            .reply_repo()
            .find_owner(reply_id, comment_id, thread_id)
            .await?
            .ok_or(DomainError::ReplyNotFound)?;

        if reply_owner != owner {
            warn!(reply_id, caller = owner, "Reply delete rejected: not owner");
            return Err(DomainError::NotResourceOwner.into());
        }

        self.ctx.reply_repo().soft_delete(reply_id).await?;

        info!(reply_id, "Reply deleted");

        Ok(())
    }
}
