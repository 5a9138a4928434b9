//! Reply handlers

use axum::extract::State;
use forum_service::{AddReplyRequest, AddedReplyData, ReplyService};

use crate::extractors::{AuthUser, CommentPath, ReplyPath, ResourcePath, ValidatedJson};
use crate::response::{ApiResult, Created, Success};
use crate::state::AppState;

/// Reply to a comment
///
/// POST /threads/:thread_id/comments/:comment_id/replies
pub async fn add_reply(
    State(state): State<AppState>,
    auth: AuthUser,
    ResourcePath(path): ResourcePath<CommentPath>,
    ValidatedJson(request): ValidatedJson<AddReplyRequest>,
) -> ApiResult<Created<Success<AddedReplyData>>> {
    let service = ReplyService::new(state.service_context());
    let added_reply = service
        .add_reply(&path.thread_id, &path.comment_id, &auth.user_id, request)
        .await?;
    Ok(Created(Success::data(AddedReplyData { added_reply })))
}

/// Soft-delete a reply
///
/// DELETE /threads/:thread_id/comments/:comment_id/replies/:reply_id
pub async fn delete_reply(
    State(state): State<AppState>,
    auth: AuthUser,
    ResourcePath(path): ResourcePath<ReplyPath>,
) -> ApiResult<Success<()>> {
    let service = ReplyService::new(state.service_context());
    service
        .delete_reply(&path.thread_id, &path.comment_id, &path.reply_id, &auth.user_id)
        .await?;
    Ok(Success::empty())
}
