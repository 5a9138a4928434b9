//! Comment handlers

use axum::extract::State;
use forum_service::{AddCommentRequest, AddedCommentData, CommentService};

use crate::extractors::{AuthUser, CommentPath, ResourcePath, ThreadPath, ValidatedJson};
use crate::response::{ApiResult, Created, Success};
use crate::state::AppState;

/// Comment on a thread
///
/// POST /threads/:thread_id/comments
pub async fn add_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    ResourcePath(path): ResourcePath<ThreadPath>,
    ValidatedJson(request): ValidatedJson<AddCommentRequest>,
) -> ApiResult<Created<Success<AddedCommentData>>> {
    let service = CommentService::new(state.service_context());
    let added_comment = service
        .add_comment(&path.thread_id, &auth.user_id, request)
        .await?;
    Ok(Created(Success::data(AddedCommentData { added_comment })))
}

/// Soft-delete a comment
///
/// DELETE /threads/:thread_id/comments/:comment_id
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    ResourcePath(path): ResourcePath<CommentPath>,
) -> ApiResult<Success<()>> {
    let service = CommentService::new(state.service_context());
    service
        .delete_comment(&path.thread_id, &path.comment_id, &auth.user_id)
        .await?;
    Ok(Success::empty())
}
