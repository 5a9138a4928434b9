//! Thread handlers

use axum::extract::State;
use forum_service::{AddThreadRequest, AddedThreadData, ThreadData, ThreadService};

use crate::extractors::{AuthUser, ResourcePath, ThreadPath, ValidatedJson};
use crate::response::{ApiResult, Created, Success};
use crate::state::AppState;

/// Create a thread
///
/// POST /threads
pub async fn add_thread(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<AddThreadRequest>,
) -> ApiResult<Created<Success<AddedThreadData>>> {
    let service = ThreadService::new(state.service_context());
    let added_thread = service.add_thread(&auth.user_id, request).await?;
    Ok(Created(Success::with_message(
        "Thread berhasil ditambahkan",
        AddedThreadData { added_thread },
    )))
}

/// Get a thread with its comments and replies
///
/// GET /threads/:thread_id
pub async fn get_thread(
    State(state): State<AppState>,
    ResourcePath(path): ResourcePath<ThreadPath>,
) -> ApiResult<Success<ThreadData>> {
    let service = ThreadService::new(state.service_context());
    let thread = service.get_thread_by_id(&path.thread_id).await?;
    Ok(Success::data(ThreadData { thread }))
}
