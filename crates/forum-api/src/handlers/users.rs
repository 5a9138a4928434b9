//! User handlers

use axum::extract::State;
use forum_service::{AddedUserData, RegisterUserRequest, UserService};

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created, Success};
use crate::state::AppState;

/// Register a new user
///
/// POST /users
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterUserRequest>,
) -> ApiResult<Created<Success<AddedUserData>>> {
    let service = UserService::new(state.service_context());
    let added_user = service.register(request).await?;
    Ok(Created(Success::data(AddedUserData { added_user })))
}
