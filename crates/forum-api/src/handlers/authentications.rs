//! Authentication handlers
//!
//! Login issues a token pair, PUT exchanges a refresh token for a new access
//! token, DELETE revokes the refresh token.

use axum::extract::State;
use forum_service::{
    AccessTokenResponse, AuthService, LoginRequest, LogoutRequest, RefreshTokenRequest,
    TokenPairResponse,
};

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created, Success};
use crate::state::AppState;

/// Login with username and password
///
/// POST /authentications
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Created<Success<TokenPairResponse>>> {
    let service = AuthService::new(state.service_context());
    let tokens = service.login(request).await?;
    Ok(Created(Success::data(tokens)))
}

/// Refresh access token
///
/// PUT /authentications
pub async fn refresh_token(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RefreshTokenRequest>,
) -> ApiResult<Success<AccessTokenResponse>> {
    let service = AuthService::new(state.service_context());
    let token = service.refresh(request).await?;
    Ok(Success::data(token))
}

/// Logout
///
/// DELETE /authentications
pub async fn logout(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LogoutRequest>,
) -> ApiResult<Success<()>> {
    let service = AuthService::new(state.service_context());
    service.logout(request).await?;
    Ok(Success::empty())
}
