//! Authentication service
//!
//! Handles login, access token refresh, and logout. Refresh tokens are
//! registered in storage on login and removed on logout.

use forum_core::DomainError;
use tracing::{info, instrument, warn};

use crate::dto::{
    AccessTokenResponse, LoginRequest, LogoutRequest, RefreshTokenRequest, TokenPairResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Login with username and password
    #[instrument(skip(self, request), fields(username = ?request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<TokenPairResponse> {
        let username = request.username.unwrap_or_default();

        let credentials = self
            .ctx
            .user_repo()
            .find_credentials(&username)
            .await?
            .ok_or_else(|| {
                warn!(%username, "Login failed: username not found");
                DomainError::UsernameNotFound
            })?;

        self.ctx
            .password_service()
            .verify_or_error(&request.password.unwrap_or_default(), &credentials.password_hash)
            .inspect_err(|_| warn!(user_id = %credentials.id, "Login failed: invalid password"))?;

        let token_pair = self.ctx.jwt_service().generate_token_pair(&credentials.id)?;
        self.ctx
            .auth_repo()
            .add_token(&token_pair.refresh_token)
            .await?;

        info!(user_id = %credentials.id, "User logged in successfully");

        Ok(token_pair.into())
    }

    /// Issue a new access token for a registered refresh token
    #[instrument(skip(self, request))]
    pub async fn refresh(&self, request: RefreshTokenRequest) -> ServiceResult<AccessTokenResponse> {
        let refresh_token = request.refresh_token.unwrap_or_default();

        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(&refresh_token)
            .map_err(|e| {
                warn!(error = %e, "Refresh failed: invalid token");
                DomainError::InvalidRefreshToken
            })?;

        if !self.ctx.auth_repo().token_exists(&refresh_token).await? {
            warn!(user_id = %claims.user_id(), "Refresh failed: token not registered");
            return Err(DomainError::RefreshTokenNotFound.into());
        }

        let access_token = self
            .ctx
            .jwt_service()
            .generate_access_token(claims.user_id())?;

        Ok(AccessTokenResponse { access_token })
    }

    /// Revoke a refresh token
    #[instrument(skip(self, request))]
    pub async fn logout(&self, request: LogoutRequest) -> ServiceResult<()> {
        let refresh_token = request.refresh_token.unwrap_or_default();

        if !self.ctx.auth_repo().token_exists(&refresh_token).await? {
            return Err(DomainError::RefreshTokenNotFound.into());
        }

        self.ctx.auth_repo().delete_token(&refresh_token).await?;

        info!("Refresh token revoked");

        Ok(())
    }
}
