//! User service
//!
//! Account registration.

use forum_core::entities::{AddedUser, NewUser};
use forum_core::{DomainError, IdPrefix};
use tracing::{info, instrument};

use crate::dto::{AddedUserResponse, RegisterUserRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Longest accepted username
pub const MAX_USERNAME_LEN: usize = 50;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(username = ?request.username))]
    pub async fn register(&self, request: RegisterUserRequest) -> ServiceResult<AddedUserResponse> {
        let username = request.username.unwrap_or_default();
        validate_username(&username)?;

        if self.ctx.user_repo().username_exists(&username).await? {
            return Err(DomainError::UsernameTaken.into());
        }

        let password_hash = self
            .ctx
            .password_service()
            .hash(&request.password.unwrap_or_default())?;

        let user = NewUser::new(
            self.ctx.generate_id(IdPrefix::User),
            username,
            request.fullname.unwrap_or_default(),
        );

        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, "User registered successfully");

        Ok(AddedUser::from(&user).into())
    }
}

fn validate_username(username: &str) -> ServiceResult<()> {
    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(ServiceError::validation(
            "tidak dapat membuat user baru karena karakter username melebihi batas limit",
        ));
    }

    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(ServiceError::validation(
            "tidak dapat membuat user baru karena username mengandung karakter terlarang",
        ));
    }

    Ok(())
}
