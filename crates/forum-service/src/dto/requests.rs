//! Request DTOs for API endpoints
//!
//! Every field is optional at the type level so that a missing field and an
//! empty field can be reported with distinct messages. Validation guarantees
//! presence before a request reaches a service.

use serde::Deserialize;
use validator::{Validate, ValidationErrors};

/// Payload validation with deterministic error reporting
///
/// Only the first violation is reported, following field declaration order.
pub trait ValidatePayload: Validate {
    /// Field names in declaration order
    const FIELDS: &'static [&'static str];

    /// Validate and return the first violation message
    fn validate_payload(&self) -> Result<(), String> {
        self.validate()
            .map_err(|errors| first_violation(Self::FIELDS, &errors))
    }
}

fn first_violation(fields: &[&str], errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();

    fields
        .iter()
        .filter_map(|field| field_errors.get(*field))
        .chain(field_errors.values())
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(ToString::to_string))
        .unwrap_or_else(|| "payload tidak valid".to_string())
}

// ============================================================================
// User Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RegisterUserRequest {
    #[validate(
        required(message = "\"username\" is required"),
        length(min = 1, message = "\"username\" is not allowed to be empty")
    )]
    pub username: Option<String>,

    #[validate(
        required(message = "\"password\" is required"),
        length(min = 1, message = "\"password\" is not allowed to be empty")
    )]
    pub password: Option<String>,

    #[validate(
        required(message = "\"fullname\" is required"),
        length(min = 1, message = "\"fullname\" is not allowed to be empty")
    )]
    pub fullname: Option<String>,
}

impl ValidatePayload for RegisterUserRequest {
    const FIELDS: &'static [&'static str] = &["username", "password", "fullname"];
}

// ============================================================================
// Authentication Requests
// ============================================================================

/// Login request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(
        required(message = "\"username\" is required"),
        length(min = 1, message = "\"username\" is not allowed to be empty")
    )]
    pub username: Option<String>,

    #[validate(
        required(message = "\"password\" is required"),
        length(min = 1, message = "\"password\" is not allowed to be empty")
    )]
    pub password: Option<String>,
}

impl ValidatePayload for LoginRequest {
    const FIELDS: &'static [&'static str] = &["username", "password"];
}

/// Body of token refresh and logout requests
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    #[validate(
        required(message = "\"refreshToken\" is required"),
        length(min = 1, message = "\"refreshToken\" is not allowed to be empty")
    )]
    pub refresh_token: Option<String>,
}

impl ValidatePayload for RefreshTokenRequest {
    const FIELDS: &'static [&'static str] = &["refresh_token"];
}

/// Logout carries the refresh token to revoke
pub type LogoutRequest = RefreshTokenRequest;

// ============================================================================
// Thread Requests
// ============================================================================

/// Create thread request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AddThreadRequest {
    #[validate(
        required(message = "\"title\" is required"),
        length(min = 1, message = "\"title\" is not allowed to be empty")
    )]
    pub title: Option<String>,

    #[validate(
        required(message = "\"body\" is required"),
        length(min = 1, message = "\"body\" is not allowed to be empty")
    )]
    pub body: Option<String>,
}

impl ValidatePayload for AddThreadRequest {
    const FIELDS: &'static [&'static str] = &["title", "body"];
}

// ============================================================================
// Comment / Reply Requests
// ============================================================================

/// Create comment request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AddCommentRequest {
    #[validate(
        required(message = "\"content\" is required"),
        length(min = 1, message = "\"content\" is not allowed to be empty")
    )]
    pub content: Option<String>,
}

impl ValidatePayload for AddCommentRequest {
    const FIELDS: &'static [&'static str] = &["content"];
}

/// Replies share the comment payload
pub type AddReplyRequest = AddCommentRequest;
