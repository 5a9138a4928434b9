//! Test fixtures and data generators
//!
//! Request bodies and response envelopes for integration tests.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Username that is unique across test runs against the same database
pub fn unique_username() -> String {
    format!("user_{}", Uuid::new_v4().simple())
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub fullname: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        Self {
            username: unique_username(),
            password: "secret".to_string(),
            fullname: "Dicoding Indonesia".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            username: reg.username.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Refresh or logout request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

#[derive(Debug, Serialize)]
pub struct AddThreadRequest {
    pub title: String,
    pub body: String,
}

impl Default for AddThreadRequest {
    fn default() -> Self {
        Self {
            title: "sebuah thread".to_string(),
            body: "sebuah body thread".to_string(),
        }
    }
}

/// Comment or reply request
#[derive(Debug, Serialize)]
pub struct ContentRequest {
    pub content: String,
}

impl ContentRequest {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
        }
    }
}

/// `{"status": "success", "data": ...}`
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub status: String,
    pub message: Option<String>,
    pub data: T,
}

/// `{"status": "fail" | "error", "message": ...}`
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedUserData {
    pub added_user: AddedUser,
}

#[derive(Debug, Deserialize)]
pub struct AddedUser {
    pub id: String,
    pub username: String,
    pub fullname: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessToken {
    pub access_token: String,
}

/// Id, content/title and owner of a created resource
#[derive(Debug, Deserialize)]
pub struct AddedResource {
    pub id: String,
    pub owner: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedThreadData {
    pub added_thread: AddedResource,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedCommentData {
    pub added_comment: AddedResource,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedReplyData {
    pub added_reply: AddedResource,
}

#[derive(Debug, Deserialize)]
pub struct ThreadData {
    pub thread: ThreadDetail,
}

#[derive(Debug, Deserialize)]
pub struct ThreadDetail {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: String,
    pub username: String,
    pub comments: Vec<CommentDetail>,
}

#[derive(Debug, Deserialize)]
pub struct CommentDetail {
    pub id: String,
    pub username: String,
    pub date: String,
    pub content: String,
    pub replies: Vec<ReplyDetail>,
}

#[derive(Debug, Deserialize)]
pub struct ReplyDetail {
    pub id: String,
    pub content: String,
    pub date: String,
    pub username: String,
}
