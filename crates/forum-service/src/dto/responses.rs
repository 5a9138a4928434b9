//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output with camelCase keys.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// User / Auth Responses
// ============================================================================

/// Newly registered user
#[derive(Debug, Clone, Serialize)]
pub struct AddedUserResponse {
    pub id: String,
    pub username: String,
    pub fullname: String,
}

/// `data` of a successful registration
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedUserData {
    pub added_user: AddedUserResponse,
}

/// Tokens issued on login
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPairResponse {
    pub access_token: String,
    pub refresh_token: String,
}

/// Access token issued on refresh
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenResponse {
    pub access_token: String,
}

// ============================================================================
// Thread Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct AddedThreadResponse {
    pub id: String,
    pub title: String,
    pub owner: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedThreadData {
    pub added_thread: AddedThreadResponse,
}

/// Aggregated thread view
#[derive(Debug, Clone, Serialize)]
pub struct ThreadDetailResponse {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub username: String,
    pub comments: Vec<CommentDetailResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentDetailResponse {
    pub id: String,
    pub username: String,
    pub date: DateTime<Utc>,
    pub content: String,
    pub replies: Vec<ReplyDetailResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReplyDetailResponse {
    pub id: String,
    pub content: String,
    pub date: DateTime<Utc>,
    pub username: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ThreadData {
    pub thread: ThreadDetailResponse,
}

// ============================================================================
// Comment / Reply Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct AddedCommentResponse {
    pub id: String,
    pub content: String,
    pub owner: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedCommentData {
    pub added_comment: AddedCommentResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddedReplyResponse {
    pub id: String,
    pub content: String,
    pub owner: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddedReplyData {
    pub added_reply: AddedReplyResponse,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each backing service
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
