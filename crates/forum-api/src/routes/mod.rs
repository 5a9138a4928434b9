//! Route definitions
//!
//! Forum resources are mounted at the root; health probes are kept apart so
//! they bypass rate limiting.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{authentications, comments, health, replies, threads, users};
use crate::state::AppState;

/// Create the main API router (excluding health routes)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(user_routes())
        .merge(authentication_routes())
        .merge(thread_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn user_routes() -> Router<AppState> {
    Router::new().route("/users", post(users::register))
}

fn authentication_routes() -> Router<AppState> {
    Router::new().route(
        "/authentications",
        post(authentications::login)
            .put(authentications::refresh_token)
            .delete(authentications::logout),
    )
}

/// Threads with nested comments and replies
fn thread_routes() -> Router<AppState> {
    Router::new()
        .route("/threads", post(threads::add_thread))
        .route("/threads/:thread_id", get(threads::get_thread))
        .route("/threads/:thread_id/comments", post(comments::add_comment))
        .route(
            "/threads/:thread_id/comments/:comment_id",
            delete(comments::delete_comment),
        )
        .route(
            "/threads/:thread_id/comments/:comment_id/replies",
            post(replies::add_reply),
        )
        .route(
            "/threads/:thread_id/comments/:comment_id/replies/:reply_id",
            delete(replies::delete_reply),
        )
}
