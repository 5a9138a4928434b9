//! API Integration Tests
//!
//! These tests require a running PostgreSQL instance and DATABASE_URL.
//! Migrations are applied when the server starts.
//!
//! Run with: cargo test -p forum-integration-tests --test api_tests

use forum_integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

/// Register a fresh user and log in
async fn register_and_login(server: &TestServer) -> (AddedUser, TokenPair) {
    let register_req = RegisterRequest::unique();
    let response = server.post("/users", &register_req).await.unwrap();
    let registered: Envelope<AddedUserData> =
        assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post("/authentications", &LoginRequest::from_register(&register_req))
        .await
        .unwrap();
    let tokens: Envelope<TokenPair> = assert_json(response, StatusCode::CREATED).await.unwrap();

    (registered.data.added_user, tokens.data)
}

async fn add_thread(server: &TestServer, token: &str) -> String {
    let response = server
        .post_auth("/threads", token, &AddThreadRequest::default())
        .await
        .unwrap();
    let added: Envelope<AddedThreadData> =
        assert_json(response, StatusCode::CREATED).await.unwrap();
    added.data.added_thread.id
}

async fn add_comment(server: &TestServer, thread_id: &str, token: &str, content: &str) -> String {
    let response = server
        .post_auth(
            &format!("/threads/{thread_id}/comments"),
            token,
            &ContentRequest::new(content),
        )
        .await
        .unwrap();
    let added: Envelope<AddedCommentData> =
        assert_json(response, StatusCode::CREATED).await.unwrap();
    added.data.added_comment.id
}

async fn add_reply(
    server: &TestServer,
    thread_id: &str,
    comment_id: &str,
    token: &str,
    content: &str,
) -> String {
    let response = server
        .post_auth(
            &format!("/threads/{thread_id}/comments/{comment_id}/replies"),
            token,
            &ContentRequest::new(content),
        )
        .await
        .unwrap();
    let added: Envelope<AddedReplyData> =
        assert_json(response, StatusCode::CREATED).await.unwrap();
    added.data.added_reply.id
}

async fn get_thread(server: &TestServer, thread_id: &str) -> ThreadDetail {
    let response = server.get(&format!("/threads/{thread_id}")).await.unwrap();
    let body: Envelope<ThreadData> = assert_json(response, StatusCode::OK).await.unwrap();
    body.data.thread
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// User and Authentication Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/users", &request).await.unwrap();
    let body: Envelope<AddedUserData> = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(body.status, "success");
    assert!(body.data.added_user.id.starts_with("user-"));
    assert_eq!(body.data.added_user.username, request.username);
    assert_eq!(body.data.added_user.fullname, request.fullname);
}

#[tokio::test]
async fn test_register_duplicate_username() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    server.post("/users", &request).await.unwrap();

    let response = server.post("/users", &request).await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.status, "fail");
    assert_eq!(body.message, "username tidak tersedia");
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register_req = RegisterRequest::unique();
    server.post("/users", &register_req).await.unwrap();

    let login_req = LoginRequest {
        username: register_req.username,
        password: "wrongpass".to_string(),
    };
    let response = server.post("/authentications", &login_req).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_refresh_and_logout() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, tokens) = register_and_login(&server).await;
    let request = RefreshTokenRequest {
        refresh_token: tokens.refresh_token,
    };

    let response = server.put("/authentications", &request).await.unwrap();
    let refreshed: Envelope<AccessToken> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!refreshed.data.access_token.is_empty());

    let response = server.delete_json("/authentications", &request).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.put("/authentications", &request).await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.message, "refresh token tidak ditemukan di database");
}

// ============================================================================
// Thread Tests
// ============================================================================

#[tokio::test]
async fn test_add_thread_unauthorized() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/threads", &AddThreadRequest::default())
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_get_unknown_thread() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/threads/thread-does-not-exist").await.unwrap();
    let body: ErrorEnvelope = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.status, "fail");
}

#[tokio::test]
async fn test_thread_detail_aggregates_comments_and_replies() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (author, author_tokens) = register_and_login(&server).await;
    let (commenter, commenter_tokens) = register_and_login(&server).await;

    let thread_id = add_thread(&server, &author_tokens.access_token).await;
    let first = add_comment(&server, &thread_id, &commenter_tokens.access_token, "pertama").await;
    let second = add_comment(&server, &thread_id, &author_tokens.access_token, "kedua").await;
    let reply = add_reply(
        &server,
        &thread_id,
        &first,
        &author_tokens.access_token,
        "balasan",
    )
    .await;

    let thread = get_thread(&server, &thread_id).await;

    assert_eq!(thread.id, thread_id);
    assert_eq!(thread.username, author.username);
    assert_eq!(thread.comments.len(), 2);

    assert_eq!(thread.comments[0].id, first);
    assert_eq!(thread.comments[0].username, commenter.username);
    assert_eq!(thread.comments[0].content, "pertama");
    assert_eq!(thread.comments[0].replies.len(), 1);
    assert_eq!(thread.comments[0].replies[0].id, reply);
    assert_eq!(thread.comments[0].replies[0].username, author.username);

    assert_eq!(thread.comments[1].id, second);
    assert!(thread.comments[1].replies.is_empty());
}

#[tokio::test]
async fn test_delete_comment_requires_owner() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner) = register_and_login(&server).await;
    let (_, other) = register_and_login(&server).await;

    let thread_id = add_thread(&server, &owner.access_token).await;
    let comment_id = add_comment(&server, &thread_id, &owner.access_token, "komentar").await;

    let response = server
        .delete_auth(
            &format!("/threads/{thread_id}/comments/{comment_id}"),
            &other.access_token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let thread = get_thread(&server, &thread_id).await;
    assert_eq!(thread.comments[0].content, "komentar");
}

#[tokio::test]
async fn test_deleted_comment_and_reply_are_masked() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, tokens) = register_and_login(&server).await;
    let token = &tokens.access_token;

    let thread_id = add_thread(&server, token).await;
    let comment_id = add_comment(&server, &thread_id, token, "komentar").await;
    let reply_id = add_reply(&server, &thread_id, &comment_id, token, "balasan").await;

    let response = server
        .delete_auth(
            &format!("/threads/{thread_id}/comments/{comment_id}/replies/{reply_id}"),
            token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .delete_auth(&format!("/threads/{thread_id}/comments/{comment_id}"), token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let thread = get_thread(&server, &thread_id).await;
    let comment = &thread.comments[0];
    assert_eq!(comment.id, comment_id);
    assert_eq!(comment.content, "**komentar telah dihapus**");
    assert_eq!(comment.replies[0].id, reply_id);
    assert_eq!(comment.replies[0].content, "**balasan telah dihapus**");
}

#[tokio::test]
async fn test_reply_to_comment_in_other_thread() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let (_, tokens) = register_and_login(&server).await;
    let token = &tokens.access_token;

    let thread_a = add_thread(&server, token).await;
    let thread_b = add_thread(&server, token).await;
    let comment_a = add_comment(&server, &thread_a, token, "komentar").await;

    let response = server
        .post_auth(
            &format!("/threads/{thread_b}/comments/{comment_a}/replies"),
            token,
            &ContentRequest::new("balasan"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
