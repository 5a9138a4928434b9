//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{
    Comment, NewComment, NewReply, NewThread, NewUser, Reply, Thread, UserCredentials,
};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Check if a username is already registered
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<()>;

    /// Get user ID and password hash for a username
    async fn find_credentials(&self, username: &str) -> RepoResult<Option<UserCredentials>>;
}

// ============================================================================
// Authentication Repository
// ============================================================================

/// Registry of issued refresh tokens
#[async_trait]
pub trait AuthenticationRepository: Send + Sync {
    /// Register a refresh token
    async fn add_token(&self, token: &str) -> RepoResult<()>;

    /// Check whether a refresh token is registered
    async fn token_exists(&self, token: &str) -> RepoResult<bool>;

    /// Remove a refresh token
    async fn delete_token(&self, token: &str) -> RepoResult<()>;
}

// ============================================================================
// Thread Repository
// ============================================================================

#[async_trait]
pub trait ThreadRepository: Send + Sync {
    /// Create a new thread
    async fn create(&self, thread: &NewThread) -> RepoResult<()>;

    /// Check if a thread exists
    async fn exists(&self, id: &str) -> RepoResult<bool>;

    /// Find thread by ID, joined with the owner's username
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Thread>>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Create a new comment
    async fn create(&self, comment: &NewComment) -> RepoResult<()>;

    /// List all comments of a thread, oldest first, including soft-deleted ones
    async fn find_by_thread(&self, thread_id: &str) -> RepoResult<Vec<Comment>>;

    /// Owner of a comment, if the comment exists within the given thread
    async fn find_owner(&self, comment_id: &str, thread_id: &str) -> RepoResult<Option<String>>;

    /// Mark a comment as deleted
    async fn soft_delete(&self, comment_id: &str) -> RepoResult<()>;
}

// ============================================================================
// Reply Repository
// ============================================================================

#[async_trait]
pub trait ReplyRepository: Send + Sync {
    /// Create a new reply
    async fn create(&self, reply: &NewReply) -> RepoResult<()>;

    /// List the replies of every comment in a thread, oldest first.
    ///
    /// Replies under a soft-deleted comment are still returned.
    async fn find_by_thread(&self, thread_id: &str) -> RepoResult<Vec<Reply>>;

    /// Owner of a reply, if it exists under the given comment within the given thread
    async fn find_owner(
        &self,
        reply_id: &str,
        comment_id: &str,
        thread_id: &str,
    ) -> RepoResult<Option<String>>;

    /// Mark a reply as deleted
    async fn soft_delete(&self, reply_id: &str) -> RepoResult<()>;
}

// ============================================================================
// Health Check
// ============================================================================

/// Storage liveness probe used by the readiness endpoint
#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Round-trip to the backing store
    async fn ping(&self) -> RepoResult<()>;
}
