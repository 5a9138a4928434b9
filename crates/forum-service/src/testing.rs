//! In-memory repositories for tests
//!
//! A single store implements every repository trait so that one seeded forum
//! can back a whole [`ServiceContext`]. Fetch counters make the aggregation's
//! access pattern observable.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use forum_common::auth::JwtService;
use forum_core::entities::{
    Comment, NewComment, NewReply, NewThread, NewUser, Reply, Thread, UserCredentials,
};
use forum_core::error::DomainError;
use forum_core::traits::{
    AuthenticationRepository, CommentRepository, HealthCheck, RepoResult, ReplyRepository,
    ThreadRepository, UserRepository,
};
use forum_core::IdGenerator;

use crate::services::ServiceContext;

/// Access token secret used by [`InMemoryForum::service_context`]
pub const TEST_ACCESS_TOKEN_KEY: &str = "test-access-token-key";
/// Refresh token secret used by [`InMemoryForum::service_context`]
pub const TEST_REFRESH_TOKEN_KEY: &str = "test-refresh-token-key";

struct StoredUser {
    user: NewUser,
    password_hash: String,
}

struct Flagged<T> {
    row: T,
    is_deleted: bool,
}

#[derive(Default)]
struct ForumStore {
    users: Mutex<Vec<StoredUser>>,
    tokens: Mutex<HashSet<String>>,
    threads: Mutex<Vec<NewThread>>,
    comments: Mutex<Vec<Flagged<NewComment>>>,
    replies: Mutex<Vec<Flagged<NewReply>>>,
    comment_fetches: AtomicUsize,
    reply_fetches: AtomicUsize,
    unhealthy: AtomicBool,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl ForumStore {
    fn username_of(&self, user_id: &str) -> String {
        lock(&self.users)
            .iter()
            .find(|stored| stored.user.id == user_id)
            .map_or_else(|| user_id.to_string(), |stored| stored.user.username.clone())
    }

    fn comment_in_thread(&self, comment_id: &str, thread_id: &str) -> bool {
        lock(&self.comments)
            .iter()
            .any(|c| c.row.id == comment_id && c.row.thread_id == thread_id)
    }
}

/// Shared handle to an in-memory forum
#[derive(Clone, Default)]
pub struct InMemoryForum {
    store: Arc<ForumStore>,
}

impl InMemoryForum {
    pub fn new() -> Self {
        Self::default()
    }

    /// Service context backed entirely by this forum
    pub fn service_context(&self) -> ServiceContext {
        let jwt = JwtService::new(TEST_ACCESS_TOKEN_KEY, TEST_REFRESH_TOKEN_KEY, 3000, 604_800);

        ServiceContext::new(
            self.store.clone(),
            self.store.clone(),
            self.store.clone(),
            self.store.clone(),
            self.store.clone(),
            self.store.clone(),
            Arc::new(jwt),
            IdGenerator::default(),
        )
    }

    // === Seeding ===

    /// Seed a user with a placeholder password hash
    pub fn add_user(&self, id: &str, username: &str) {
        lock(&self.store.users).push(StoredUser {
            user: NewUser::new(id.to_string(), username.to_string(), username.to_string()),
            password_hash: String::new(),
        });
    }

    pub fn add_thread(&self, thread: NewThread) {
        lock(&self.store.threads).push(thread);
    }

    pub fn add_comment(&self, comment: NewComment, is_deleted: bool) {
        lock(&self.store.comments).push(Flagged {
            row: comment,
            is_deleted,
        });
    }

    pub fn add_reply(&self, reply: NewReply, is_deleted: bool) {
        lock(&self.store.replies).push(Flagged {
            row: reply,
            is_deleted,
        });
    }

    /// Make the readiness probe fail
    pub fn set_unhealthy(&self, unhealthy: bool) {
        self.store.unhealthy.store(unhealthy, Ordering::SeqCst);
    }

    // === Inspection ===

    /// Number of `CommentRepository::find_by_thread` calls
    pub fn comment_fetches(&self) -> usize {
        self.store.comment_fetches.load(Ordering::SeqCst)
    }

    /// Number of `ReplyRepository::find_by_thread` calls
    pub fn reply_fetches(&self) -> usize {
        self.store.reply_fetches.load(Ordering::SeqCst)
    }

    pub fn is_comment_deleted(&self, comment_id: &str) -> Option<bool> {
        lock(&self.store.comments)
            .iter()
            .find(|c| c.row.id == comment_id)
            .map(|c| c.is_deleted)
    }

    pub fn is_reply_deleted(&self, reply_id: &str) -> Option<bool> {
        lock(&self.store.replies)
            .iter()
            .find(|r| r.row.id == reply_id)
            .map(|r| r.is_deleted)
    }

    pub fn has_token(&self, token: &str) -> bool {
        lock(&self.store.tokens).contains(token)
    }
}

#[async_trait]
impl UserRepository for ForumStore {
    async fn username_exists(&self, username: &str) -> RepoResult<bool> {
        Ok(lock(&self.users)
            .iter()
            .any(|stored| stored.user.username == username))
    }

    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<()> {
        let mut users = lock(&self.users);
        if users.iter().any(|stored| stored.user.username == user.username) {
            return Err(DomainError::UsernameTaken);
        }
        users.push(StoredUser {
            user: user.clone(),
            password_hash: password_hash.to_string(),
        });
        Ok(())
    }

    async fn find_credentials(&self, username: &str) -> RepoResult<Option<UserCredentials>> {
        Ok(lock(&self.users)
            .iter()
            .find(|stored| stored.user.username == username)
            .map(|stored| UserCredentials {
                id: stored.user.id.clone(),
                password_hash: stored.password_hash.clone(),
            }))
    }
}

#[async_trait]
impl AuthenticationRepository for ForumStore {
    async fn add_token(&self, token: &str) -> RepoResult<()> {
        lock(&self.tokens).insert(token.to_string());
        Ok(())
    }

    async fn token_exists(&self, token: &str) -> RepoResult<bool> {
        Ok(lock(&self.tokens).contains(token))
    }

    async fn delete_token(&self, token: &str) -> RepoResult<()> {
        lock(&self.tokens).remove(token);
        Ok(())
    }
}

#[async_trait]
impl ThreadRepository for ForumStore {
    async fn create(&self, thread: &NewThread) -> RepoResult<()> {
        lock(&self.threads).push(thread.clone());
        Ok(())
    }

    async fn exists(&self, id: &str) -> RepoResult<bool> {
        Ok(lock(&self.threads).iter().any(|t| t.id == id))
    }

    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Thread>> {
        let thread = lock(&self.threads).iter().find(|t| t.id == id).cloned();

        Ok(thread.map(|t| Thread {
            username: self.username_of(&t.owner),
            id: t.id,
            title: t.title,
            body: t.body,
            date: t.date,
        }))
    }
}

#[async_trait]
impl CommentRepository for ForumStore {
    async fn create(&self, comment: &NewComment) -> RepoResult<()> {
        lock(&self.comments).push(Flagged {
            row: comment.clone(),
            is_deleted: false,
        });
        Ok(())
    }

    async fn find_by_thread(&self, thread_id: &str) -> RepoResult<Vec<Comment>> {
        self.comment_fetches.fetch_add(1, Ordering::SeqCst);

        let rows: Vec<(NewComment, bool)> = lock(&self.comments)
            .iter()
            .filter(|c| c.row.thread_id == thread_id)
            .map(|c| (c.row.clone(), c.is_deleted))
            .collect();

        Ok(rows
            .into_iter()
            .map(|(row, is_deleted)| Comment {
                username: self.username_of(&row.owner),
                id: row.id,
                date: row.date,
                content: row.content,
                is_deleted,
            })
            .collect())
    }

    async fn find_owner(&self, comment_id: &str, thread_id: &str) -> RepoResult<Option<String>> {
        Ok(lock(&self.comments)
            .iter()
            .find(|c| c.row.id == comment_id && c.row.thread_id == thread_id)
            .map(|c| c.row.owner.clone()))
    }

    async fn soft_delete(&self, comment_id: &str) -> RepoResult<()> {
        lock(&self.comments)
            .iter_mut()
            .find(|c| c.row.id == comment_id)
            .map(|c| c.is_deleted = true)
            .ok_or(DomainError::CommentNotFound)
    }
}

#[async_trait]
impl ReplyRepository for ForumStore {
    async fn create(&self, reply: &NewReply) -> RepoResult<()> {
        lock(&self.replies).push(Flagged {
            row: reply.clone(),
            is_deleted: false,
        });
        Ok(())
    }

    async fn find_by_thread(&self, thread_id: &str) -> RepoResult<Vec<Reply>> {
        self.reply_fetches.fetch_add(1, Ordering::SeqCst);

        let rows: Vec<(NewReply, bool)> = lock(&self.replies)
            .iter()
            .map(|r| (r.row.clone(), r.is_deleted))
            .collect();

        Ok(rows
            .into_iter()
            .filter(|(row, _)| self.comment_in_thread(&row.comment_id, thread_id))
            .map(|(row, is_deleted)| Reply {
                username: self.username_of(&row.owner),
                id: row.id,
                content: row.content,
                date: row.date,
                comment_id: row.comment_id,
                is_deleted,
            })
            .collect())
    }

    async fn find_owner(
        &self,
        reply_id: &str,
        comment_id: &str,
        thread_id: &str,
    ) -> RepoResult<Option<String>> {
        if !self.comment_in_thread(comment_id, thread_id) {
            return Ok(None);
        }

        Ok(lock(&self.replies)
            .iter()
            .find(|r| r.row.id == reply_id && r.row.comment_id == comment_id)
            .map(|r| r.row.owner.clone()))
    }

    async fn soft_delete(&self, reply_id: &str) -> RepoResult<()> {
        lock(&self.replies)
            .iter_mut()
            .find(|r| r.row.id == reply_id)
            .map(|r| r.is_deleted = true)
            .ok_or(DomainError::ReplyNotFound)
    }
}

#[async_trait]
impl HealthCheck for ForumStore {
    async fn ping(&self) -> RepoResult<()> {
        if self.unhealthy.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("storage unavailable".to_string()));
        }
        Ok(())
    }
}
