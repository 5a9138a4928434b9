//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in forum-core.
//! Each repository handles database operations for a specific domain entity.

mod authentication;
mod comment;
mod error;
mod health;
mod reply;
mod thread;
mod user;

pub use authentication::PgAuthenticationRepository;
pub use comment::PgCommentRepository;
pub use health::PgHealthCheck;
pub use reply::PgReplyRepository;
pub use thread::PgThreadRepository;
pub use user::PgUserRepository;
