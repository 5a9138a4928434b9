//! # forum-core
//!
//! Domain layer containing entities, the aggregated thread view, repository traits,
//! and domain errors. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    AddedComment, AddedReply, AddedThread, AddedUser, Comment, CommentDetail, NewComment,
    NewReply, NewThread, NewUser, Reply, ReplyDetail, Thread, ThreadDetail, UserCredentials,
    DELETED_COMMENT_CONTENT, DELETED_REPLY_CONTENT,
};
pub use error::DomainError;
pub use traits::{
    AuthenticationRepository, CommentRepository, HealthCheck, RepoResult, ReplyRepository,
    ThreadRepository, UserRepository,
};
pub use value_objects::{IdGenerator, IdPrefix};
