//! Ports implemented by the infrastructure layer

mod repositories;

pub use repositories::{
    AuthenticationRepository, CommentRepository, HealthCheck, RepoResult, ReplyRepository,
    ThreadRepository, UserRepository,
};
