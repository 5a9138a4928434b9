//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] for the duration of a
//! request and orchestrates domain operations through the repository traits.

pub mod auth;
pub mod comment;
pub mod context;
pub mod error;
pub mod reply;
pub mod thread;
pub mod user;

pub use auth::AuthService;
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use reply::ReplyService;
pub use thread::ThreadService;
pub use user::UserService;
