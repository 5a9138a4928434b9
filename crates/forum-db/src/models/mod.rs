//! Database models - SQLx-compatible structs for PostgreSQL rows

mod comment;
mod reply;
mod thread;
mod user;

pub use comment::CommentModel;
pub use reply::ReplyModel;
pub use thread::ThreadModel;
pub use user::CredentialsModel;
