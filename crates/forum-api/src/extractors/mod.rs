//! Custom extractors for request handling
//!
//! - `AuthUser`: bearer access token validation
//! - `ValidatedJson`: JSON body with payload validation
//! - `ResourcePath`: path parameters with API error rejection

mod auth;
mod path;
mod validated;

pub use auth::AuthUser;
pub use path::{CommentPath, ReplyPath, ResourcePath, ThreadPath};
pub use validated::ValidatedJson;
