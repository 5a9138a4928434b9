//! Domain entities - core business objects

mod comment;
mod reply;
mod thread;
mod thread_detail;
mod user;

pub use comment::{AddedComment, Comment, NewComment};
pub use reply::{AddedReply, NewReply, Reply};
pub use thread::{AddedThread, NewThread, Thread};
pub use thread_detail::{
    CommentDetail, ReplyDetail, ThreadDetail, DELETED_COMMENT_CONTENT, DELETED_REPLY_CONTENT,
};
pub use user::{AddedUser, NewUser, UserCredentials};
