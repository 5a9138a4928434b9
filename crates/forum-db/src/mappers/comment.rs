//! Comment model -> entity mapper

use forum_core::entities::Comment;

use crate::models::CommentModel;

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: model.id,
            username: model.username,
            date: model.date,
            content: model.content,
            is_deleted: model.is_deleted,
        }
    }
}
