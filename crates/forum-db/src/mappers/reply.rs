//! Reply model -> entity mapper

use forum_core::entities::Reply;

use crate::models::ReplyModel;

impl From<ReplyModel> for Reply {
    fn from(model: ReplyModel) -> Self {
        Reply {
            id: model.id,
            content: model.content,
            date: model.date,
            username: model.username,
            comment_id: model.comment_id,
            is_deleted: model.is_deleted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_reply_mapping_keeps_bookkeeping_fields() {
        let reply = Reply::from(ReplyModel {
            id: "reply-123".to_string(),
            content: "ini balasan".to_string(),
            date: Utc::now(),
            username: "jhon".to_string(),
            comment_id: "comment-123".to_string(),
            is_deleted: true,
        });

        assert_eq!(reply.comment_id, "comment-123");
        assert!(reply.is_deleted);
    }
}
