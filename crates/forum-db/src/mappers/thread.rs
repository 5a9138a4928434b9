//! Thread model -> entity mapper

use forum_core::entities::Thread;

use crate::models::ThreadModel;

impl From<ThreadModel> for Thread {
    fn from(model: ThreadModel) -> Self {
        Thread {
            id: model.id,
            title: model.title,
            body: model.body,
            date: model.date,
            username: model.username,
        }
    }
}
