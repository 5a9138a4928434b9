//! User model -> entity mappers

use forum_core::entities::UserCredentials;

use crate::models::CredentialsModel;

impl From<CredentialsModel> for UserCredentials {
    fn from(model: CredentialsModel) -> Self {
        UserCredentials {
            id: model.id,
            password_hash: model.password,
        }
    }
}
