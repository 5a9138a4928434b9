//! Path parameter extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::response::ApiError;

/// Path parameters with rejections rendered in the API envelope
#[derive(Debug, Clone)]
pub struct ResourcePath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ResourcePath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(inner) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::validation(e.body_text()))?;

        Ok(ResourcePath(inner))
    }
}

/// `/threads/:thread_id`
#[derive(Debug, Deserialize)]
pub struct ThreadPath {
    pub thread_id: String,
}

/// `/threads/:thread_id/comments/:comment_id`
#[derive(Debug, Deserialize)]
pub struct CommentPath {
    pub thread_id: String,
    pub comment_id: String,
}

/// `/threads/:thread_id/comments/:comment_id/replies/:reply_id`
#[derive(Debug, Deserialize)]
pub struct ReplyPath {
    pub thread_id: String,
    pub comment_id: String,
    pub reply_id: String,
}
