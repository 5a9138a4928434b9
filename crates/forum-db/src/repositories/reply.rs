//! PostgreSQL implementation of ReplyRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::{NewReply, Reply};
use forum_core::error::DomainError;
use forum_core::traits::{RepoResult, ReplyRepository};

use crate::models::ReplyModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ReplyRepository
#[derive(Clone)]
pub struct PgReplyRepository {
    pool: PgPool,
}

impl PgReplyRepository {
    /// Create a new PgReplyRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReplyRepository for PgReplyRepository {
    #[instrument(skip(self, reply), fields(reply_id = %reply.id, comment_id = %reply.comment_id))]
    async fn create(&self, reply: &NewReply) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO replies (id, comment_id, owner, content, date, is_deleted)
            VALUES ($1, $2, $3, $4, $5, FALSE)
            ",
        )
        .bind(&reply.id)
        .bind(&reply.comment_id)
        .bind(&reply.owner)
        .bind(&reply.content)
        .bind(reply.date)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_thread(&self, thread_id: &str) -> RepoResult<Vec<Reply>> {
        // One query for the whole thread; nesting happens in the domain layer.
        let rows = sqlx::query_as::<_, ReplyModel>(
            r"
            SELECT r.id, r.content, r.date, u.username, r.comment_id, r.is_deleted
            FROM replies r
            INNER JOIN comments c ON c.id = r.comment_id
            INNER JOIN users u ON u.id = r.owner
            WHERE c.thread_id = $1
            ORDER BY r.date ASC
            ",
        )
        .bind(thread_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Reply::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_owner(
        &self,
        reply_id: &str,
        comment_id: &str,
        thread_id: &str,
    ) -> RepoResult<Option<String>> {
        sqlx::query_scalar::<_, String>(
            r"
            SELECT r.owner
            FROM replies r
            INNER JOIN comments c ON c.id = r.comment_id
            WHERE r.id = $1 AND r.comment_id = $2 AND c.thread_id = $3
            ",
        )
        .bind(reply_id)
        .bind(comment_id)
        .bind(thread_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, reply_id: &str) -> RepoResult<()> {
        let result = sqlx::query("UPDATE replies SET is_deleted = TRUE WHERE id = $1")
            .bind(reply_id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ReplyNotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgReplyRepository>();
    }
}
