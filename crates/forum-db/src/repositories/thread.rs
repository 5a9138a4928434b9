//! PostgreSQL implementation of ThreadRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use forum_core::entities::{NewThread, Thread};
use forum_core::traits::{RepoResult, ThreadRepository};

use crate::models::ThreadModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ThreadRepository
#[derive(Clone)]
pub struct PgThreadRepository {
    pool: PgPool,
}

impl PgThreadRepository {
    /// Create a new PgThreadRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ThreadRepository for PgThreadRepository {
    #[instrument(skip(self, thread), fields(thread_id = %thread.id))]
    async fn create(&self, thread: &NewThread) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO threads (id, title, body, owner, date)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(&thread.id)
        .bind(&thread.title)
        .bind(&thread.body)
        .bind(&thread.owner)
        .bind(thread.date)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: &str) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM threads WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Thread>> {
        let result = sqlx::query_as::<_, ThreadModel>(
            r"
            SELECT t.id, t.title, t.body, t.date, u.username
            FROM threads t
            INNER JOIN users u ON u.id = t.owner
            WHERE t.id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Thread::from))
    }
}
