//! Postgres feedback repository.

use crate::{pool::DatabasePool, traits::FeedbackRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use relay_core::{Feedback, NewFeedback, RelayResult};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// Postgres feedback repository.
#[derive(Clone)]
pub struct PgFeedbackRepository {
    pool: Arc<DatabasePool>,
}

impl PgFeedbackRepository {
    /// Creates a new repository on the shared pool.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct FeedbackRow {
    id: i64,
    score: i64,
    content: String,
    created_at: DateTime<Utc>,
}

impl From<FeedbackRow> for Feedback {
    fn from(row: FeedbackRow) -> Self {
        Self {
            id: row.id,
            score: row.score,
            content: row.content,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl FeedbackRepository for PgFeedbackRepository {
    async fn insert(&self, feedback: &NewFeedback) -> RelayResult<Feedback> {
        debug!(score = feedback.score, "Inserting feedback");

        let row = sqlx::query_as::<_, FeedbackRow>(
            r#"
            INSERT INTO feedback (score, content)
            VALUES ($1, $2)
            RETURNING id, score, content, created_at
            "#,
        )
        .bind(feedback.score)
        .bind(&feedback.content)
        .fetch_one(self.pool.inner())
        .await?;

        Ok(row.into())
    }

    async fn count(&self) -> RelayResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM feedback")
            .fetch_one(self.pool.inner())
            .await?;

        Ok(u64::try_from(total).unwrap_or_default())
    }
}
