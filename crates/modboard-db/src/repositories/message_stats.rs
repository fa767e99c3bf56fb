//! PostgreSQL implementation of MessageStatsRepository
//!
//! Reads from the stats datastore, which may be a different database than
//! the primary one.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use modboard_core::traits::{MessageStatsRepository, MessageStatsSeries, RepoResult};
use modboard_core::value_objects::{MessageStatsMode, Snowflake};

use crate::models::MessageStatsBucketModel;

use super::error::map_db_error;

/// PostgreSQL implementation of MessageStatsRepository
#[derive(Clone)]
pub struct PgMessageStatsRepository {
    pool: PgPool,
}

impl PgMessageStatsRepository {
    /// Create a new PgMessageStatsRepository over the stats pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageStatsRepository for PgMessageStatsRepository {
    #[instrument(skip(self, channel_ids), fields(channels = channel_ids.len()))]
    async fn aggregate(
        &self,
        channel_ids: &[Snowflake],
        mode: MessageStatsMode,
    ) -> RepoResult<MessageStatsSeries> {
        if channel_ids.is_empty() {
            return Ok(MessageStatsSeries::default());
        }

        let ids: Vec<i64> = channel_ids.iter().map(|id| id.into_inner()).collect();

        // Snapshot times are stored as UTC without a zone
        let buckets = sqlx::query_as::<_, MessageStatsBucketModel>(
            r"
            SELECT date_trunc($1, time) AS bucket,
                   COALESCE(SUM(created), 0)::BIGINT AS created,
                   COALESCE(SUM(updated), 0)::BIGINT AS updated,
                   COALESCE(SUM(deleted), 0)::BIGINT AS deleted,
                   COALESCE(SUM(mentions), 0)::BIGINT AS mentions
            FROM channel_messages_snapshot
            WHERE channel_id = ANY($2)
              AND time > (NOW() AT TIME ZONE 'UTC') - $3::interval
            GROUP BY 1
            ORDER BY 1 ASC
            ",
        )
        .bind(mode.bucket().as_sql_unit())
        .bind(ids)
        .bind(mode.window())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut series = MessageStatsSeries::default();
        for bucket in buckets {
            series.push(bucket.created, bucket.updated, bucket.deleted, bucket.mentions);
        }

        Ok(series)
    }
}
