//! PostgreSQL implementation of ChannelRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use modboard_core::entities::Channel;
use modboard_core::traits::{ChannelRepository, RepoResult};
use modboard_core::value_objects::Snowflake;

use crate::models::ChannelModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ChannelRepository
#[derive(Clone)]
pub struct PgChannelRepository {
    pool: PgPool,
}

impl PgChannelRepository {
    /// Create a new PgChannelRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChannelRepository for PgChannelRepository {
    #[instrument(skip(self))]
    async fn find_live_by_guild(&self, guild_id: Snowflake) -> RepoResult<Vec<Channel>> {
        let results = sqlx::query_as::<_, ChannelModel>(
            r"
            SELECT channel_id, guild_id, name, deleted
            FROM channels
            WHERE guild_id = $1 AND deleted = FALSE
            ORDER BY channel_id
            ",
        )
        .bind(guild_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Channel::from).collect())
    }
}
