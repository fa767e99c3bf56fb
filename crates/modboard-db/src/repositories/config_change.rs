//! PostgreSQL implementation of ConfigChangeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use modboard_core::entities::ConfigChangeEntry;
use modboard_core::traits::{ConfigChangeRepository, RepoResult};
use modboard_core::value_objects::Snowflake;

use crate::models::ConfigChangeWithUserModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ConfigChangeRepository
#[derive(Clone)]
pub struct PgConfigChangeRepository {
    pool: PgPool,
}

impl PgConfigChangeRepository {
    /// Create a new PgConfigChangeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConfigChangeRepository for PgConfigChangeRepository {
    #[instrument(skip(self))]
    async fn list_by_guild(
        &self,
        guild_id: Snowflake,
        limit: i64,
        offset: i64,
    ) -> RepoResult<Vec<ConfigChangeEntry>> {
        let results = sqlx::query_as::<_, ConfigChangeWithUserModel>(
            r"
            SELECT c.id, c.guild_id, c.user_id, c.before_raw, c.after_raw, c.created_at,
                   u.username, u.discriminator, u.avatar, u.bot, u.admin,
                   u.created_at AS user_created_at
            FROM guild_config_changes c
            JOIN users u ON u.user_id = c.user_id
            WHERE c.guild_id = $1
            ORDER BY c.created_at DESC, c.id DESC
            LIMIT $2 OFFSET $3
            ",
        )
        .bind(guild_id.into_inner())
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ConfigChangeEntry::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_by_guild(&self, guild_id: Snowflake) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM guild_config_changes WHERE guild_id = $1
            ",
        )
        .bind(guild_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}
