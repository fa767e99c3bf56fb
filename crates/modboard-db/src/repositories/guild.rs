//! PostgreSQL implementation of GuildRepository

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::instrument;

use modboard_core::entities::{Guild, GuildConfigChange};
use modboard_core::traits::{GuildRepository, NewConfigChange, RepoResult};
use modboard_core::value_objects::Snowflake;

use crate::models::{ConfigChangeModel, GuildModel};

use super::error::{guild_not_found, map_db_error};

/// PostgreSQL implementation of GuildRepository
#[derive(Clone)]
pub struct PgGuildRepository {
    pool: PgPool,
}

impl PgGuildRepository {
    /// Create a new PgGuildRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GuildRepository for PgGuildRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Guild>> {
        let result = sqlx::query_as::<_, GuildModel>(
            r"
            SELECT guild_id, owner_id, name, icon, enabled, config, config_raw, added_at
            FROM guilds
            WHERE guild_id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Guild::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Guild>> {
        let results = sqlx::query_as::<_, GuildModel>(
            r"
            SELECT guild_id, owner_id, name, icon, enabled, config, config_raw, added_at
            FROM guilds
            ORDER BY guild_id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Guild::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_web_member(&self, user_id: Snowflake) -> RepoResult<Vec<Guild>> {
        // jsonb_exists also matches bare strings, so require an object
        let results = sqlx::query_as::<_, GuildModel>(
            r"
            SELECT guild_id, owner_id, name, icon, enabled, config, config_raw, added_at
            FROM guilds
            WHERE jsonb_typeof(config -> 'web') = 'object'
              AND jsonb_exists(config -> 'web', $1)
            ORDER BY guild_id
            ",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Guild::from).collect())
    }

    #[instrument(skip(self, change), fields(guild_id = %change.guild_id, user_id = %change.user_id))]
    async fn update_config(&self, change: NewConfigChange) -> RepoResult<GuildConfigChange> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            UPDATE guilds
            SET config = $2, config_raw = $3
            WHERE guild_id = $1
            ",
        )
        .bind(change.guild_id.into_inner())
        .bind(Json(change.config.to_value()))
        .bind(&change.after_raw)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(guild_not_found(change.guild_id));
        }

        let record = sqlx::query_as::<_, ConfigChangeModel>(
            r"
            INSERT INTO guild_config_changes (user_id, guild_id, before_raw, after_raw)
            VALUES ($1, $2, $3, $4)
            RETURNING id, guild_id, user_id, before_raw, after_raw, created_at
            ",
        )
        .bind(change.user_id.into_inner())
        .bind(change.guild_id.into_inner())
        .bind(&change.before_raw)
        .bind(&change.after_raw)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(GuildConfigChange::from(record))
    }
}
