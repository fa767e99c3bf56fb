//! Test fixtures and data generators
//!
//! Rows are inserted straight into PostgreSQL; ids are time-based so
//! repeated runs against the same database never collide.

use std::sync::atomic::{AtomicI64, Ordering};

use anyhow::Result;
use chrono::Utc;
use modboard_core::Snowflake;
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::PgPool;

/// Generate a unique snowflake for test rows
pub fn unique_snowflake() -> Snowflake {
    static COUNTER: AtomicI64 = AtomicI64::new(0);
    let base = Utc::now().timestamp_millis() << 12;
    Snowflake::new(base + COUNTER.fetch_add(1, Ordering::SeqCst))
}

pub async fn insert_user(pool: &PgPool, username: &str, admin: bool) -> Result<Snowflake> {
    let id = unique_snowflake();
    sqlx::query(
        "INSERT INTO users (user_id, username, discriminator, admin) VALUES ($1, $2, '0001', $3)",
    )
    .bind(id.into_inner())
    .bind(format!("{username}{}", id.into_inner() % 100_000))
    .bind(admin)
    .execute(pool)
    .await?;
    Ok(id)
}

pub async fn insert_guild(pool: &PgPool, owner: Snowflake, config: Value) -> Result<Snowflake> {
    let id = unique_snowflake();
    sqlx::query("INSERT INTO guilds (guild_id, owner_id, name, config) VALUES ($1, $2, $3, $4)")
        .bind(id.into_inner())
        .bind(owner.into_inner())
        .bind(format!("Test Guild {id}"))
        .bind(sqlx::types::Json(config))
        .execute(pool)
        .await?;
    Ok(id)
}

pub async fn insert_infraction(
    pool: &PgPool,
    guild_id: Snowflake,
    user_id: Snowflake,
    actor_id: Snowflake,
    reason: &str,
) -> Result<i64> {
    // type 8 is a warning
    let id = sqlx::query_scalar::<_, i64>(
        r"
        INSERT INTO infractions (guild_id, user_id, actor_id, type, reason)
        VALUES ($1, $2, $3, 8, $4)
        RETURNING id
        ",
    )
    .bind(guild_id.into_inner())
    .bind(user_id.into_inner())
    .bind(actor_id.into_inner())
    .bind(reason)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn audit_count(pool: &PgPool, guild_id: Snowflake) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM guild_config_changes WHERE guild_id = $1",
    )
    .bind(guild_id.into_inner())
    .fetch_one(pool)
    .await?;
    Ok(count)
}

/// A guild with one editor, one viewer, a platform admin and an outsider
#[derive(Debug, Clone, Copy)]
pub struct SeededGuild {
    pub guild_id: Snowflake,
    pub editor: Snowflake,
    pub viewer: Snowflake,
    pub platform_admin: Snowflake,
    pub outsider: Snowflake,
}

impl SeededGuild {
    pub async fn create(pool: &PgPool) -> Result<Self> {
        let platform_admin = insert_user(pool, "root", true).await?;
        let editor = insert_user(pool, "editor", false).await?;
        let viewer = insert_user(pool, "viewer", false).await?;
        let outsider = insert_user(pool, "outsider", false).await?;

        let guild_id = insert_guild(
            pool,
            platform_admin,
            json!({
                "web": {editor.to_string(): "editor", viewer.to_string(): "viewer"},
                "nickname": "rowboat"
            }),
        )
        .await?;

        Ok(Self {
            guild_id,
            editor,
            viewer,
            platform_admin,
            outsider,
        })
    }

    /// The guild's `web` section as YAML, in reverse key order
    pub fn web_yaml(&self) -> String {
        format!(
            "web:\n  {}: viewer\n  {}: editor\n",
            self.viewer, self.editor
        )
    }

    pub fn api(&self, path: &str) -> String {
        format!("/api/guilds/{}{}", self.guild_id, path)
    }
}

/// Infraction table response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfractionTable {
    pub draw: i64,
    pub records_total: i64,
    pub records_filtered: i64,
    pub data: Vec<Value>,
}

/// Configuration history entry
#[derive(Debug, Deserialize)]
pub struct HistoryEntry {
    pub user: Value,
    pub before: String,
    pub after: String,
    pub created_at: String,
}
