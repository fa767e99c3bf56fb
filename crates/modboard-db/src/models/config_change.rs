//! Guild config change database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for guild_config_changes table
#[derive(Debug, Clone, FromRow)]
pub struct ConfigChangeModel {
    pub id: i64,
    pub guild_id: i64,
    pub user_id: i64,
    pub before_raw: String,
    pub after_raw: String,
    pub created_at: DateTime<Utc>,
}

/// Config change joined with the acting user's columns
#[derive(Debug, Clone, FromRow)]
pub struct ConfigChangeWithUserModel {
    pub id: i64,
    pub guild_id: i64,
    pub user_id: i64,
    pub before_raw: String,
    pub after_raw: String,
    pub created_at: DateTime<Utc>,
    pub username: String,
    pub discriminator: String,
    pub avatar: Option<String>,
    pub bot: bool,
    pub admin: bool,
    pub user_created_at: DateTime<Utc>,
}
