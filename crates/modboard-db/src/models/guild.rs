//! Guild database model

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;

/// Database model for guilds table
#[derive(Debug, Clone, FromRow)]
pub struct GuildModel {
    pub guild_id: i64,
    pub owner_id: i64,
    pub name: String,
    pub icon: Option<String>,
    pub enabled: bool,
    pub config: Json<serde_json::Value>,
    pub config_raw: Option<String>,
    pub added_at: DateTime<Utc>,
}
