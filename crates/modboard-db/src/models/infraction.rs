//! Infraction database model

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::FromRow;

/// Infraction row joined with its target (`user_*`) and actor (`actor_*`) users
#[derive(Debug, Clone, FromRow)]
pub struct InfractionRowModel {
    pub id: i64,
    pub guild_id: i64,
    #[sqlx(rename = "type")]
    pub type_: i32,
    pub reason: Option<String>,
    pub metadata: Json<serde_json::Value>,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub active: bool,

    pub user_id: i64,
    pub user_username: String,
    pub user_discriminator: String,
    pub user_avatar: Option<String>,
    pub user_bot: bool,
    pub user_admin: bool,
    pub user_created_at: DateTime<Utc>,

    pub actor_id: i64,
    pub actor_username: String,
    pub actor_discriminator: String,
    pub actor_avatar: Option<String>,
    pub actor_bot: bool,
    pub actor_admin: bool,
    pub actor_created_at: DateTime<Utc>,
}
