//! Guild configuration audit record

use chrono::{DateTime, Utc};

use crate::entities::User;
use crate::value_objects::Snowflake;

/// One accepted configuration update. Never mutated after insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildConfigChange {
    pub id: i64,
    pub guild_id: Snowflake,
    pub user_id: Snowflake,
    pub before_raw: String,
    pub after_raw: String,
    pub created_at: DateTime<Utc>,
}

/// Audit record joined with the acting user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigChangeEntry {
    pub change: GuildConfigChange,
    pub user: User,
}
