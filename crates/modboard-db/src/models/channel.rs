//! Channel database model

use sqlx::FromRow;

/// Database model for channels table
#[derive(Debug, Clone, FromRow)]
pub struct ChannelModel {
    pub channel_id: i64,
    pub guild_id: Option<i64>,
    pub name: String,
    pub deleted: bool,
}
