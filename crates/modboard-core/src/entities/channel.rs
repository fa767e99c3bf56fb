//! Channel entity - a guild channel tracked for message statistics

use crate::value_objects::Snowflake;

/// Channel entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub id: Snowflake,
    pub guild_id: Snowflake,
    pub name: String,
    pub deleted: bool,
}

impl Channel {
    pub fn new(id: Snowflake, guild_id: Snowflake, name: String) -> Self {
        Self {
            id,
            guild_id,
            name,
            deleted: false,
        }
    }

    /// Whether the channel still counts toward guild statistics
    #[inline]
    pub fn is_live(&self) -> bool {
        !self.deleted
    }
}
