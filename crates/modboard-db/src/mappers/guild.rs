//! Guild model -> entity mapper

use modboard_core::entities::Guild;
use modboard_core::value_objects::{GuildConfig, Snowflake};

use crate::models::GuildModel;

/// Convert GuildModel to Guild entity
///
/// A stored config whose root is not a mapping is read as empty.
impl From<GuildModel> for Guild {
    fn from(model: GuildModel) -> Self {
        Guild {
            id: Snowflake::new(model.guild_id),
            owner_id: Snowflake::new(model.owner_id),
            name: model.name,
            icon: model.icon,
            enabled: model.enabled,
            config: GuildConfig::from_stored(model.config.0),
            config_raw: model.config_raw,
            added_at: model.added_at,
        }
    }
}
