//! Config change model -> entity mappers

use modboard_core::entities::{ConfigChangeEntry, GuildConfigChange, User};
use modboard_core::value_objects::Snowflake;

use crate::models::{ConfigChangeModel, ConfigChangeWithUserModel};

impl From<ConfigChangeModel> for GuildConfigChange {
    fn from(model: ConfigChangeModel) -> Self {
        GuildConfigChange {
            id: model.id,
            guild_id: Snowflake::new(model.guild_id),
            user_id: Snowflake::new(model.user_id),
            before_raw: model.before_raw,
            after_raw: model.after_raw,
            created_at: model.created_at,
        }
    }
}

impl From<ConfigChangeWithUserModel> for ConfigChangeEntry {
    fn from(model: ConfigChangeWithUserModel) -> Self {
        let user = User {
            id: Snowflake::new(model.user_id),
            username: model.username,
            discriminator: model.discriminator,
            avatar: model.avatar,
            bot: model.bot,
            admin: model.admin,
            created_at: model.user_created_at,
        };

        ConfigChangeEntry {
            change: GuildConfigChange {
                id: model.id,
                guild_id: Snowflake::new(model.guild_id),
                user_id: user.id,
                before_raw: model.before_raw,
                after_raw: model.after_raw,
                created_at: model.created_at,
            },
            user,
        }
    }
}
