//! Infraction row -> entity mapper

use modboard_core::entities::{Infraction, InfractionEntry, User};
use modboard_core::value_objects::Snowflake;

use crate::models::InfractionRowModel;

impl From<InfractionRowModel> for InfractionEntry {
    fn from(row: InfractionRowModel) -> Self {
        let user = User {
            id: Snowflake::new(row.user_id),
            username: row.user_username,
            discriminator: row.user_discriminator,
            avatar: row.user_avatar,
            bot: row.user_bot,
            admin: row.user_admin,
            created_at: row.user_created_at,
        };
        let actor = User {
            id: Snowflake::new(row.actor_id),
            username: row.actor_username,
            discriminator: row.actor_discriminator,
            avatar: row.actor_avatar,
            bot: row.actor_bot,
            admin: row.actor_admin,
            created_at: row.actor_created_at,
        };

        InfractionEntry {
            infraction: Infraction {
                id: row.id,
                guild_id: Snowflake::new(row.guild_id),
                type_index: row.type_,
                user_id: user.id,
                actor_id: actor.id,
                reason: row.reason,
                metadata: row.metadata.0,
                created_at: row.created_at,
                expires_at: row.expires_at,
                active: row.active,
            },
            user,
            actor,
        }
    }
}
