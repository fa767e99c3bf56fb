//! Channel model -> entity mapper

use modboard_core::entities::Channel;
use modboard_core::value_objects::Snowflake;

use crate::models::ChannelModel;

impl From<ChannelModel> for Channel {
    fn from(model: ChannelModel) -> Self {
        Channel {
            id: Snowflake::new(model.channel_id),
            guild_id: Snowflake::new(model.guild_id.unwrap_or_default()),
            name: model.name,
            deleted: model.deleted,
        }
    }
}
