//! Database models - SQLx-compatible structs for PostgreSQL tables

mod channel;
mod config_change;
mod guild;
mod infraction;
mod message_stats;
mod user;

pub use channel::ChannelModel;
pub use config_change::{ConfigChangeModel, ConfigChangeWithUserModel};
pub use guild::GuildModel;
pub use infraction::InfractionRowModel;
pub use message_stats::MessageStatsBucketModel;
pub use user::UserModel;
