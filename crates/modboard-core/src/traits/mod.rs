//! Repository traits (ports)

mod repositories;

pub use repositories::{
    ChannelRepository, ConfigChangeRepository, GuildRepository, InfractionRepository,
    MessageStatsRepository, MessageStatsSeries, NewConfigChange, RepoResult, UserRepository,
};
