//! # modboard-core
//!
//! Domain layer containing entities, value objects, query types and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod query;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Channel, ConfigChangeEntry, Guild, GuildConfigChange, Infraction, InfractionEntry,
    InfractionType, User,
};
pub use error::DomainError;
pub use query::{
    InfractionOrder, InfractionPage, InfractionQuery, InfractionSearch, InfractionSortKey,
    SortDirection,
};
pub use traits::{
    ChannelRepository, ConfigChangeRepository, GuildRepository, InfractionRepository,
    MessageStatsRepository, MessageStatsSeries, NewConfigChange, RepoResult, UserRepository,
};
pub use value_objects::{
    GuildConfig, MessageStatsMode, Snowflake, SnowflakeParseError, TimeBucket, WebPermissions,
    WebRole,
};
