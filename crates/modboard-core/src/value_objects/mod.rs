//! Value objects - immutable types that represent domain concepts

mod guild_config;
mod snowflake;
mod stats_mode;
mod web_permissions;
mod web_role;

pub use guild_config::{GuildConfig, WEB_SECTION};
pub use snowflake::{Snowflake, SnowflakeParseError};
pub use stats_mode::{InvalidStatsMode, MessageStatsMode, TimeBucket};
pub use web_permissions::{WebPermissions, WebPermissionsError};
pub use web_role::WebRole;
