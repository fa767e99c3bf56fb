//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in modboard-core.

mod channel;
mod config_change;
mod error;
mod guild;
mod infraction;
mod message_stats;
mod user;

pub use channel::PgChannelRepository;
pub use config_change::PgConfigChangeRepository;
pub use guild::PgGuildRepository;
pub use infraction::PgInfractionRepository;
pub use message_stats::PgMessageStatsRepository;
pub use user::PgUserRepository;
