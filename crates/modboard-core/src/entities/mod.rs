//! Domain entities - core business objects

mod channel;
mod config_change;
mod guild;
mod infraction;
mod user;

pub use channel::Channel;
pub use config_change::{ConfigChangeEntry, GuildConfigChange};
pub use guild::Guild;
pub use infraction::{Infraction, InfractionEntry, InfractionType};
pub use user::User;
