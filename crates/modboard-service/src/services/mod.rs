//! Business logic services
//!
//! Each service borrows the shared `ServiceContext` for the duration of a
//! request and returns response DTOs.

pub mod access;
pub mod config;
pub mod context;
pub mod error;
pub mod infraction;
pub mod session;
pub mod stats;

#[cfg(test)]
pub(crate) mod test_support;

pub use access::{GuildAccess, GuildAccessService};
pub use config::{raw_config, ConfigService};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use infraction::InfractionService;
pub use session::SessionService;
pub use stats::StatsService;
