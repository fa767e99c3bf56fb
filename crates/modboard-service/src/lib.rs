//! # modboard-service
//!
//! Application layer: guild access resolution, configuration editing,
//! infraction table queries and message statistics, plus their DTOs.

pub mod dto;
pub mod services;

pub use dto::*;
pub use services::{
    raw_config, ConfigService, GuildAccess, GuildAccessService, InfractionService,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, SessionService,
    StatsService,
};
