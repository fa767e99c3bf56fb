//! # modboard-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management (primary and stats datastores)
//! - Database models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use modboard_db::pool::{create_pool, DatabaseConfig};
//! use modboard_db::repositories::PgGuildRepository;
//! use modboard_core::traits::GuildRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     let guilds = PgGuildRepository::new(pool);
//!     let all = guilds.find_all().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{
    apply_primary_schema, apply_stats_schema, create_pool, DatabaseConfig, DatabasePools, PgPool,
};
pub use repositories::{
    PgChannelRepository, PgConfigChangeRepository, PgGuildRepository, PgInfractionRepository,
    PgMessageStatsRepository, PgUserRepository,
};
