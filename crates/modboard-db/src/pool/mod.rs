//! Database connection pool management

mod postgres;
mod schema;

pub use postgres::{create_pool, DatabaseConfig, DatabasePools};
pub use schema::{apply_primary_schema, apply_stats_schema, PRIMARY_SCHEMA, STATS_SCHEMA};

// Re-export PgPool for convenience
pub use sqlx::postgres::PgPool;
