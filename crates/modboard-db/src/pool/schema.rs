//! Schema bootstrap from the SQL files under `migrations/`

use sqlx::PgPool;

/// Primary datastore schema
pub const PRIMARY_SCHEMA: &str = include_str!("../../../../migrations/0001_init.sql");

/// Stats datastore schema
pub const STATS_SCHEMA: &str = include_str!("../../../../migrations/stats/0001_init.sql");

/// Apply the primary schema (idempotent)
pub async fn apply_primary_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(PRIMARY_SCHEMA).execute(pool).await?;
    Ok(())
}

/// Apply the stats schema (idempotent)
pub async fn apply_stats_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(STATS_SCHEMA).execute(pool).await?;
    Ok(())
}
