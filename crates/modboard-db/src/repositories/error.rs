//! Error handling utilities for repositories

use modboard_core::error::DomainError;
use modboard_core::value_objects::Snowflake;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    tracing::error!(error = %e, "database query failed");
    DomainError::DatabaseError(e.to_string())
}

/// Create a "guild not found" error
pub fn guild_not_found(id: Snowflake) -> DomainError {
    DomainError::GuildNotFound(id)
}
