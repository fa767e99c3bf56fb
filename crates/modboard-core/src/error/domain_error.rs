//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    /// Also raised when the caller holds no role on the guild
    #[error("Guild not found: {0}")]
    GuildNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid permissions section: {0}")]
    InvalidPermissions(String),

    #[error("Invalid sort column: {0}")]
    InvalidSortColumn(String),

    #[error("Invalid stats mode: {0}")]
    InvalidStatsMode(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Missing permission: {0}")]
    MissingPermission(String),

    #[error("Cannot alter guild permissions")]
    PermissionsLocked,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for logs and API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::GuildNotFound(_) => "UNKNOWN_GUILD",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::InvalidPermissions(_) => "INVALID_PERMISSIONS",
            Self::InvalidSortColumn(_) => "INVALID_COLUMN",
            Self::InvalidStatsMode(_) => "INVALID_MODE",

            // Authorization
            Self::MissingPermission(_) => "MISSING_PERMISSIONS",
            Self::PermissionsLocked => "CANNOT_ALTER_PERMISSIONS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::GuildNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidConfig(_)
                | Self::InvalidPermissions(_)
                | Self::InvalidSortColumn(_)
                | Self::InvalidStatsMode(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::MissingPermission(_) | Self::PermissionsLocked)
    }

    /// Check if this is an infrastructure error
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::DatabaseError(_) | Self::InternalError(_))
    }
}
