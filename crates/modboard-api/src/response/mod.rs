//! Response types and error handling for API endpoints
//!
//! Errors are returned as short plain-text bodies (`Invalid Guild`,
//! `Missing Permissions`, ...) with the matching status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use modboard_common::AppError;
use modboard_core::DomainError;
use modboard_service::ServiceError;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    App(#[from] AppError),

    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Invalid query parameter: {0}")]
    InvalidQuery(String),

    /// Guild id in the path is not a snowflake
    #[error("Unknown guild: {0}")]
    UnknownGuild(String),

    #[error("Missing session")]
    MissingAuth,

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        let code = match self {
            Self::App(e) => e.status_code(),
            Self::Service(e) => e.status_code(),
            Self::Domain(e) => {
                if e.is_not_found() {
                    404
                } else if e.is_authorization() {
                    403
                } else if e.is_validation() {
                    400
                } else {
                    500
                }
            }
            Self::Validation(_) | Self::InvalidQuery(_) => 400,
            Self::UnknownGuild(_) => 404,
            Self::MissingAuth => 401,
            Self::Internal(_) => 500,
        };
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get error code for logs
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::App(e) => e.error_code(),
            Self::Service(e) => e.error_code(),
            Self::Domain(e) => e.code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidQuery(_) => "INVALID_QUERY_PARAMETER",
            Self::UnknownGuild(_) => "UNKNOWN_GUILD",
            Self::MissingAuth => "MISSING_AUTHORIZATION",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }

    /// Create an invalid query error
    pub fn invalid_query(msg: impl Into<String>) -> Self {
        Self::InvalidQuery(msg.into())
    }

    fn domain(&self) -> Option<&DomainError> {
        match self {
            Self::Domain(e) | Self::App(AppError::Domain(e)) => Some(e),
            Self::Service(e) => e.as_domain(),
            _ => None,
        }
    }

    /// Plain-text body shown to the caller
    ///
    /// Server errors never leak their cause.
    pub fn body(&self) -> String {
        let status = self.status_code();
        if status.is_server_error() {
            return "Internal Server Error".to_string();
        }
        if status == StatusCode::UNAUTHORIZED {
            return "Unauthorized".to_string();
        }
        if let Some(e) = self.domain() {
            return domain_message(e);
        }

        match self {
            Self::UnknownGuild(_) => "Invalid Guild".to_string(),
            Self::Validation(errors) => errors.to_string(),
            Self::InvalidQuery(msg)
            | Self::Service(ServiceError::Validation(msg))
            | Self::App(AppError::Validation(msg) | AppError::InvalidInput(msg)) => msg.clone(),
            _ => status.canonical_reason().unwrap_or("Error").to_string(),
        }
    }
}

fn domain_message(e: &DomainError) -> String {
    match e {
        DomainError::GuildNotFound(_) => "Invalid Guild",
        DomainError::MissingPermission(_) => "Missing Permissions",
        DomainError::PermissionsLocked => "Cannot Alter Permissions",
        DomainError::InvalidConfig(_) => "Invalid YAML",
        DomainError::InvalidPermissions(_) => "Invalid Permissions",
        DomainError::InvalidStatsMode(_) => "Invalid Mode",
        DomainError::InvalidSortColumn(_) => "Invalid Column",
        DomainError::ValidationError(msg) => return msg.clone(),
        DomainError::DatabaseError(_) | DomainError::InternalError(_) => "Internal Server Error",
    }
    .to_string()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log server errors
        if status.is_server_error() {
            error!(error = ?self, code = self.error_code(), "Server error occurred");
        }

        (status, self.body()).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
