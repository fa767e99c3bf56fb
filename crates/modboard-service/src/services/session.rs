//! Session service
//!
//! Turns a session token into the user it belongs to.

use modboard_common::AppError;
use modboard_core::entities::User;
use tracing::{instrument, warn};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Session service
pub struct SessionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SessionService<'a> {
    /// Create a new SessionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Validate a session token and load its user
    ///
    /// The user row is read on every call so a revoked `admin` flag takes
    /// effect immediately.
    #[instrument(skip(self, token))]
    pub async fn authenticate(&self, token: &str) -> ServiceResult<User> {
        let claims = self.ctx.jwt_service().validate_session(token)?;
        let user_id = claims.user_id()?;

        match self.ctx.user_repo().find_by_id(user_id).await? {
            Some(user) => Ok(user),
            None => {
                warn!(user_id = %user_id, "session for unknown user");
                Err(AppError::InvalidToken.into())
            }
        }
    }
}
