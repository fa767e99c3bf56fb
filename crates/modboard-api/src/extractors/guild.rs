//! Guild access extractor
//!
//! Authenticates the caller, then resolves their role on the guild named
//! by the `:gid` path segment before the handler runs.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts, Path},
    http::request::Parts,
};
use modboard_core::entities::User;
use modboard_core::Snowflake;
use modboard_service::{GuildAccess, GuildAccessService};
use serde::Deserialize;

use super::AuthUser;
use crate::response::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
struct GuildPath {
    gid: String,
}

/// Caller plus their resolved access to the path's guild
///
/// Unknown guilds, malformed ids and guilds the caller holds no role on
/// all reject with 404 `Invalid Guild`.
#[derive(Debug, Clone)]
pub struct GuildAccessor {
    pub user: User,
    pub access: GuildAccess,
}

impl GuildAccessor {
    pub fn guild_id(&self) -> Snowflake {
        self.access.guild.id
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for GuildAccessor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthUser { user } = AuthUser::from_request_parts(parts, state).await?;

        let Path(GuildPath { gid }) = Path::<GuildPath>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::UnknownGuild(e.body_text()))?;
        let guild_id = Snowflake::parse(&gid).map_err(|_| ApiError::UnknownGuild(gid.clone()))?;

        let app_state = AppState::from_ref(state);
        let access = GuildAccessService::new(app_state.service_context())
            .resolve(&user, guild_id)
            .await?;

        Ok(GuildAccessor { user, access })
    }
}
