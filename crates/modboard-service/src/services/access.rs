//! Guild access service
//!
//! Resolves a caller's effective dashboard role on a guild. A guild that
//! does not exist and a guild the caller may not see are indistinguishable
//! to the caller.

use modboard_core::entities::{Guild, User};
use modboard_core::{DomainError, Snowflake, WebRole};
use tracing::{debug, instrument};

use crate::dto::{CurrentUserResponse, GuildAccessResponse, GuildPageContext, GuildResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// A guild annotated with the caller's role
#[derive(Debug, Clone)]
pub struct GuildAccess {
    pub guild: Guild,
    pub role: WebRole,
}

impl GuildAccess {
    /// Role a user holds on a guild, if any
    ///
    /// Platform admins are implicit `admin` everywhere; everyone else needs
    /// an entry in the guild's `web` section.
    pub fn role_for(user: &User, guild: &Guild) -> Option<WebRole> {
        if user.admin {
            Some(WebRole::Admin)
        } else {
            guild.web_permissions().role_of(user.id)
        }
    }

    /// Render context for the guild pages
    pub fn page_context(&self, user: &User) -> GuildPageContext {
        GuildPageContext {
            guild: GuildResponse::from(&self.guild),
            role: self.role,
            can_edit: self.role.can_edit_config(),
            user: CurrentUserResponse::from(user),
        }
    }
}

impl From<&GuildAccess> for GuildAccessResponse {
    fn from(access: &GuildAccess) -> Self {
        Self {
            guild: GuildResponse::from(&access.guild),
            role: access.role,
        }
    }
}

/// Guild access service
pub struct GuildAccessService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GuildAccessService<'a> {
    /// Create a new GuildAccessService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Load a guild and the caller's role on it
    ///
    /// Fails with `GuildNotFound` when the guild is missing or the caller
    /// holds no role.
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn resolve(&self, user: &User, guild_id: Snowflake) -> ServiceResult<GuildAccess> {
        let guild = self
            .ctx
            .guild_repo()
            .find_by_id(guild_id)
            .await?
            .ok_or(DomainError::GuildNotFound(guild_id))?;

        let Some(role) = GuildAccess::role_for(user, &guild) else {
            debug!(guild_id = %guild_id, "caller has no role on guild");
            return Err(DomainError::GuildNotFound(guild_id).into());
        };

        debug!(guild_id = %guild_id, role = %role, "guild access resolved");
        Ok(GuildAccess { guild, role })
    }

    /// Every guild the user can open, with their role on each
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn list_for_user(&self, user: &User) -> ServiceResult<Vec<GuildAccessResponse>> {
        let guilds = if user.admin {
            self.ctx.guild_repo().find_all().await?
        } else {
            self.ctx.guild_repo().find_by_web_member(user.id).await?
        };

        Ok(guilds
            .into_iter()
            .filter_map(|guild| {
                let role = GuildAccess::role_for(user, &guild)?;
                Some(GuildAccessResponse::from(&GuildAccess { guild, role }))
            })
            .collect())
    }
}
