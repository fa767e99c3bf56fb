//! Guild configuration service
//!
//! History listing, raw export and YAML updates with their audit trail.

use modboard_core::entities::{Guild, User};
use modboard_core::query::CONFIG_HISTORY_PAGE_SIZE;
use modboard_core::traits::NewConfigChange;
use modboard_core::{DomainError, GuildConfig, Snowflake, WebPermissions};
use tracing::{info, instrument};

use crate::dto::ConfigHistoryEntryResponse;

use super::access::GuildAccess;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Configuration service
pub struct ConfigService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ConfigService<'a> {
    /// Create a new ConfigService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// One page of audit records, newest first
    #[instrument(skip(self))]
    pub async fn history(
        &self,
        guild_id: Snowflake,
        page: i64,
    ) -> ServiceResult<Vec<ConfigHistoryEntryResponse>> {
        if page < 1 {
            return Err(ServiceError::validation("page must be at least 1"));
        }
        let offset = (page - 1)
            .checked_mul(CONFIG_HISTORY_PAGE_SIZE)
            .ok_or_else(|| ServiceError::validation("page out of range"))?;

        let entries = self
            .ctx
            .config_change_repo()
            .list_by_guild(guild_id, CONFIG_HISTORY_PAGE_SIZE, offset)
            .await?;

        Ok(entries.into_iter().map(ConfigHistoryEntryResponse::from).collect())
    }

    /// Replace a guild's configuration with a submitted YAML document
    ///
    /// Editors may change everything except the `web` section.
    #[instrument(skip(self, access, actor, yaml), fields(guild_id = %access.guild.id, user_id = %actor.id))]
    pub async fn update(&self, access: &GuildAccess, actor: &User, yaml: &str) -> ServiceResult<()> {
        if !access.role.can_edit_config() {
            return Err(DomainError::MissingPermission("edit guild config".to_string()).into());
        }

        let config = parse_config(yaml)?;
        let submitted = WebPermissions::parse(config.web_section())
            .map_err(|e| DomainError::InvalidPermissions(e.to_string()))?;

        if !access.role.can_edit_permissions() && submitted != access.guild.web_permissions() {
            return Err(DomainError::PermissionsLocked.into());
        }

        let change = NewConfigChange {
            guild_id: access.guild.id,
            user_id: actor.id,
            config,
            before_raw: raw_config(&access.guild)?,
            after_raw: yaml.to_string(),
        };
        let record = self.ctx.guild_repo().update_config(change).await?;

        info!(change_id = record.id, "guild config updated");
        Ok(())
    }
}

/// Stored raw text, or the structured config re-serialized as YAML
pub fn raw_config(guild: &Guild) -> ServiceResult<String> {
    match &guild.config_raw {
        Some(raw) => Ok(raw.clone()),
        None => serde_yaml::to_string(&guild.config)
            .map_err(|e| ServiceError::internal(format!("config serialization failed: {e}"))),
    }
}

/// Parse a YAML document into a guild config; the root must be a mapping
fn parse_config(yaml: &str) -> Result<GuildConfig, DomainError> {
    let document: serde_yaml::Value =
        serde_yaml::from_str(yaml).map_err(|e| DomainError::InvalidConfig(e.to_string()))?;
    let value = serde_json::to_value(document)
        .map_err(|e| DomainError::InvalidConfig(e.to_string()))?;

    GuildConfig::from_value(value)
        .ok_or_else(|| DomainError::InvalidConfig("document root must be a mapping".to_string()))
}
