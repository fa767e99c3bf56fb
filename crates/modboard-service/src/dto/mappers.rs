//! Entity to DTO mappers

use modboard_core::entities::{ConfigChangeEntry, Guild, InfractionEntry, User};
use modboard_core::MessageStatsSeries;

use super::responses::{
    ConfigHistoryEntryResponse, CurrentUserResponse, GuildResponse, InfractionRowResponse,
    MessageStatsResponse, PublicUserResponse, StatsSeries,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for PublicUserResponse {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id.to_string(),
            username: user.username.clone(),
            discriminator: user.discriminator.clone(),
        }
    }
}

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id.to_string(),
            username: user.username.clone(),
            discriminator: user.discriminator.clone(),
            avatar_url: user.avatar_url(),
            admin: user.admin,
        }
    }
}

// ============================================================================
// Guild Mappers
// ============================================================================

impl From<&Guild> for GuildResponse {
    fn from(guild: &Guild) -> Self {
        Self {
            id: guild.id.to_string(),
            name: guild.name.clone(),
            icon: guild.icon.clone(),
            icon_url: guild.icon_url(),
            owner_id: guild.owner_id.to_string(),
            enabled: guild.enabled,
        }
    }
}

// ============================================================================
// Config Mappers
// ============================================================================

impl From<ConfigChangeEntry> for ConfigHistoryEntryResponse {
    fn from(entry: ConfigChangeEntry) -> Self {
        Self {
            user: PublicUserResponse::from(&entry.user),
            before: entry.change.before_raw,
            after: entry.change.after_raw,
            created_at: entry.change.created_at,
        }
    }
}

// ============================================================================
// Infraction Mappers
// ============================================================================

impl From<InfractionEntry> for InfractionRowResponse {
    fn from(entry: InfractionEntry) -> Self {
        let kind = entry.infraction.type_label().to_string();
        let infraction = entry.infraction;
        Self {
            id: infraction.id,
            user: PublicUserResponse::from(&entry.user),
            actor: PublicUserResponse::from(&entry.actor),
            kind,
            reason: infraction.reason,
            metadata: infraction.metadata,
            expires_at: infraction.expires_at,
            created_at: infraction.created_at,
            active: infraction.active,
        }
    }
}

// ============================================================================
// Stats Mappers
// ============================================================================

impl From<MessageStatsSeries> for MessageStatsResponse {
    fn from(series: MessageStatsSeries) -> Self {
        Self {
            data: [
                StatsSeries::new("created", series.created),
                StatsSeries::new("updated", series.updated),
                StatsSeries::new("deleted", series.deleted),
                StatsSeries::new("mentions", series.mentions),
            ],
        }
    }
}
