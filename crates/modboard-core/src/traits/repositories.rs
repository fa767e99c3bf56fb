//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Channel, ConfigChangeEntry, Guild, GuildConfigChange, User};
use crate::error::DomainError;
use crate::query::{InfractionPage, InfractionQuery};
use crate::value_objects::{GuildConfig, MessageStatsMode, Snowflake};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;
}

// ============================================================================
// Guild Repository
// ============================================================================

/// Accepted configuration update, ready to persist
#[derive(Debug, Clone)]
pub struct NewConfigChange {
    pub guild_id: Snowflake,
    pub user_id: Snowflake,
    pub config: GuildConfig,
    pub before_raw: String,
    pub after_raw: String,
}

#[async_trait]
pub trait GuildRepository: Send + Sync {
    /// Find guild by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Guild>>;

    /// List every guild
    async fn find_all(&self) -> RepoResult<Vec<Guild>>;

    /// List guilds whose `web` section has an entry for the user
    async fn find_by_web_member(&self, user_id: Snowflake) -> RepoResult<Vec<Guild>>;

    /// Store a new configuration and its audit record atomically
    ///
    /// Fails with `GuildNotFound` if the guild no longer exists.
    async fn update_config(&self, change: NewConfigChange) -> RepoResult<GuildConfigChange>;
}

// ============================================================================
// Config Change Repository
// ============================================================================

#[async_trait]
pub trait ConfigChangeRepository: Send + Sync {
    /// Audit records for a guild, newest first, with the acting user
    async fn list_by_guild(
        &self,
        guild_id: Snowflake,
        limit: i64,
        offset: i64,
    ) -> RepoResult<Vec<ConfigChangeEntry>>;

    /// Number of audit records for a guild
    async fn count_by_guild(&self, guild_id: Snowflake) -> RepoResult<i64>;
}

// ============================================================================
// Infraction Repository
// ============================================================================

#[async_trait]
pub trait InfractionRepository: Send + Sync {
    /// Run a table query: one page of rows plus total and filtered counts
    async fn query(&self, query: &InfractionQuery) -> RepoResult<InfractionPage>;
}

// ============================================================================
// Channel Repository
// ============================================================================

#[async_trait]
pub trait ChannelRepository: Send + Sync {
    /// The guild's channels that are not deleted
    async fn find_live_by_guild(&self, guild_id: Snowflake) -> RepoResult<Vec<Channel>>;
}

// ============================================================================
// Message Stats Repository
// ============================================================================

/// Bucketed message counters, aligned by bucket index, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageStatsSeries {
    pub created: Vec<i64>,
    pub updated: Vec<i64>,
    pub deleted: Vec<i64>,
    pub mentions: Vec<i64>,
}

impl MessageStatsSeries {
    /// Number of buckets
    pub fn len(&self) -> usize {
        self.created.len()
    }

    pub fn is_empty(&self) -> bool {
        self.created.is_empty()
    }

    pub fn push(&mut self, created: i64, updated: i64, deleted: i64, mentions: i64) {
        self.created.push(created);
        self.updated.push(updated);
        self.deleted.push(deleted);
        self.mentions.push(mentions);
    }
}

#[async_trait]
pub trait MessageStatsRepository: Send + Sync {
    /// Aggregate snapshots for the channels over the mode's window
    async fn aggregate(
        &self,
        channel_ids: &[Snowflake],
        mode: MessageStatsMode,
    ) -> RepoResult<MessageStatsSeries>;
}
