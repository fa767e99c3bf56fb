//! In-memory repositories for service tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use modboard_common::auth::JwtService;
use modboard_core::entities::{
    Channel, ConfigChangeEntry, Guild, GuildConfigChange, InfractionEntry, User,
};
use modboard_core::query::{InfractionPage, InfractionQuery};
use modboard_core::traits::{
    ChannelRepository, ConfigChangeRepository, GuildRepository, InfractionRepository,
    MessageStatsRepository, MessageStatsSeries, NewConfigChange, RepoResult, UserRepository,
};
use modboard_core::{DomainError, GuildConfig, MessageStatsMode, Snowflake};

use super::context::{ServiceContext, ServiceContextBuilder};

pub const TEST_SECRET: &str = "test-secret";

/// One store backing every repository trait
#[derive(Default)]
pub struct MemoryStore {
    pub users: Mutex<HashMap<Snowflake, User>>,
    pub guilds: Mutex<HashMap<Snowflake, Guild>>,
    pub changes: Mutex<Vec<GuildConfigChange>>,
    pub infractions: Mutex<Vec<InfractionEntry>>,
    pub channels: Mutex<Vec<Channel>>,
    pub stats: Mutex<MessageStatsSeries>,
    pub last_infraction_query: Mutex<Option<InfractionQuery>>,
    pub stats_calls: AtomicUsize,
    /// Simulates the guild being deleted between resolution and write
    pub vanish_on_update: Mutex<bool>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn add_user(&self, user: User) {
        self.users.lock().unwrap().insert(user.id, user);
    }

    pub fn add_guild(&self, guild: Guild) {
        self.guilds.lock().unwrap().insert(guild.id, guild);
    }

    pub fn guild(&self, id: Snowflake) -> Option<Guild> {
        self.guilds.lock().unwrap().get(&id).cloned()
    }

    pub fn change_count(&self) -> usize {
        self.changes.lock().unwrap().len()
    }

    pub fn context(self: &Arc<Self>) -> ServiceContext {
        ServiceContextBuilder::new()
            .user_repo(self.clone())
            .guild_repo(self.clone())
            .config_change_repo(self.clone())
            .infraction_repo(self.clone())
            .channel_repo(self.clone())
            .message_stats_repo(self.clone())
            .jwt_service(Arc::new(JwtService::new(TEST_SECRET, 3600)))
            .build()
            .unwrap()
    }
}

pub fn user(id: i64, name: &str) -> User {
    User::new(Snowflake::new(id), name.to_string(), "0001".to_string())
}

pub fn admin(id: i64) -> User {
    let mut user = user(id, "admin");
    user.admin = true;
    user
}

pub fn guild_with_config(id: i64, config: serde_json::Value) -> Guild {
    let mut guild = Guild::new(Snowflake::new(id), format!("guild-{id}"), Snowflake::new(1));
    guild.config = GuildConfig::from_stored(config);
    guild
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(&id).cloned())
    }
}

#[async_trait]
impl GuildRepository for MemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Guild>> {
        Ok(self.guild(id))
    }

    async fn find_all(&self) -> RepoResult<Vec<Guild>> {
        let mut guilds: Vec<_> = self.guilds.lock().unwrap().values().cloned().collect();
        guilds.sort_by_key(|g| g.id);
        Ok(guilds)
    }

    async fn find_by_web_member(&self, user_id: Snowflake) -> RepoResult<Vec<Guild>> {
        let mut guilds: Vec<_> = self
            .guilds
            .lock()
            .unwrap()
            .values()
            .filter(|g| g.web_permissions().contains(user_id))
            .cloned()
            .collect();
        guilds.sort_by_key(|g| g.id);
        Ok(guilds)
    }

    async fn update_config(&self, change: NewConfigChange) -> RepoResult<GuildConfigChange> {
        if *self.vanish_on_update.lock().unwrap() {
            self.guilds.lock().unwrap().remove(&change.guild_id);
        }

        let mut guilds = self.guilds.lock().unwrap();
        let guild = guilds
            .get_mut(&change.guild_id)
            .ok_or(DomainError::GuildNotFound(change.guild_id))?;
        guild.config = change.config;
        guild.config_raw = Some(change.after_raw.clone());

        let mut changes = self.changes.lock().unwrap();
        let record = GuildConfigChange {
            id: changes.len() as i64 + 1,
            guild_id: change.guild_id,
            user_id: change.user_id,
            before_raw: change.before_raw,
            after_raw: change.after_raw,
            created_at: Utc::now(),
        };
        changes.push(record.clone());
        Ok(record)
    }
}

#[async_trait]
impl ConfigChangeRepository for MemoryStore {
    async fn list_by_guild(
        &self,
        guild_id: Snowflake,
        limit: i64,
        offset: i64,
    ) -> RepoResult<Vec<ConfigChangeEntry>> {
        let users = self.users.lock().unwrap();
        let entries = self
            .changes
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|c| c.guild_id == guild_id)
            .skip(offset as usize)
            .take(limit as usize)
            .filter_map(|c| {
                users.get(&c.user_id).map(|u| ConfigChangeEntry {
                    change: c.clone(),
                    user: u.clone(),
                })
            })
            .collect();
        Ok(entries)
    }

    async fn count_by_guild(&self, guild_id: Snowflake) -> RepoResult<i64> {
        let changes = self.changes.lock().unwrap();
        Ok(changes.iter().filter(|c| c.guild_id == guild_id).count() as i64)
    }
}

#[async_trait]
impl InfractionRepository for MemoryStore {
    async fn query(&self, query: &InfractionQuery) -> RepoResult<InfractionPage> {
        *self.last_infraction_query.lock().unwrap() = Some(query.clone());
        let rows: Vec<_> = self
            .infractions
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.infraction.guild_id == query.guild_id)
            .cloned()
            .collect();
        Ok(InfractionPage {
            total: rows.len() as i64,
            filtered: rows.len() as i64,
            rows,
        })
    }
}

#[async_trait]
impl ChannelRepository for MemoryStore {
    async fn find_live_by_guild(&self, guild_id: Snowflake) -> RepoResult<Vec<Channel>> {
        let channels = self.channels.lock().unwrap();
        Ok(channels
            .iter()
            .filter(|c| c.guild_id == guild_id && c.is_live())
            .cloned()
            .collect())
    }
}

#[async_trait]
impl MessageStatsRepository for MemoryStore {
    async fn aggregate(
        &self,
        _channel_ids: &[Snowflake],
        _mode: MessageStatsMode,
    ) -> RepoResult<MessageStatsSeries> {
        self.stats_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.stats.lock().unwrap().clone())
    }
}
