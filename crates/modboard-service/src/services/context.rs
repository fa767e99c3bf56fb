//! Service context - dependency container for services
//!
//! Holds all repositories and the session token service.

use std::sync::Arc;

use modboard_common::auth::JwtService;
use modboard_core::traits::{
    ChannelRepository, ConfigChangeRepository, GuildRepository, InfractionRepository,
    MessageStatsRepository, UserRepository,
};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// Repositories are trait objects so tests can swap in in-memory fakes.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories (primary datastore)
    user_repo: Arc<dyn UserRepository>,
    guild_repo: Arc<dyn GuildRepository>,
    config_change_repo: Arc<dyn ConfigChangeRepository>,
    infraction_repo: Arc<dyn InfractionRepository>,
    channel_repo: Arc<dyn ChannelRepository>,

    // Repositories (stats datastore)
    message_stats_repo: Arc<dyn MessageStatsRepository>,

    // Services
    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        guild_repo: Arc<dyn GuildRepository>,
        config_change_repo: Arc<dyn ConfigChangeRepository>,
        infraction_repo: Arc<dyn InfractionRepository>,
        channel_repo: Arc<dyn ChannelRepository>,
        message_stats_repo: Arc<dyn MessageStatsRepository>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            user_repo,
            guild_repo,
            config_change_repo,
            infraction_repo,
            channel_repo,
            message_stats_repo,
            jwt_service,
        }
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the guild repository
    pub fn guild_repo(&self) -> &dyn GuildRepository {
        self.guild_repo.as_ref()
    }

    /// Get the config change repository
    pub fn config_change_repo(&self) -> &dyn ConfigChangeRepository {
        self.config_change_repo.as_ref()
    }

    /// Get the infraction repository
    pub fn infraction_repo(&self) -> &dyn InfractionRepository {
        self.infraction_repo.as_ref()
    }

    /// Get the channel repository
    pub fn channel_repo(&self) -> &dyn ChannelRepository {
        self.channel_repo.as_ref()
    }

    /// Get the message stats repository
    pub fn message_stats_repo(&self) -> &dyn MessageStatsRepository {
        self.message_stats_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("jwt_service", &self.jwt_service)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    guild_repo: Option<Arc<dyn GuildRepository>>,
    config_change_repo: Option<Arc<dyn ConfigChangeRepository>>,
    infraction_repo: Option<Arc<dyn InfractionRepository>>,
    channel_repo: Option<Arc<dyn ChannelRepository>>,
    message_stats_repo: Option<Arc<dyn MessageStatsRepository>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn guild_repo(mut self, repo: Arc<dyn GuildRepository>) -> Self {
        self.guild_repo = Some(repo);
        self
    }

    pub fn config_change_repo(mut self, repo: Arc<dyn ConfigChangeRepository>) -> Self {
        self.config_change_repo = Some(repo);
        self
    }

    pub fn infraction_repo(mut self, repo: Arc<dyn InfractionRepository>) -> Self {
        self.infraction_repo = Some(repo);
        self
    }

    pub fn channel_repo(mut self, repo: Arc<dyn ChannelRepository>) -> Self {
        self.channel_repo = Some(repo);
        self
    }

    pub fn message_stats_repo(mut self, repo: Arc<dyn MessageStatsRepository>) -> Self {
        self.message_stats_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.guild_repo
                .ok_or_else(|| ServiceError::validation("guild_repo is required"))?,
            self.config_change_repo
                .ok_or_else(|| ServiceError::validation("config_change_repo is required"))?,
            self.infraction_repo
                .ok_or_else(|| ServiceError::validation("infraction_repo is required"))?,
            self.channel_repo
                .ok_or_else(|| ServiceError::validation("channel_repo is required"))?,
            self.message_stats_repo
                .ok_or_else(|| ServiceError::validation("message_stats_repo is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
        ))
    }
}
