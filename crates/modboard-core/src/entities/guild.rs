//! Guild entity - a server the bot is installed in

use chrono::{DateTime, Utc};

use crate::value_objects::{GuildConfig, Snowflake, WebPermissions};

/// Guild (server) entity
#[derive(Debug, Clone, PartialEq)]
pub struct Guild {
    pub id: Snowflake,
    pub owner_id: Snowflake,
    pub name: String,
    pub icon: Option<String>,
    pub enabled: bool,
    /// Parsed configuration document
    pub config: GuildConfig,
    /// YAML text last submitted through the dashboard
    pub config_raw: Option<String>,
    pub added_at: DateTime<Utc>,
}

impl Guild {
    /// Create a new Guild with an empty configuration
    pub fn new(id: Snowflake, name: String, owner_id: Snowflake) -> Self {
        Self {
            id,
            owner_id,
            name,
            icon: None,
            enabled: true,
            config: GuildConfig::default(),
            config_raw: None,
            added_at: Utc::now(),
        }
    }

    /// Permission map from the `web` config section
    pub fn web_permissions(&self) -> WebPermissions {
        self.config.web_permissions()
    }

    /// Get the guild icon URL if set
    pub fn icon_url(&self) -> Option<String> {
        self.icon
            .as_ref()
            .map(|hash| format!("https://cdn.discordapp.com/icons/{}/{}.png", self.id, hash))
    }
}
