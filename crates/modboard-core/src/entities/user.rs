//! User entity - a dashboard user or moderation subject

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// User entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    pub discriminator: String,
    pub avatar: Option<String>,
    pub bot: bool,
    /// Platform-wide admin: implicit `admin` role on every guild
    pub admin: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new non-admin User
    pub fn new(id: Snowflake, username: String, discriminator: String) -> Self {
        Self {
            id,
            username,
            discriminator,
            avatar: None,
            bot: false,
            admin: false,
            created_at: Utc::now(),
        }
    }

    /// Get the full tag: username#discriminator
    pub fn tag(&self) -> String {
        format!("{}#{}", self.username, self.discriminator)
    }

    /// Get avatar URL or default avatar URL
    pub fn avatar_url(&self) -> String {
        match &self.avatar {
            Some(hash) => format!("https://cdn.discordapp.com/avatars/{}/{}.png", self.id, hash),
            None => format!(
                "https://cdn.discordapp.com/embed/avatars/{}.png",
                self.default_avatar_index()
            ),
        }
    }

    /// Get default avatar index (0-4) based on discriminator
    fn default_avatar_index(&self) -> u8 {
        (self.discriminator.parse::<u16>().unwrap_or(0) % 5) as u8
    }
}
