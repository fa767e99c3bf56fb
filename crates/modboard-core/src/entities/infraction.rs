//! Infraction entity - a moderation action recorded by the bot

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::entities::User;
use crate::value_objects::Snowflake;

/// Infraction type, stored as its integer index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(i16)]
pub enum InfractionType {
    Mute = 0,
    Kick = 1,
    Tempban = 2,
    Softban = 3,
    Ban = 4,
    Tempmute = 5,
    Unban = 6,
    Temprole = 7,
    Warning = 8,
}

impl InfractionType {
    /// Resolve a stored index
    pub fn from_index(index: i32) -> Option<Self> {
        Some(match index {
            0 => Self::Mute,
            1 => Self::Kick,
            2 => Self::Tempban,
            3 => Self::Softban,
            4 => Self::Ban,
            5 => Self::Tempmute,
            6 => Self::Unban,
            7 => Self::Temprole,
            8 => Self::Warning,
            _ => return None,
        })
    }

    #[inline]
    pub fn index(self) -> i32 {
        self as i32
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Mute => "mute",
            Self::Kick => "kick",
            Self::Tempban => "tempban",
            Self::Softban => "softban",
            Self::Ban => "ban",
            Self::Tempmute => "tempmute",
            Self::Unban => "unban",
            Self::Temprole => "temprole",
            Self::Warning => "warning",
        }
    }
}

/// Infraction entity
#[derive(Debug, Clone, PartialEq)]
pub struct Infraction {
    pub id: i64,
    pub guild_id: Snowflake,
    /// Raw stored type index; may be outside the known set
    pub type_index: i32,
    pub user_id: Snowflake,
    pub actor_id: Snowflake,
    pub reason: Option<String>,
    pub metadata: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub active: bool,
}

impl Infraction {
    pub fn kind(&self) -> Option<InfractionType> {
        InfractionType::from_index(self.type_index)
    }

    /// Lowercase type label, `unknown` for unrecognized indices
    pub fn type_label(&self) -> &'static str {
        self.kind().map_or("unknown", InfractionType::label)
    }
}

/// Infraction joined with its target and acting users
#[derive(Debug, Clone, PartialEq)]
pub struct InfractionEntry {
    pub infraction: Infraction,
    pub user: User,
    pub actor: User,
}
