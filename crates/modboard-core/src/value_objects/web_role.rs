//! Dashboard role granted through a guild's `web` permission section

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role a user holds on the dashboard for a single guild
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebRole {
    /// Read-only access to the guild's pages
    Viewer,
    /// May edit the configuration, except the `web` section
    Editor,
    /// Full control, including the `web` section
    Admin,
}

impl WebRole {
    /// Parse a role name strictly (used when validating submitted configs)
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Self::Admin),
            "editor" => Some(Self::Editor),
            "viewer" => Some(Self::Viewer),
            _ => None,
        }
    }

    /// Parse a stored role name, degrading unknown names to read-only access
    pub fn parse_lenient(s: &str) -> Self {
        Self::parse(s).unwrap_or(Self::Viewer)
    }

    /// Lowercase role name as stored in configuration
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Editor => "editor",
            Self::Viewer => "viewer",
        }
    }

    /// Whether this role may submit configuration changes
    #[inline]
    pub fn can_edit_config(self) -> bool {
        matches!(self, Self::Admin | Self::Editor)
    }

    /// Whether this role may change the `web` permission section
    #[inline]
    pub fn can_edit_permissions(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for WebRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
