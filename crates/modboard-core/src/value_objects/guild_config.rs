//! Structured guild configuration document

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::WebPermissions;

/// Key of the section holding the dashboard permission map
pub const WEB_SECTION: &str = "web";

/// Parsed guild configuration
///
/// Always a mapping at the root. Only the `web` section is interpreted here;
/// everything else belongs to the bot and is carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuildConfig(Map<String, Value>);

impl GuildConfig {
    /// Wrap a JSON value, returning `None` when the root is not a mapping
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Stored documents that are not mappings are treated as empty
    pub fn from_stored(value: Value) -> Self {
        Self::from_value(value).unwrap_or_default()
    }

    /// The raw `web` section, if present
    pub fn web_section(&self) -> Option<&Value> {
        self.0.get(WEB_SECTION)
    }

    /// Permission map for access checks (lenient)
    pub fn web_permissions(&self) -> WebPermissions {
        WebPermissions::parse_lenient(self.web_section())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }
}
