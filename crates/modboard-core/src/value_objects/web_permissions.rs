//! Per-guild dashboard permission map (the `web` config section)

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use super::{Snowflake, WebRole};

/// Error raised when a submitted `web` section does not have the expected shape
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WebPermissionsError {
    #[error("web section must be a mapping")]
    NotAMapping,

    #[error("invalid user id in web section: {0}")]
    InvalidUserId(String),

    #[error("invalid role for user {user}: {role}")]
    InvalidRole { user: Snowflake, role: String },
}

/// Ordered map of user id to dashboard role
///
/// Ordering on the key makes two maps comparable regardless of the order
/// their entries were written in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WebPermissions(BTreeMap<Snowflake, WebRole>);

impl WebPermissions {
    /// Empty map (no non-admin access)
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `web` section strictly
    ///
    /// Keys may be integers or digit strings and values must be role names.
    /// Role names other than `admin` and `editor` grant `Viewer`, matching
    /// how stored sections are read. A missing section is an empty map.
    pub fn parse(section: Option<&Value>) -> Result<Self, WebPermissionsError> {
        let map = match section {
            None | Some(Value::Null) => return Ok(Self::new()),
            Some(Value::Object(map)) => map,
            Some(_) => return Err(WebPermissionsError::NotAMapping),
        };

        let mut entries = BTreeMap::new();
        for (key, value) in map {
            let user = Snowflake::parse(key)
                .map_err(|_| WebPermissionsError::InvalidUserId(key.clone()))?;
            let role = value
                .as_str()
                .map(WebRole::parse_lenient)
                .ok_or_else(|| WebPermissionsError::InvalidRole {
                    user,
                    role: value.to_string(),
                })?;
            entries.insert(user, role);
        }

        Ok(Self(entries))
    }

    /// Parse a stored `web` section, tolerating malformed data
    ///
    /// A section that is not a mapping yields an empty map. Entries with
    /// unparseable ids are skipped and unknown role names become `Viewer`.
    pub fn parse_lenient(section: Option<&Value>) -> Self {
        let Some(Value::Object(map)) = section else {
            return Self::new();
        };

        let entries = map
            .iter()
            .filter_map(|(key, value)| {
                let user = Snowflake::parse(key).ok()?;
                let role = value.as_str().map_or(WebRole::Viewer, WebRole::parse_lenient);
                Some((user, role))
            })
            .collect();

        Self(entries)
    }

    /// Role granted to a user, if any
    #[inline]
    pub fn role_of(&self, user_id: Snowflake) -> Option<WebRole> {
        self.0.get(&user_id).copied()
    }

    /// Whether the user has any entry
    #[inline]
    pub fn contains(&self, user_id: Snowflake) -> bool {
        self.0.contains_key(&user_id)
    }

    pub fn insert(&mut self, user_id: Snowflake, role: WebRole) -> Option<WebRole> {
        self.0.insert(user_id, role)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Snowflake, WebRole)> + '_ {
        self.0.iter().map(|(id, role)| (*id, *role))
    }
}

impl FromIterator<(Snowflake, WebRole)> for WebPermissions {
    fn from_iter<I: IntoIterator<Item = (Snowflake, WebRole)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
