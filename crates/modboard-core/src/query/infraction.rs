//! Infraction table query: ordering, search and paging
//!
//! Column positions follow the dashboard table:
//!
//! | index | column           |
//! |-------|------------------|
//! | 0     | id               |
//! | 1     | type             |
//! | 2     | target user id   |
//! | 3     | target username  |
//! | 4     | actor user id    |
//! | 5     | actor username   |
//! | 6     | reason           |
//! | 7     | created at       |
//! | 8     | expires at       |
//! | 9     | active           |

use crate::entities::InfractionEntry;
use crate::value_objects::Snowflake;

/// Upper bound on ordering pairs read from a request
pub const MAX_ORDER_COLUMNS: usize = 32;

pub const DEFAULT_PAGE_LENGTH: i64 = 25;
pub const MAX_PAGE_LENGTH: i64 = 100;

/// Sortable infraction column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfractionSortKey {
    Id,
    Type,
    UserId,
    UserUsername,
    ActorId,
    ActorUsername,
    Reason,
    CreatedAt,
    ExpiresAt,
    Active,
}

impl InfractionSortKey {
    /// Columns in table order
    pub const COLUMNS: [Self; 10] = [
        Self::Id,
        Self::Type,
        Self::UserId,
        Self::UserUsername,
        Self::ActorId,
        Self::ActorUsername,
        Self::Reason,
        Self::CreatedAt,
        Self::ExpiresAt,
        Self::Active,
    ];

    pub fn from_column_index(index: usize) -> Option<Self> {
        Self::COLUMNS.get(index).copied()
    }

    /// Column name exposed to clients
    pub fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Type => "type",
            Self::UserId => "user_id",
            Self::UserUsername => "user_username",
            Self::ActorId => "actor_id",
            Self::ActorUsername => "actor_username",
            Self::Reason => "reason",
            Self::CreatedAt => "created_at",
            Self::ExpiresAt => "expires_at",
            Self::Active => "active",
        }
    }

    /// Fixed SQL expression for `ORDER BY`
    ///
    /// Aliases: `i` infractions, `u` target user, `a` actor.
    pub fn sql_expr(self) -> &'static str {
        match self {
            Self::Id => "i.id",
            Self::Type => "i.type",
            Self::UserId => "u.user_id",
            Self::UserUsername => "u.username",
            Self::ActorId => "a.user_id",
            Self::ActorUsername => "a.username",
            Self::Reason => "i.reason",
            Self::CreatedAt => "i.created_at",
            Self::ExpiresAt => "i.expires_at",
            Self::Active => "i.active",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// `asc` selects ascending; anything else (or nothing) is descending
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("asc") => Self::Asc,
            _ => Self::Desc,
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfractionOrder {
    pub key: InfractionSortKey,
    pub direction: SortDirection,
}

impl InfractionOrder {
    pub fn new(key: InfractionSortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }
}

/// Free-text search over infractions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfractionSearch {
    /// Substring matched case-insensitively against usernames and reason
    pub text: String,
    /// Exact id matched against target, actor and infraction ids
    pub numeric: Option<i64>,
}

impl InfractionSearch {
    /// Build a search from request text; empty text means no search
    pub fn parse(text: &str) -> Option<Self> {
        if text.is_empty() {
            return None;
        }

        let numeric = if text.bytes().all(|b| b.is_ascii_digit()) {
            text.parse::<i64>().ok()
        } else {
            None
        };

        Some(Self {
            text: text.to_string(),
            numeric,
        })
    }
}

/// Fully resolved infraction listing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfractionQuery {
    pub guild_id: Snowflake,
    /// Applied in order; empty means the default `id DESC`
    pub order: Vec<InfractionOrder>,
    pub search: Option<InfractionSearch>,
    pub offset: i64,
    pub limit: i64,
}

impl InfractionQuery {
    pub fn new(guild_id: Snowflake) -> Self {
        Self {
            guild_id,
            order: Vec::new(),
            search: None,
            offset: 0,
            limit: DEFAULT_PAGE_LENGTH,
        }
    }

    /// Ordering with the `id DESC` tiebreaker appended
    pub fn effective_order(&self) -> Vec<InfractionOrder> {
        let mut order = self.order.clone();
        order.push(InfractionOrder::new(InfractionSortKey::Id, SortDirection::Desc));
        order
    }
}

/// One page of infractions plus the table counters
#[derive(Debug, Clone, Default)]
pub struct InfractionPage {
    /// All infractions for the guild
    pub total: i64,
    /// Infractions matching the search
    pub filtered: i64,
    pub rows: Vec<InfractionEntry>,
}
