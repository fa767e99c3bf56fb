//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output or page rendering.
//! Snowflake ids are rendered as strings.

use chrono::{DateTime, Utc};
use modboard_core::WebRole;
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

// ============================================================================
// User Responses
// ============================================================================

/// Public identity shown next to audit records and infractions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicUserResponse {
    pub user_id: String,
    pub username: String,
    pub discriminator: String,
}

/// The signed-in user, as exposed to page templates
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub user_id: String,
    pub username: String,
    pub discriminator: String,
    pub avatar_url: String,
    pub admin: bool,
}

// ============================================================================
// Guild Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct GuildResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    pub owner_id: String,
    pub enabled: bool,
}

/// A guild together with the caller's effective role on it
#[derive(Debug, Clone, Serialize)]
pub struct GuildAccessResponse {
    pub guild: GuildResponse,
    pub role: WebRole,
}

/// Render context shared by the guild pages
#[derive(Debug, Clone, Serialize)]
pub struct GuildPageContext {
    pub guild: GuildResponse,
    pub role: WebRole,
    pub can_edit: bool,
    pub user: CurrentUserResponse,
}

// ============================================================================
// Config Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ConfigHistoryEntryResponse {
    pub user: PublicUserResponse,
    pub before: String,
    pub after: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Infraction Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct InfractionRowResponse {
    pub id: i64,
    pub user: PublicUserResponse,
    pub actor: PublicUserResponse,
    #[serde(rename = "type")]
    pub kind: String,
    pub reason: Option<String>,
    pub metadata: serde_json::Value,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub active: bool,
}

/// Table widget response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfractionTableResponse {
    pub draw: i64,
    pub records_total: i64,
    pub records_filtered: i64,
    pub data: Vec<InfractionRowResponse>,
}

// ============================================================================
// Stats Responses
// ============================================================================

/// One chart series, serialized as `["label", v0, v1, ...]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsSeries {
    pub label: &'static str,
    pub values: Vec<i64>,
}

impl StatsSeries {
    pub fn new(label: &'static str, values: Vec<i64>) -> Self {
        Self { label, values }
    }
}

impl Serialize for StatsSeries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.values.len() + 1))?;
        seq.serialize_element(self.label)?;
        for value in &self.values {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

/// `{ "data": [created, updated, deleted, mentions] }`
#[derive(Debug, Clone, Serialize)]
pub struct MessageStatsResponse {
    pub data: [StatsSeries; 4],
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each datastore
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub stats_database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool, stats_healthy: bool) -> Self {
        let label = |healthy: bool| if healthy { "healthy" } else { "unhealthy" }.to_string();
        Self {
            status: if database_healthy && stats_healthy {
                "ready"
            } else {
                "not_ready"
            }
            .to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: label(database_healthy),
                stats_database: label(stats_healthy),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
