//! Health check handlers
//!
//! Endpoints for liveness and readiness probes.

use axum::{extract::State, http::StatusCode, Json};
use modboard_service::{HealthResponse, ReadinessResponse};

use crate::state::AppState;

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Readiness check with dependency health
///
/// GET /health/ready
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    let pools = state.pools();

    // One connection from each pool
    let db_healthy = pools.primary.acquire().await.is_ok();
    let stats_healthy = pools.stats.acquire().await.is_ok();

    let response = ReadinessResponse::ready(db_healthy, stats_healthy);
    let status = if response.is_ready() {
        StatusCode::OK
    } else {
        tracing::warn!(db_healthy, stats_healthy, "readiness check failed");
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
