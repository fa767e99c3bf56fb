//! Route definitions
//!
//! Rendered pages under `/guilds`, JSON and text endpoints under `/api`.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{config, health, infractions, pages, stats, users};
use crate::state::AppState;

/// Create the main router (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(page_routes())
        .nest("/api", api_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Rendered guild pages
fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/guilds/:gid", get(pages::guild_info))
        .route("/guilds/:gid/config", get(pages::guild_config))
        .route("/guilds/:gid/infractions", get(pages::guild_infractions))
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(user_routes())
        .merge(guild_routes())
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new().route("/users/@me/guilds", get(users::get_current_user_guilds))
}

/// Guild routes
fn guild_routes() -> Router<AppState> {
    Router::new()
        // Configuration
        .route("/guilds/:gid/config/history", get(config::get_config_history))
        .route("/guilds/:gid/config/update", post(config::update_config))
        .route("/guilds/:gid/config/raw", get(config::get_raw_config))
        // Infractions
        .route("/guilds/:gid/infractions", get(infractions::get_infractions))
        // Stats
        .route("/guilds/:gid/stats/messages", get(stats::get_message_stats))
}
