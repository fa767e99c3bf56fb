//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use modboard_common::{AppConfig, AppError, JwtService};
use modboard_db::{
    DatabaseConfig, DatabasePools, PgChannelRepository, PgConfigChangeRepository,
    PgGuildRepository, PgInfractionRepository, PgMessageStatsRepository, PgUserRepository,
};
use modboard_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::pages::PageRenderer;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the application with the plain middleware stack
///
/// Used by tests; `run` adds rate limiting and CORS.
pub fn create_app(state: AppState) -> Router {
    let router = create_router().merge(health_routes());
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Build the production application
///
/// Health routes stay outside the rate limiter so probes are never throttled.
pub fn create_app_with_config(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let router = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;
    let health = apply_middleware(health_routes());

    Ok(router.merge(health).with_state(state))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pools = DatabasePools::connect(
        &DatabaseConfig::from(&config.database),
        &DatabaseConfig::from(&config.stats_database),
    )
    .await
    .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connections established");

    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.session_expiry,
    ));

    let pages = PageRenderer::new(config.templates.dir.as_deref())?;

    let service_context = ServiceContextBuilder::new()
        .user_repo(Arc::new(PgUserRepository::new(pools.primary.clone())))
        .guild_repo(Arc::new(PgGuildRepository::new(pools.primary.clone())))
        .config_change_repo(Arc::new(PgConfigChangeRepository::new(pools.primary.clone())))
        .infraction_repo(Arc::new(PgInfractionRepository::new(pools.primary.clone())))
        .channel_repo(Arc::new(PgChannelRepository::new(pools.primary.clone())))
        .message_stats_repo(Arc::new(PgMessageStatsRepository::new(pools.stats.clone())))
        .jwt_service(jwt_service)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, pools, pages, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {}", e)))?;

    let state = create_app_state(config).await?;
    let app = create_app_with_config(state)?;

    run_server(app, addr).await
}
