//! Application state
//!
//! Holds the shared state for the Axum application: the service context,
//! the database pools (for readiness checks), the page renderer and the
//! configuration.

use std::sync::Arc;

use modboard_common::AppConfig;
use modboard_db::DatabasePools;
use modboard_service::ServiceContext;

use crate::pages::PageRenderer;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Primary and stats pools
    pools: DatabasePools,
    /// Compiled page templates
    pages: Arc<PageRenderer>,
    /// Application configuration
    config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(
        service_context: ServiceContext,
        pools: DatabasePools,
        pages: PageRenderer,
        config: AppConfig,
    ) -> Self {
        Self {
            service_context: Arc::new(service_context),
            pools,
            pages: Arc::new(pages),
            config: Arc::new(config),
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the database pools
    pub fn pools(&self) -> &DatabasePools {
        &self.pools
    }

    /// Get the page renderer
    pub fn pages(&self) -> &PageRenderer {
        &self.pages
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("pools", &"DatabasePools")
            .field("config", &"AppConfig")
            .finish()
    }
}
