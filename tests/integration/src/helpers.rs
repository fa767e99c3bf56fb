//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, issuing sessions and
//! making HTTP requests.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use modboard_api::{create_app, create_app_state};
use modboard_common::{AppConfig, JwtService};
use modboard_core::Snowflake;
use modboard_db::{apply_primary_schema, apply_stats_schema, PgPool};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    /// Primary pool, for seeding and assertions
    pub pool: PgPool,
    jwt: JwtService,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let jwt = JwtService::new(&config.jwt.secret, config.jwt.session_expiry);

        let state = create_app_state(config).await?;
        apply_primary_schema(&state.pools().primary).await?;
        apply_stats_schema(&state.pools().stats).await?;
        let pool = state.pools().primary.clone();

        let app = create_app(state);

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            pool,
            jwt,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Session token for a user, signed like the login flow signs them
    pub fn session(&self, user_id: Snowflake) -> Result<String> {
        Ok(self.jwt.issue_session(user_id)?)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request with a session token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).bearer_auth(token).send().await?)
    }

    /// Make a GET request with query parameters and a session token
    pub async fn get_query(
        &self,
        path: &str,
        token: &str,
        query: &[(&str, &str)],
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .get(&url)
            .bearer_auth(token)
            .query(query)
            .send()
            .await?)
    }

    /// Submit a configuration document as the `data` form field
    pub async fn post_config(&self, guild_id: Snowflake, token: &str, yaml: &str) -> Result<Response> {
        let url = format!("{}/api/guilds/{}/config/update", self.base_url(), guild_id);
        Ok(self
            .client
            .post(&url)
            .bearer_auth(token)
            .form(&[("data", yaml)])
            .send()
            .await?)
    }
}

/// Create a test configuration
///
/// `API_PORT` is optional here; the server binds an ephemeral port.
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_lookup(|key| {
        std::env::var(key)
            .ok()
            .or_else(|| (key == "API_PORT").then(|| "0".to_string()))
    })
    .map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    Ok(config)
}

/// Helper to check if test environment is available
pub async fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    for var in ["DATABASE_URL", "JWT_SECRET"] {
        if std::env::var(var).is_err() {
            eprintln!("Skipping test: {var} not set");
            return false;
        }
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status and return the text body
pub async fn assert_text(response: Response, expected_status: StatusCode) -> Result<String> {
    let status = response.status();
    let body = response.text().await?;
    if status != expected_status {
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(body)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    assert_text(response, expected_status).await.map(|_| ())
}
