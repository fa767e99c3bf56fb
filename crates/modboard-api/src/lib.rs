//! # modboard-api
//!
//! Moderation dashboard HTTP server built with Axum: rendered guild pages
//! plus the JSON and text endpoints they call.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod pages;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, create_app_with_config, run};
pub use state::AppState;
