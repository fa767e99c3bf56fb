//! Axum extractors for request handling
//!
//! Custom extractors for session authentication, guild access and query
//! validation.

mod auth;
mod guild;
mod validated;

pub use auth::{AuthUser, SESSION_COOKIE};
pub use guild::GuildAccessor;
pub use validated::ValidatedQuery;
