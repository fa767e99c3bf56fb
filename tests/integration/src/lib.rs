//! Integration test utilities for the moderation dashboard
//!
//! Spawns the real router against PostgreSQL and seeds guild data directly
//! through SQL.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
