//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs and page contexts
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    ConfigHistoryQuery, ConfigUpdateRequest, InfractionTableRequest, MessageStatsQuery,
    OrderParam,
};

pub use responses::{
    ConfigHistoryEntryResponse, CurrentUserResponse, GuildAccessResponse, GuildPageContext,
    GuildResponse, HealthChecks, HealthResponse, InfractionRowResponse, InfractionTableResponse,
    MessageStatsResponse, PublicUserResponse, ReadinessResponse, StatsSeries,
};
