//! Message statistics handler

use axum::{
    extract::{Query, State},
    Json,
};
use modboard_service::{MessageStatsQuery, MessageStatsResponse, StatsService};

use crate::extractors::GuildAccessor;
use crate::response::ApiResult;
use crate::state::AppState;

/// Get bucketed message counters
///
/// GET /api/guilds/{gid}/stats/messages?mode=24h
pub async fn get_message_stats(
    State(state): State<AppState>,
    accessor: GuildAccessor,
    Query(query): Query<MessageStatsQuery>,
) -> ApiResult<Json<MessageStatsResponse>> {
    let service = StatsService::new(state.service_context());
    let response = service
        .message_stats(accessor.guild_id(), query.mode.as_deref())
        .await?;
    Ok(Json(response))
}
