//! Infraction table handler

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    Json,
};
use modboard_service::{InfractionService, InfractionTableRequest, InfractionTableResponse};

use crate::extractors::GuildAccessor;
use crate::response::ApiResult;
use crate::state::AppState;

/// Get one page of the guild's infractions
///
/// GET /api/guilds/{gid}/infractions
///
/// Parameters use the table widget's bracketed keys (`order[0][column]`,
/// `search[value]`, ...), so they are read from a flat map.
pub async fn get_infractions(
    State(state): State<AppState>,
    accessor: GuildAccessor,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<InfractionTableResponse>> {
    let request = InfractionTableRequest::from_params(&params)?;

    let service = InfractionService::new(state.service_context());
    let response = service.list(accessor.guild_id(), &request).await?;
    Ok(Json(response))
}
