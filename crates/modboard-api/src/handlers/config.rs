//! Guild configuration handlers
//!
//! History listing, YAML updates and raw export.

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Form, Json,
};
use modboard_service::{
    raw_config, ConfigHistoryEntryResponse, ConfigHistoryQuery, ConfigService,
    ConfigUpdateRequest,
};

use crate::extractors::{GuildAccessor, ValidatedQuery};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get one page of configuration changes, newest first
///
/// GET /api/guilds/{gid}/config/history
pub async fn get_config_history(
    State(state): State<AppState>,
    accessor: GuildAccessor,
    ValidatedQuery(query): ValidatedQuery<ConfigHistoryQuery>,
) -> ApiResult<Json<Vec<ConfigHistoryEntryResponse>>> {
    let service = ConfigService::new(state.service_context());
    let response = service.history(accessor.guild_id(), query.page()).await?;
    Ok(Json(response))
}

/// Replace the guild configuration
///
/// POST /api/guilds/{gid}/config/update
///
/// The YAML document comes from the `data` form field, falling back to the
/// query string. A missing document is treated as empty, which fails as
/// invalid YAML once the role check has passed.
pub async fn update_config(
    State(state): State<AppState>,
    accessor: GuildAccessor,
    Query(query): Query<ConfigUpdateRequest>,
    form: Option<Form<ConfigUpdateRequest>>,
) -> ApiResult<StatusCode> {
    let yaml = form
        .and_then(|Form(request)| request.data)
        .or(query.data)
        .unwrap_or_default();

    let service = ConfigService::new(state.service_context());
    service
        .update(&accessor.access, &accessor.user, &yaml)
        .await?;
    Ok(StatusCode::OK)
}

/// Export the configuration as YAML text
///
/// GET /api/guilds/{gid}/config/raw
pub async fn get_raw_config(accessor: GuildAccessor) -> ApiResult<impl IntoResponse> {
    let body = raw_config(&accessor.access.guild)?;
    Ok(([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body))
}
