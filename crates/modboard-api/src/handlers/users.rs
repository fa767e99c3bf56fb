//! User handlers

use axum::{extract::State, Json};
use modboard_service::{GuildAccessResponse, GuildAccessService};

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Get every guild the current user can open, with their role
///
/// GET /api/users/@me/guilds
pub async fn get_current_user_guilds(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<GuildAccessResponse>>> {
    let service = GuildAccessService::new(state.service_context());
    let response = service.list_for_user(&auth.user).await?;
    Ok(Json(response))
}
