//! Page handlers
//!
//! Rendered dashboard views for a single guild.

use axum::{extract::State, response::Html};

use crate::extractors::GuildAccessor;
use crate::pages::Page;
use crate::response::ApiResult;
use crate::state::AppState;

fn render(state: &AppState, accessor: &GuildAccessor, page: Page) -> ApiResult<Html<String>> {
    let context = accessor.access.page_context(&accessor.user);
    Ok(Html(state.pages().render(page, &context)?))
}

/// GET /guilds/{gid}
pub async fn guild_info(
    State(state): State<AppState>,
    accessor: GuildAccessor,
) -> ApiResult<Html<String>> {
    render(&state, &accessor, Page::GuildInfo)
}

/// GET /guilds/{gid}/config
pub async fn guild_config(
    State(state): State<AppState>,
    accessor: GuildAccessor,
) -> ApiResult<Html<String>> {
    render(&state, &accessor, Page::GuildConfig)
}

/// GET /guilds/{gid}/infractions
pub async fn guild_infractions(
    State(state): State<AppState>,
    accessor: GuildAccessor,
) -> ApiResult<Html<String>> {
    render(&state, &accessor, Page::GuildInfractions)
}
