//! Infraction table service
//!
//! Resolves table widget parameters into a typed query. Column indexes go
//! through the sort key allow-list; request text never reaches SQL as-is.

use modboard_core::query::{
    InfractionOrder, InfractionQuery, InfractionSearch, InfractionSortKey, SortDirection,
    DEFAULT_PAGE_LENGTH, MAX_PAGE_LENGTH,
};
use modboard_core::{DomainError, Snowflake};
use tracing::instrument;

use crate::dto::{InfractionRowResponse, InfractionTableRequest, InfractionTableResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Infraction service
pub struct InfractionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> InfractionService<'a> {
    /// Create a new InfractionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// One page of the guild's infraction table
    #[instrument(skip(self, request))]
    pub async fn list(
        &self,
        guild_id: Snowflake,
        request: &InfractionTableRequest,
    ) -> ServiceResult<InfractionTableResponse> {
        let query = build_query(guild_id, request)?;
        let page = self.ctx.infraction_repo().query(&query).await?;

        Ok(InfractionTableResponse {
            draw: request.draw,
            records_total: page.total,
            records_filtered: page.filtered,
            data: page.rows.into_iter().map(InfractionRowResponse::from).collect(),
        })
    }
}

/// Resolve request parameters into a repository query
pub fn build_query(
    guild_id: Snowflake,
    request: &InfractionTableRequest,
) -> Result<InfractionQuery, DomainError> {
    let order = request
        .order
        .iter()
        .map(|param| {
            let key = param
                .column
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(InfractionSortKey::from_column_index)
                .ok_or_else(|| DomainError::InvalidSortColumn(param.column.clone()))?;
            Ok(InfractionOrder::new(
                key,
                SortDirection::from_param(param.dir.as_deref()),
            ))
        })
        .collect::<Result<Vec<_>, DomainError>>()?;

    let mut query = InfractionQuery::new(guild_id);
    query.order = order;
    query.search = request.search.as_deref().and_then(InfractionSearch::parse);
    query.offset = request.start;
    query.limit = request
        .length
        .unwrap_or(DEFAULT_PAGE_LENGTH)
        .clamp(1, MAX_PAGE_LENGTH);
    Ok(query)
}
