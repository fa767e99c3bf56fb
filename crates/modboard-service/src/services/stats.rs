//! Message statistics service

use modboard_core::{DomainError, MessageStatsMode, MessageStatsSeries, Snowflake};
use tracing::{debug, instrument};

use crate::dto::MessageStatsResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Stats service
pub struct StatsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StatsService<'a> {
    /// Create a new StatsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Bucketed message counters for the guild's live channels
    ///
    /// `mode` defaults to `15m` when absent.
    #[instrument(skip(self))]
    pub async fn message_stats(
        &self,
        guild_id: Snowflake,
        mode: Option<&str>,
    ) -> ServiceResult<MessageStatsResponse> {
        let mode = match mode {
            None => MessageStatsMode::default(),
            Some(raw) => raw
                .parse::<MessageStatsMode>()
                .map_err(|e| DomainError::InvalidStatsMode(e.0))?,
        };

        let channels = self.ctx.channel_repo().find_live_by_guild(guild_id).await?;
        if channels.is_empty() {
            debug!("guild has no live channels");
            return Ok(MessageStatsSeries::default().into());
        }

        let channel_ids: Vec<Snowflake> = channels.iter().map(|c| c.id).collect();
        let series = self
            .ctx
            .message_stats_repo()
            .aggregate(&channel_ids, mode)
            .await?;

        debug!(mode = %mode, buckets = series.len(), "message stats aggregated");
        Ok(series.into())
    }
}
