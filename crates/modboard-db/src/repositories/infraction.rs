//! PostgreSQL implementation of InfractionRepository
//!
//! The table query is assembled with `QueryBuilder`: every caller-supplied
//! value is bound, and `ORDER BY` only ever receives the fixed expressions
//! of `InfractionSortKey`.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use modboard_core::entities::InfractionEntry;
use modboard_core::query::{InfractionPage, InfractionQuery, InfractionSearch};
use modboard_core::traits::{InfractionRepository, RepoResult};

use crate::models::InfractionRowModel;

use super::error::map_db_error;

const ROW_COLUMNS: &str = r"
    SELECT i.id, i.guild_id, i.type, i.reason, i.metadata, i.expires_at, i.created_at, i.active,
           u.user_id AS user_id, u.username AS user_username,
           u.discriminator AS user_discriminator, u.avatar AS user_avatar,
           u.bot AS user_bot, u.admin AS user_admin, u.created_at AS user_created_at,
           a.user_id AS actor_id, a.username AS actor_username,
           a.discriminator AS actor_discriminator, a.avatar AS actor_avatar,
           a.bot AS actor_bot, a.admin AS actor_admin, a.created_at AS actor_created_at";

const FROM_JOINED: &str = r"
    FROM infractions i
    JOIN users u ON u.user_id = i.user_id
    JOIN users a ON a.user_id = i.actor_id
    WHERE i.guild_id = ";

/// Escape `LIKE`/`ILIKE` metacharacters so the text matches literally
pub(crate) fn escape_ilike_pattern(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Start a query over the guild's joined infractions, optionally filtered
fn scoped(
    select: &str,
    query: &InfractionQuery,
    search: Option<&InfractionSearch>,
) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(select);
    builder.push(FROM_JOINED);
    builder.push_bind(query.guild_id.into_inner());

    if let Some(search) = search {
        push_search(&mut builder, search);
    }

    builder
}

fn push_search(builder: &mut QueryBuilder<'static, Postgres>, search: &InfractionSearch) {
    let pattern = format!("%{}%", escape_ilike_pattern(&search.text));

    builder.push(" AND (u.username ILIKE ");
    builder.push_bind(pattern.clone());
    builder.push(" OR a.username ILIKE ");
    builder.push_bind(pattern.clone());
    builder.push(" OR i.reason ILIKE ");
    builder.push_bind(pattern);

    if let Some(id) = search.numeric {
        builder.push(" OR u.user_id = ");
        builder.push_bind(id);
        builder.push(" OR a.user_id = ");
        builder.push_bind(id);
        builder.push(" OR i.id = ");
        builder.push_bind(id);
    }

    builder.push(")");
}

/// Render the ORDER BY clause, tiebreaker included
fn order_clause(query: &InfractionQuery) -> String {
    let terms: Vec<String> = query
        .effective_order()
        .iter()
        .map(|order| format!("{} {}", order.key.sql_expr(), order.direction.as_sql()))
        .collect();

    format!(" ORDER BY {}", terms.join(", "))
}

/// PostgreSQL implementation of InfractionRepository
#[derive(Clone)]
pub struct PgInfractionRepository {
    pool: PgPool,
}

impl PgInfractionRepository {
    /// Create a new PgInfractionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn count(
        &self,
        query: &InfractionQuery,
        search: Option<&InfractionSearch>,
    ) -> RepoResult<i64> {
        let mut builder = scoped("SELECT COUNT(*)", query, search);
        let count = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(count)
    }
}

#[async_trait]
impl InfractionRepository for PgInfractionRepository {
    #[instrument(skip(self), fields(guild_id = %query.guild_id))]
    async fn query(&self, query: &InfractionQuery) -> RepoResult<InfractionPage> {
        let total = self.count(query, None).await?;
        let filtered = match &query.search {
            Some(search) => self.count(query, Some(search)).await?,
            None => total,
        };

        let mut builder = scoped(ROW_COLUMNS, query, query.search.as_ref());
        builder.push(order_clause(query));
        builder.push(" LIMIT ");
        builder.push_bind(query.limit);
        builder.push(" OFFSET ");
        builder.push_bind(query.offset);

        let rows = builder
            .build_query_as::<InfractionRowModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(InfractionPage {
            total,
            filtered,
            rows: rows.into_iter().map(InfractionEntry::from).collect(),
        })
    }
}
