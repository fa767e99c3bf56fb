//! Message statistics aggregate row

use chrono::NaiveDateTime;
use sqlx::FromRow;

/// One time bucket of summed snapshot counters
#[derive(Debug, Clone, FromRow)]
pub struct MessageStatsBucketModel {
    pub bucket: NaiveDateTime,
    pub created: i64,
    pub updated: i64,
    pub deleted: i64,
    pub mentions: i64,
}
