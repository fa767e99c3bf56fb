//! Query descriptions handed from services to repositories

mod infraction;

pub use infraction::{
    InfractionOrder, InfractionPage, InfractionQuery, InfractionSearch, InfractionSortKey,
    SortDirection, DEFAULT_PAGE_LENGTH, MAX_ORDER_COLUMNS, MAX_PAGE_LENGTH,
};

/// Fixed page size of the configuration history listing
pub const CONFIG_HISTORY_PAGE_SIZE: i64 = 25;
