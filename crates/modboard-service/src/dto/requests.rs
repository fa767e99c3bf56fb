//! Request DTOs for API endpoints
//!
//! Query and form DTOs implement `Deserialize`, and `Validate` where a
//! field has bounds.

use std::collections::HashMap;

use modboard_core::query::MAX_ORDER_COLUMNS;
use serde::Deserialize;
use validator::Validate;

use crate::services::{ServiceError, ServiceResult};

// ============================================================================
// Config Requests
// ============================================================================

/// `?page=` on the configuration history listing
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ConfigHistoryQuery {
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: Option<i64>,
}

impl ConfigHistoryQuery {
    /// 1-based page number
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1)
    }
}

/// Configuration update payload (`data` form field or query parameter)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigUpdateRequest {
    /// YAML document
    pub data: Option<String>,
}

// ============================================================================
// Stats Requests
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageStatsQuery {
    pub mode: Option<String>,
}

// ============================================================================
// Infraction Table Requests
// ============================================================================

/// One `order[i][column]` / `order[i][dir]` pair as sent by the table widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderParam {
    pub column: String,
    pub dir: Option<String>,
}

/// Infraction table request decoded from bracketed query keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfractionTableRequest {
    pub draw: i64,
    pub start: i64,
    pub length: Option<i64>,
    pub order: Vec<OrderParam>,
    pub search: Option<String>,
}

impl InfractionTableRequest {
    /// Decode from a flat parameter map
    ///
    /// Order pairs are read from index 0 upward and stop at the first
    /// missing `order[i][column]`.
    pub fn from_params(params: &HashMap<String, String>) -> ServiceResult<Self> {
        let draw = parse_int(params, "draw")?.unwrap_or(0);
        let start = parse_int(params, "start")?.unwrap_or(0);
        if start < 0 {
            return Err(ServiceError::validation("start must not be negative"));
        }
        let length = parse_int(params, "length")?;

        let mut order = Vec::new();
        for idx in 0..MAX_ORDER_COLUMNS {
            let Some(column) = params.get(&format!("order[{idx}][column]")) else {
                break;
            };
            order.push(OrderParam {
                column: column.clone(),
                dir: params.get(&format!("order[{idx}][dir]")).cloned(),
            });
        }

        let search = params
            .get("search[value]")
            .filter(|value| !value.is_empty())
            .cloned();

        Ok(Self {
            draw,
            start,
            length,
            order,
            search,
        })
    }
}

fn parse_int(params: &HashMap<String, String>, key: &str) -> ServiceResult<Option<i64>> {
    params
        .get(key)
        .map(|raw| {
            raw.trim()
                .parse::<i64>()
                .map_err(|_| ServiceError::validation(format!("{key} must be an integer")))
        })
        .transpose()
}
