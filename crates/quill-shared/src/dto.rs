//! Data Transfer Objects - query-string parameters for the API.

use serde::{Deserialize, Serialize};

/// Query parameters accepted by `GET /posts`. All optional; page and limit
/// are clamped server-side, blank filter values are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListParams {
    pub category: Option<String>,
    pub keyword: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}
