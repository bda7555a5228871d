//! Response envelopes for the posts API.

use serde::{Deserialize, Serialize};

/// Plain `{message}` body used by mutations and error responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{data}` wrapper for single-entity reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

/// Paginated list envelope. `nextPage`/`previousPage` are omitted entirely
/// when there is no neighbouring page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub total_posts: u64,
    pub total_pages: u64,
    pub current_page: u64,
    pub limit: u64,
    pub posts: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_page: Option<u64>,
}
