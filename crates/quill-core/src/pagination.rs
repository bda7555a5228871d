//! Pagination calculator - pure functions, no I/O.

/// Page size used when the client sends no limit.
pub const DEFAULT_LIMIT: i64 = 6;
/// Hard ceiling on the page size.
pub const MAX_LIMIT: i64 = 100;

/// Safe page/limit bounds derived from raw query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBounds {
    pub page: u64,
    pub limit: u64,
}

impl PageBounds {
    /// Clamp raw parameters: page floors at 1, limit is held to [1, 100]
    /// and defaults to 6.
    pub fn new(raw_page: Option<i64>, raw_limit: Option<i64>) -> Self {
        Self {
            page: raw_page.unwrap_or(1).max(1) as u64,
            limit: raw_limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT) as u64,
        }
    }

    /// Rows to skip before the requested page. Saturates and stays within
    /// i64 so an extreme page value cannot overflow or turn into a
    /// negative OFFSET bind.
    pub fn offset(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.limit)
            .min(i64::MAX as u64)
    }
}

/// Derived page indicators for the list response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub total_posts: u64,
    pub total_pages: u64,
    pub current_page: u64,
    pub limit: u64,
    pub next_page: Option<u64>,
    pub previous_page: Option<u64>,
}

impl PageInfo {
    /// Combine clamped bounds with the count-query result.
    pub fn from_total(bounds: &PageBounds, total: u64) -> Self {
        let offset = bounds.offset();
        Self {
            total_posts: total,
            total_pages: total.div_ceil(bounds.limit),
            current_page: bounds.page,
            limit: bounds.limit,
            next_page: (offset + bounds.limit < total).then(|| bounds.page + 1),
            previous_page: (offset > 0).then(|| bounds.page - 1),
        }
    }
}
