use async_trait::async_trait;

use crate::domain::{Post, PostDraft};
use crate::error::StoreError;
use crate::pagination::PageBounds;
use crate::query::ListFilter;

/// Storage port for posts.
///
/// Handlers receive this as an injected `Arc<dyn PostStore>`; there is no
/// ambient pool handle. Implementations live in `quill-infra`.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Insert a new post from a validated draft; `date` defaults to now.
    async fn insert(&self, draft: &PostDraft) -> Result<(), StoreError>;

    /// Update all six draft columns by id and refresh `date` to now.
    /// Zero affected rows maps to [`StoreError::NotFound`].
    async fn update(&self, id: i32, draft: &PostDraft) -> Result<(), StoreError>;

    /// Delete by id. Zero affected rows maps to [`StoreError::NotFound`].
    async fn delete(&self, id: i32) -> Result<(), StoreError>;

    /// Fetch the joined read model by id.
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, StoreError>;

    /// Run the filtered, paginated list: one page of rows plus the total
    /// matching count across all pages.
    async fn list(
        &self,
        filter: &ListFilter,
        bounds: &PageBounds,
    ) -> Result<(Vec<Post>, u64), StoreError>;
}
