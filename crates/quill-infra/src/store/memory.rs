//! In-memory post store - used as fallback when no database is configured,
//! and as the store fake in handler tests.
//!
//! Keeps category/status lookup maps so the inner-join semantics of the
//! Postgres store hold: a post whose category or status reference is
//! missing is excluded from list and read results.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use quill_core::domain::{Post, PostDraft};
use quill_core::error::StoreError;
use quill_core::pagination::PageBounds;
use quill_core::ports::PostStore;
use quill_core::query::ListFilter;

struct StoredPost {
    id: i32,
    draft: PostDraft,
    date: DateTime<Utc>,
    likes_count: i32,
}

#[derive(Default)]
struct Table {
    next_id: i32,
    rows: Vec<StoredPost>,
}

/// Post store over an async RwLock'd vector.
///
/// Note: data is lost on process restart.
pub struct InMemoryPostStore {
    categories: HashMap<i32, String>,
    statuses: HashMap<i32, String>,
    table: RwLock<Table>,
}

impl InMemoryPostStore {
    /// Store seeded with the default lookup rows.
    pub fn new() -> Self {
        Self::with_lookups(
            [
                (1, "General".to_string()),
                (2, "Tech".to_string()),
                (3, "Inspiration".to_string()),
            ],
            [(1, "Concept".to_string()), (2, "Published".to_string())],
        )
    }

    /// Store with explicit category and status lookup rows.
    pub fn with_lookups(
        categories: impl IntoIterator<Item = (i32, String)>,
        statuses: impl IntoIterator<Item = (i32, String)>,
    ) -> Self {
        Self {
            categories: categories.into_iter().collect(),
            statuses: statuses.into_iter().collect(),
            table: RwLock::new(Table {
                next_id: 1,
                rows: Vec::new(),
            }),
        }
    }

    /// Join the stored row against the lookup maps. A broken reference
    /// yields `None`, matching the Postgres inner joins.
    fn resolve(&self, stored: &StoredPost) -> Option<Post> {
        let category = self.categories.get(&stored.draft.category_id)?.clone();
        let status = self.statuses.get(&stored.draft.status_id)?.clone();

        Some(Post {
            id: stored.id,
            image: stored.draft.image.clone(),
            category,
            title: stored.draft.title.clone(),
            description: stored.draft.description.clone(),
            date: stored.date,
            content: stored.draft.content.clone(),
            status,
            likes_count: stored.likes_count,
        })
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

fn matches_filter(post: &Post, filter: &ListFilter) -> bool {
    fn contains(haystack: &str, needle: &str) -> bool {
        haystack.to_lowercase().contains(&needle.to_lowercase())
    }

    let category_ok = filter
        .category
        .as_deref()
        .map(|category| contains(&post.category, category))
        .unwrap_or(true);

    let keyword_ok = filter
        .keyword
        .as_deref()
        .map(|keyword| {
            contains(&post.title, keyword)
                || contains(&post.description, keyword)
                || contains(&post.content, keyword)
        })
        .unwrap_or(true);

    category_ok && keyword_ok
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn insert(&self, draft: &PostDraft) -> Result<(), StoreError> {
        let mut table = self.table.write().await;
        let id = table.next_id;
        table.next_id += 1;

        table.rows.push(StoredPost {
            id,
            draft: draft.clone(),
            date: Utc::now(),
            likes_count: 0,
        });
        Ok(())
    }

    async fn update(&self, id: i32, draft: &PostDraft) -> Result<(), StoreError> {
        let mut table = self.table.write().await;
        let row = table
            .rows
            .iter_mut()
            .find(|row| row.id == id)
            .ok_or(StoreError::NotFound)?;

        row.draft = draft.clone();
        row.date = Utc::now();
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        let mut table = self.table.write().await;
        let at = table
            .rows
            .iter()
            .position(|row| row.id == id)
            .ok_or(StoreError::NotFound)?;

        table.rows.remove(at);
        Ok(())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, StoreError> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .iter()
            .find(|row| row.id == id)
            .and_then(|row| self.resolve(row)))
    }

    async fn list(
        &self,
        filter: &ListFilter,
        bounds: &PageBounds,
    ) -> Result<(Vec<Post>, u64), StoreError> {
        let table = self.table.read().await;

        let mut matches: Vec<Post> = table
            .rows
            .iter()
            .filter_map(|row| self.resolve(row))
            .filter(|post| matches_filter(post, filter))
            .collect();

        // Date descending; ties broken by id so paging stays deterministic.
        matches.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));

        let total = matches.len() as u64;
        let page = matches
            .into_iter()
            .skip(bounds.offset() as usize)
            .take(bounds.limit as usize)
            .collect();

        Ok((page, total))
    }
}
