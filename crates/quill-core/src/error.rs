//! Store-level error types.

use thiserror::Error;

/// Errors surfaced by a [`PostStore`](crate::ports::PostStore) implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Post not found")]
    NotFound,
}
