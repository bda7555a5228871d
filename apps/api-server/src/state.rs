//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::PostStore;
use quill_infra::DatabaseConfig;
use quill_infra::database;
use quill_infra::store::{InMemoryPostStore, PostgresPostStore};

/// Shared application state. The store is an injected port, never a
/// process-wide global.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostStore>,
}

impl AppState {
    /// Build the application state with the appropriate store.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        let posts: Arc<dyn PostStore> = match db_config {
            Some(config) => match database::connect(config).await {
                Ok(conn) => Arc::new(PostgresPostStore::new(conn)),
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Arc::new(InMemoryPostStore::new())
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Arc::new(InMemoryPostStore::new())
            }
        };

        tracing::info!("Application state initialized");

        Self { posts }
    }
}
