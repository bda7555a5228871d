//! # Quill Infrastructure
//!
//! Concrete implementations of the `PostStore` port defined in `quill-core`,
//! plus database connection management.

pub mod database;
pub mod store;

pub use database::DatabaseConfig;
pub use store::{InMemoryPostStore, PostgresPostStore};
