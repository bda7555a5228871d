//! Ports - trait definitions for external dependencies.

mod store;

pub use store::PostStore;
