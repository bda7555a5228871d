//! # Quill Core
//!
//! The domain layer of the Quill post backend.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! the validation gate, the list query builder, and the pagination calculator.

pub mod domain;
pub mod error;
pub mod pagination;
pub mod ports;
pub mod query;

pub use error::StoreError;
