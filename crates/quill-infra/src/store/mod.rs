//! `PostStore` implementations.

mod memory;
mod postgres;

pub use memory::InMemoryPostStore;
pub use postgres::PostgresPostStore;

#[cfg(test)]
mod tests;
