//! SQLite backend for the gazetteer location hierarchy.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated
//! thread without blocking the async runtime.

mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteHierarchy;

#[cfg(test)]
mod tests;
