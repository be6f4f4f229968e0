//! Geo-document backend for the gazetteer POI collection.
//!
//! Documents live in an append-only JSON-lines log replayed at open (or
//! purely in memory for tests), with an R-tree as the named spatial index.
//! The collection is owned by a dedicated worker thread; all access goes
//! through [`GeoStore`], whose calls carry a bounded timeout so an
//! unresponsive store surfaces as a connectivity failure instead of a hang.

mod collection;
mod connection;
mod document;
mod index;
mod store;

pub mod error;

pub use collection::GEO_INDEX_NAME;
pub use connection::DEFAULT_CALL_TIMEOUT;
pub use error::{Error, Result};
pub use store::GeoStore;
