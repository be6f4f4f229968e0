//! Core types and trait definitions for the gazetteer place registry.
//!
//! This crate is deliberately free of database dependencies. Both storage
//! backends and the proximity engine depend on it; it depends on nothing
//! heavier than `serde` and the `geo` math crate.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod error;
pub mod geo;
pub mod hierarchy;
pub mod poi;
pub mod store;

pub use error::{Error, Result};
