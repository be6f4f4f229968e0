//! Error type for `gazetteer-store-geo`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The collection worker could not be reached or did not answer within
  /// the call timeout.
  #[error("store unreachable: {0}")]
  Connectivity(String),

  /// A geo query was issued before the spatial index was created.
  #[error("no spatial index named {0:?}")]
  IndexMissing(&'static str),

  #[error("malformed document: {0}")]
  Document(#[from] serde_json::Error),

  #[error("i/o error: {0}")]
  Io(#[from] std::io::Error),
}

impl Error {
  /// True when the failure is about reaching the store rather than the
  /// request itself. Callers degrade (disable proximity features) on
  /// these instead of crashing.
  pub fn is_connectivity(&self) -> bool {
    matches!(self, Self::Connectivity(_))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
