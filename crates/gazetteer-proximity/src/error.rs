//! Error type for `gazetteer-proximity`.

use thiserror::Error;

/// An error from the engine or the consistency bridge.
#[derive(Debug, Error)]
pub enum Error {
  /// Invalid input (coordinates, radius) or a rejected city reference.
  #[error("invalid request: {0}")]
  Core(#[from] gazetteer_core::Error),

  /// A failure inside one of the underlying stores.
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub(crate) fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
