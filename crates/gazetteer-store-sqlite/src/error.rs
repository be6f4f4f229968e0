//! Error type for `gazetteer-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// Attempted to insert a state under a country id that does not exist.
  #[error("country not found: {0}")]
  CountryNotFound(i64),

  /// Attempted to insert a city under a state id that does not exist.
  #[error("state not found: {0}")]
  StateNotFound(i64),
}

impl Error {
  /// True when the failure is about reaching the database rather than the
  /// request itself. Callers degrade (disable hierarchy features) on these.
  pub fn is_connectivity(&self) -> bool {
    matches!(
      self,
      Self::Database(
        tokio_rusqlite::Error::ConnectionClosed | tokio_rusqlite::Error::Close(_)
      )
    )
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
