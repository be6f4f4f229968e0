//! Error types for `gazetteer-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("longitude {0} out of range [-180, 180]")]
  LongitudeOutOfRange(f64),

  #[error("latitude {0} out of range [-90, 90]")]
  LatitudeOutOfRange(f64),

  #[error("missing required field: {0}")]
  MissingField(&'static str),

  #[error("search radius {0} km outside supported range 1..=100 km")]
  RadiusOutOfRange(u32),

  #[error("country not found: {0}")]
  CountryNotFound(i64),

  #[error("state not found: {0}")]
  StateNotFound(i64),

  #[error("city not present in the hierarchy: {0:?}")]
  UnknownCity(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
