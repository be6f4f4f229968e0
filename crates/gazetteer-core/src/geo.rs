//! Geographic primitives shared by the stores and the proximity engine.
//!
//! Coordinates follow the GeoJSON convention throughout: longitude first,
//! latitude second. Constructors validate ranges, so an out-of-range point
//! is unrepresentable downstream of this module.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ─── GeoPoint ────────────────────────────────────────────────────────────────

/// A validated geographic point in decimal degrees.
///
/// Fields are private; [`GeoPoint::new`] is the only way to build one. The
/// serde representation is a two-element `[longitude, latitude]` array, so a
/// stored geometry deserialises through the same range checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(f64, f64)", into = "(f64, f64)")]
pub struct GeoPoint {
  longitude: f64,
  latitude:  f64,
}

impl GeoPoint {
  /// Build a point from `(longitude, latitude)` in decimal degrees.
  pub fn new(longitude: f64, latitude: f64) -> Result<Self> {
    if !(-180.0..=180.0).contains(&longitude) {
      return Err(Error::LongitudeOutOfRange(longitude));
    }
    if !(-90.0..=90.0).contains(&latitude) {
      return Err(Error::LatitudeOutOfRange(latitude));
    }
    Ok(Self { longitude, latitude })
  }

  pub fn longitude(&self) -> f64 { self.longitude }

  pub fn latitude(&self) -> f64 { self.latitude }
}

impl TryFrom<(f64, f64)> for GeoPoint {
  type Error = Error;

  fn try_from((longitude, latitude): (f64, f64)) -> Result<Self> {
    Self::new(longitude, latitude)
  }
}

impl From<GeoPoint> for (f64, f64) {
  fn from(p: GeoPoint) -> Self { (p.longitude, p.latitude) }
}

/// Great-circle distance between two points in metres, on a spherical earth
/// model.
pub fn geodesic_meters(a: GeoPoint, b: GeoPoint) -> f64 {
  use ::geo::HaversineDistance as _;

  let a = ::geo::Point::new(a.longitude, a.latitude);
  let b = ::geo::Point::new(b.longitude, b.latitude);
  a.haversine_distance(&b)
}

// ─── RadiusKm ────────────────────────────────────────────────────────────────

/// Smallest accepted proximity-search radius.
pub const MIN_RADIUS_KM: u32 = 1;
/// Largest accepted proximity-search radius.
pub const MAX_RADIUS_KM: u32 = 100;

/// A proximity-search radius in whole kilometres, bounded to a sane range.
///
/// Stores measure distance in metres; [`RadiusKm::meters`] is the single
/// place where that unit conversion happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadiusKm(u32);

impl RadiusKm {
  pub fn new(km: u32) -> Result<Self> {
    if !(MIN_RADIUS_KM..=MAX_RADIUS_KM).contains(&km) {
      return Err(Error::RadiusOutOfRange(km));
    }
    Ok(Self(km))
  }

  pub fn kilometers(self) -> u32 { self.0 }

  /// The store-facing value, in metres.
  pub fn meters(self) -> f64 { f64::from(self.0) * 1000.0 }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
