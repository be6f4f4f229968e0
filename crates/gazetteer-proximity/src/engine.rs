//! [`ProximityEngine`] — radius search against any [`PoiStore`].

use gazetteer_core::{
  geo::{GeoPoint, RadiusKm},
  poi::Poi,
  store::PoiStore,
};

use crate::{Error, Result};

/// Radius-search front end over a [`PoiStore`].
///
/// The public surface works in kilometres and takes latitude first (the
/// usual human convention); the store works in metres and longitude first.
/// Both conversions happen here, in exactly one place each.
#[derive(Clone)]
pub struct ProximityEngine<P> {
  store: P,
}

impl<P: PoiStore> ProximityEngine<P> {
  pub fn new(store: P) -> Self { Self { store } }

  /// All POIs within `radius` of `(latitude, longitude)`, nearest first —
  /// the store's ordering is passed through untouched.
  pub async fn find_nearby(
    &self,
    latitude: f64,
    longitude: f64,
    radius: RadiusKm,
  ) -> Result<Vec<Poi>> {
    let center = GeoPoint::new(longitude, latitude)?;
    self
      .store
      .radius_query(center, radius.meters())
      .await
      .map_err(Error::store)
  }
}
