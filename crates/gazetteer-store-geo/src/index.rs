//! R-tree index over document locations.
//!
//! The tree prunes by bounding box in degree space; callers refine the
//! surviving candidates with a great-circle distance check, so the envelope
//! only has to over-approximate, never miss.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use gazetteer_core::geo::GeoPoint;

/// A document's location plus its position in the collection — the unit the
/// R-tree stores.
#[derive(Debug, Clone, Copy)]
pub struct IndexedLocation {
  pub seq: usize,
  pub lon: f64,
  pub lat: f64,
}

impl IndexedLocation {
  pub fn new(seq: usize, location: GeoPoint) -> Self {
    Self {
      seq,
      lon: location.longitude(),
      lat: location.latitude(),
    }
  }
}

impl RTreeObject for IndexedLocation {
  type Envelope = AABB<[f64; 2]>;

  fn envelope(&self) -> Self::Envelope {
    AABB::from_point([self.lon, self.lat])
  }
}

impl PointDistance for IndexedLocation {
  fn distance_2(&self, point: &[f64; 2]) -> f64 {
    let dlon = self.lon - point[0];
    let dlat = self.lat - point[1];
    dlon * dlon + dlat * dlat
  }
}

/// A named spatial index over the collection.
pub struct SpatialIndex {
  tree: RTree<IndexedLocation>,
}

impl SpatialIndex {
  /// Build from all current documents at once.
  pub fn bulk(locations: Vec<IndexedLocation>) -> Self {
    Self {
      tree: RTree::bulk_load(locations),
    }
  }

  /// Keep the live index in step with a newly appended document.
  pub fn insert(&mut self, location: IndexedLocation) {
    self.tree.insert(location);
  }

  /// Sequence numbers of documents whose location falls inside the search
  /// envelope around `center`. Over-approximates the radius; refine with a
  /// geodesic distance check.
  pub fn candidates(&self, center: GeoPoint, radius_meters: f64) -> Vec<usize> {
    let envelope = search_envelope(center, radius_meters);
    self
      .tree
      .locate_in_envelope_intersecting(&envelope)
      .map(|l| l.seq)
      .collect()
  }
}

/// Metres per degree of latitude (and of longitude at the equator).
const METERS_PER_DEGREE: f64 = 111_320.0;

/// Bounding box guaranteed to contain every point within `radius_meters` of
/// `center`. The longitude extent widens toward the poles; at extreme
/// latitudes it degrades to the full range, which only costs extra
/// refinement work.
fn search_envelope(center: GeoPoint, radius_meters: f64) -> AABB<[f64; 2]> {
  let dlat = radius_meters / METERS_PER_DEGREE;
  let cos_lat = center.latitude().to_radians().cos().abs().max(1e-6);
  let dlon = (radius_meters / (METERS_PER_DEGREE * cos_lat)).min(180.0);
  AABB::from_corners(
    [center.longitude() - dlon, center.latitude() - dlat],
    [center.longitude() + dlon, center.latitude() + dlat],
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  fn point(lon: f64, lat: f64) -> GeoPoint { GeoPoint::new(lon, lat).unwrap() }

  #[test]
  fn candidates_keep_near_and_drop_far() {
    let index = SpatialIndex::bulk(vec![
      IndexedLocation::new(0, point(-34.8610, -7.1153)),
      IndexedLocation::new(1, point(-35.8810, -7.2220)),
    ]);

    let found = index.candidates(point(-34.8785, -7.1197), 5_000.0);
    assert_eq!(found, vec![0]);
  }

  #[test]
  fn envelope_never_undershoots_the_radius() {
    // 10 km at 60°N: one degree of longitude is only ~55 km, so the
    // envelope must stretch wider than the equatorial ~0.09°.
    let envelope = search_envelope(point(10.0, 60.0), 10_000.0);
    let width = envelope.upper()[0] - envelope.lower()[0];
    assert!(width > 0.35, "width {width} too narrow for 10 km at 60°N");
  }
}
