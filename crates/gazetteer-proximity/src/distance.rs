//! Great-circle distance helper.

use gazetteer_core::geo::{self, GeoPoint};

/// Geodesic distance between two points, in kilometres.
///
/// Symmetric, and zero exactly when both points coincide. By deliberate
/// relaxation an absent endpoint yields `0.0` rather than an error, for
/// callers that do not yet hold two valid points.
pub fn distance_km(a: Option<GeoPoint>, b: Option<GeoPoint>) -> f64 {
  match (a, b) {
    (Some(a), Some(b)) => geo::geodesic_meters(a, b) / 1000.0,
    _ => 0.0,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn point(lon: f64, lat: f64) -> GeoPoint { GeoPoint::new(lon, lat).unwrap() }

  /// João Pessoa city centre.
  fn jp() -> GeoPoint { point(-34.8785, -7.1197) }

  /// Recife city centre, ~104 km south.
  fn recife() -> GeoPoint { point(-34.8829, -8.0577) }

  #[test]
  fn zero_for_identical_points() {
    assert_eq!(distance_km(Some(jp()), Some(jp())), 0.0);
  }

  #[test]
  fn symmetric() {
    let there = distance_km(Some(jp()), Some(recife()));
    let back = distance_km(Some(recife()), Some(jp()));
    assert_eq!(there, back);
  }

  #[test]
  fn absent_endpoint_yields_zero_not_an_error() {
    assert_eq!(distance_km(None, Some(recife())), 0.0);
    assert_eq!(distance_km(Some(jp()), None), 0.0);
    assert_eq!(distance_km(None, None), 0.0);
  }

  #[test]
  fn joao_pessoa_to_recife_is_about_104_km() {
    let d = distance_km(Some(jp()), Some(recife()));
    assert!((d - 104.0).abs() <= 2.0, "got {d} km");
  }

  #[test]
  fn triangle_inequality_holds() {
    let campina = point(-35.8810, -7.2220);
    let direct = distance_km(Some(jp()), Some(recife()));
    let via = distance_km(Some(jp()), Some(campina))
      + distance_km(Some(campina), Some(recife()));
    assert!(direct <= via + 1e-9);
  }
}
