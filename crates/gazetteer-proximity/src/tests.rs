//! Cross-store integration tests: the engine and the consistency bridge
//! running against real in-memory backends.

use gazetteer_core::{
  Error as CoreError,
  geo::{GeoPoint, RadiusKm},
  poi::NewPoi,
  store::{HierarchyStore, PoiStore},
};
use gazetteer_store_geo::GeoStore;
use gazetteer_store_sqlite::SqliteHierarchy;

use crate::{Error, ProximityEngine, consistency};

async fn hierarchy() -> SqliteHierarchy {
  let s = SqliteHierarchy::open_in_memory().await.unwrap();
  let br = s.insert_country("Brasil").await.unwrap().into_inner().id;
  let pb = s
    .insert_state("Paraíba", "PB", br)
    .await
    .unwrap()
    .into_inner()
    .id;
  let pe = s
    .insert_state("Pernambuco", "PE", br)
    .await
    .unwrap()
    .into_inner()
    .id;
  s.insert_city("João Pessoa", pb).await.unwrap();
  s.insert_city("Campina Grande", pb).await.unwrap();
  s.insert_city("Recife", pe).await.unwrap();
  s
}

async fn pois() -> GeoStore {
  let s = GeoStore::open_in_memory().await.unwrap();
  s.ensure_geo_index().await.unwrap();
  s
}

fn poi(name: &str, city: &str, lon: f64, lat: f64) -> NewPoi {
  NewPoi::new(name, city, GeoPoint::new(lon, lat).unwrap(), "").unwrap()
}

// ─── Engine ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn find_nearby_returns_only_pois_within_radius() {
  let store = pois().await;
  store
    .insert_poi(poi("Praça da Independência", "João Pessoa", -34.8610, -7.1153))
    .await
    .unwrap();
  store
    .insert_poi(poi("Açude Velho", "Campina Grande", -35.8810, -7.2220))
    .await
    .unwrap();

  let engine = ProximityEngine::new(store);
  let near = engine
    .find_nearby(-7.1197, -34.8785, RadiusKm::new(5).unwrap())
    .await
    .unwrap();

  let names: Vec<_> = near.iter().map(|p| p.name.as_str()).collect();
  assert_eq!(names, ["Praça da Independência"]);
}

#[tokio::test]
async fn radius_is_interpreted_in_kilometers() {
  let store = pois().await;
  // ~7.2 km north of the query point.
  store
    .insert_poi(poi("Mirante", "João Pessoa", -34.8785, -7.0550))
    .await
    .unwrap();

  let engine = ProximityEngine::new(store);

  let within_5 = engine
    .find_nearby(-7.1197, -34.8785, RadiusKm::new(5).unwrap())
    .await
    .unwrap();
  assert!(within_5.is_empty());

  let within_10 = engine
    .find_nearby(-7.1197, -34.8785, RadiusKm::new(10).unwrap())
    .await
    .unwrap();
  assert_eq!(within_10.len(), 1);
}

#[tokio::test]
async fn find_nearby_rejects_a_malformed_center() {
  let engine = ProximityEngine::new(pois().await);
  let result = engine
    .find_nearby(-91.0, -34.8785, RadiusKm::new(5).unwrap())
    .await;
  assert!(matches!(
    result,
    Err(Error::Core(CoreError::LatitudeOutOfRange(_)))
  ));
}

// ─── Consistency bridge ──────────────────────────────────────────────────────

#[tokio::test]
async fn register_poi_accepts_hierarchy_cities_only() {
  let h = hierarchy().await;
  let g = pois().await;

  let ok = consistency::register_poi(
    &h,
    &g,
    poi("Praça da Independência", "João Pessoa", -34.8610, -7.1153),
  )
  .await;
  assert!(ok.is_ok());

  let rejected = consistency::register_poi(
    &h,
    &g,
    poi("Praça fantasma", "Jampa", -34.8610, -7.1153),
  )
  .await;
  assert!(matches!(
    rejected,
    Err(Error::Core(CoreError::UnknownCity(city))) if city == "Jampa"
  ));

  // The rejected document never reached the collection.
  assert_eq!(g.count().await.unwrap(), 1);
}

#[tokio::test]
async fn check_reports_drift_in_both_directions() {
  let h = hierarchy().await;
  let g = pois().await;

  g.insert_poi(poi("Praça da Independência", "João Pessoa", -34.8610, -7.1153))
    .await
    .unwrap();
  // Free-text insert bypassing the checked path: an orphan in the making.
  g.insert_poi(poi("Praça fantasma", "Jampa", -34.8610, -7.1153))
    .await
    .unwrap();

  let report = consistency::check(&h, &g).await.unwrap();
  assert!(!report.is_consistent());
  assert_eq!(report.pois_with_unknown_city, ["Jampa"]);
  assert_eq!(
    report.cities_without_pois,
    ["Campina Grande", "Recife"]
  );
}

#[tokio::test]
async fn check_is_clean_when_every_poi_city_is_known() {
  let h = hierarchy().await;
  let g = pois().await;

  g.insert_poi(poi("Marco Zero", "Recife", -34.8711, -8.0631))
    .await
    .unwrap();

  let report = consistency::check(&h, &g).await.unwrap();
  assert!(report.is_consistent());
  assert_eq!(
    report.cities_without_pois,
    ["Campina Grande", "João Pessoa"]
  );
}
