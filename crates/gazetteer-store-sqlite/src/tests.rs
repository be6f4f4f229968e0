//! Integration tests for `SqliteHierarchy` against an in-memory database.

use gazetteer_core::store::{HierarchyStore, Inserted};

use crate::{Error, SqliteHierarchy};

async fn store() -> SqliteHierarchy {
  SqliteHierarchy::open_in_memory()
    .await
    .expect("in-memory store")
}

/// Seed one country and return its id.
async fn brazil(s: &SqliteHierarchy) -> i64 {
  s.insert_country("Brasil").await.unwrap().into_inner().id
}

// ─── Countries ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_country_twice_is_idempotent() {
  let s = store().await;

  let first = s.insert_country("Brasil").await.unwrap();
  assert!(first.was_created());

  let second = s.insert_country("Brasil").await.unwrap();
  assert!(!second.was_created());
  assert_eq!(second.into_inner().id, first.into_inner().id);

  let all = s.list_countries().await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].name, "Brasil");
}

#[tokio::test]
async fn distinct_countries_both_stored() {
  let s = store().await;
  s.insert_country("Brasil").await.unwrap();
  s.insert_country("Argentina").await.unwrap();

  assert_eq!(s.list_countries().await.unwrap().len(), 2);
}

// ─── States ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_state_twice_is_idempotent() {
  let s = store().await;
  let br = brazil(&s).await;

  let first = s.insert_state("Paraíba", "PB", br).await.unwrap();
  assert!(first.was_created());

  let second = s.insert_state("Paraíba", "PB", br).await.unwrap();
  assert!(!second.was_created());

  assert_eq!(s.list_states().await.unwrap().len(), 1);
}

#[tokio::test]
async fn state_abbreviation_unique_across_countries() {
  let s = store().await;
  let br = brazil(&s).await;
  let ar = s
    .insert_country("Argentina")
    .await
    .unwrap()
    .into_inner()
    .id;

  s.insert_state("Paraíba", "PB", br).await.unwrap();
  // Same abbreviation under a different country is still a duplicate.
  let dup = s.insert_state("Provincia B", "PB", ar).await.unwrap();
  assert!(!dup.was_created());
  assert_eq!(dup.into_inner().country_id, br);

  assert_eq!(s.list_states().await.unwrap().len(), 1);
}

#[tokio::test]
async fn insert_state_unknown_country_is_rejected() {
  let s = store().await;

  let result = s.insert_state("Paraíba", "PB", 42).await;
  assert!(matches!(result, Err(Error::CountryNotFound(42))));
  assert!(s.list_states().await.unwrap().is_empty());
}

// ─── Cities ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn city_dedup_within_state() {
  let s = store().await;
  let br = brazil(&s).await;
  let pb = s
    .insert_state("Paraíba", "PB", br)
    .await
    .unwrap()
    .into_inner()
    .id;

  let first = s.insert_city("João Pessoa", pb).await.unwrap();
  assert!(first.was_created());

  let second = s.insert_city("João Pessoa", pb).await.unwrap();
  assert!(!second.was_created());
  assert_eq!(second.into_inner().id, first.into_inner().id);

  assert_eq!(s.list_cities().await.unwrap().len(), 1);
}

#[tokio::test]
async fn same_city_name_under_two_states_is_two_rows() {
  let s = store().await;
  let br = brazil(&s).await;
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

  assert!(s.insert_city("Boa Vista", pb).await.unwrap().was_created());
  assert!(s.insert_city("Boa Vista", pe).await.unwrap().was_created());

  assert_eq!(s.list_cities().await.unwrap().len(), 2);
}

#[tokio::test]
async fn insert_city_unknown_state_is_rejected() {
  let s = store().await;

  let result = s.insert_city("João Pessoa", 7).await;
  assert!(matches!(result, Err(Error::StateNotFound(7))));
  assert!(s.list_cities().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_cities_joins_state_abbreviation_and_orders_by_name() {
  let s = store().await;
  let br = brazil(&s).await;
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

  s.insert_city("Recife", pe).await.unwrap();
  s.insert_city("Campina Grande", pb).await.unwrap();
  s.insert_city("João Pessoa", pb).await.unwrap();

  let cities = s.list_cities().await.unwrap();
  let names: Vec<_> = cities.iter().map(|c| c.name.as_str()).collect();
  assert_eq!(names, ["Campina Grande", "João Pessoa", "Recife"]);

  assert_eq!(cities[0].state_abbr, "PB");
  assert_eq!(cities[2].state_abbr, "PE");
}
