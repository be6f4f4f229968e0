//! Cross-store consistency between hierarchy cities and POI city names.
//!
//! A POI records its city by value, not by key, so nothing in either store
//! stops the two from drifting apart. [`register_poi`] prevents new drift
//! by validating the city against the hierarchy before writing;
//! [`check`] detects drift that already happened.

use std::collections::BTreeSet;

use gazetteer_core::{
  poi::{NewPoi, Poi},
  store::{HierarchyStore, PoiStore},
};

use crate::{Error, Result};

/// Mismatches between the hierarchy's cities and the POI collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsistencyReport {
  /// Hierarchy cities no POI references. Benign.
  pub cities_without_pois:    Vec<String>,
  /// City names referenced by POIs but absent from the hierarchy. These
  /// POIs are orphaned: no hierarchy-sourced city filter will surface them.
  pub pois_with_unknown_city: Vec<String>,
}

impl ConsistencyReport {
  pub fn is_consistent(&self) -> bool {
    self.pois_with_unknown_city.is_empty()
  }
}

/// Diff the hierarchy's city names against the distinct city names present
/// in the POI collection.
pub async fn check<H, P>(hierarchy: &H, pois: &P) -> Result<ConsistencyReport>
where
  H: HierarchyStore,
  P: PoiStore,
{
  let known: BTreeSet<String> = hierarchy
    .list_cities()
    .await
    .map_err(Error::store)?
    .into_iter()
    .map(|c| c.name)
    .collect();

  let referenced: BTreeSet<String> = pois
    .distinct_cities()
    .await
    .map_err(Error::store)?
    .into_iter()
    .collect();

  Ok(ConsistencyReport {
    cities_without_pois:    known.difference(&referenced).cloned().collect(),
    pois_with_unknown_city: referenced.difference(&known).cloned().collect(),
  })
}

/// Insert a POI only if its city name is present in the hierarchy.
///
/// This is the write path registration UIs should use: the city comes from
/// the hierarchy's own list, so a free-text typo cannot orphan the POI. The
/// two stores still commit independently — a hierarchy row created moments
/// earlier stays committed even if this insert fails.
pub async fn register_poi<H, P>(
  hierarchy: &H,
  pois: &P,
  poi: NewPoi,
) -> Result<Poi>
where
  H: HierarchyStore,
  P: PoiStore,
{
  let cities = hierarchy.list_cities().await.map_err(Error::store)?;
  if !cities.iter().any(|c| c.name == poi.city) {
    return Err(Error::Core(gazetteer_core::Error::UnknownCity(poi.city)));
  }
  pois.insert_poi(poi).await.map_err(Error::store)
}
