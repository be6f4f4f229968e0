//! The `HierarchyStore` and `PoiStore` traits and the idempotent-insert
//! outcome type.
//!
//! The traits are implemented by storage backends (`gazetteer-store-sqlite`,
//! `gazetteer-store-geo`). The proximity engine depends on these
//! abstractions, not on any concrete backend.
//!
//! All methods return `Send` futures so the traits can be used in
//! multi-threaded async runtimes.

use std::future::Future;

use crate::{
  geo::GeoPoint,
  hierarchy::{City, CityRow, Country, State},
  poi::{NewPoi, Poi},
};

// ─── Insert outcome ──────────────────────────────────────────────────────────

/// Outcome of an insert with dedup-on-conflict semantics.
///
/// Duplicate registration is an expected, benign action: it is reported as
/// an outcome (and logged by the store), never raised as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inserted<T> {
  /// A new row was written.
  Created(T),
  /// An equal row already existed; nothing was written.
  Existing(T),
}

impl<T> Inserted<T> {
  pub fn was_created(&self) -> bool { matches!(self, Self::Created(_)) }

  pub fn into_inner(self) -> T {
    match self {
      Self::Created(v) | Self::Existing(v) => v,
    }
  }
}

// ─── Hierarchy ───────────────────────────────────────────────────────────────

/// Abstraction over the relational country → state → city hierarchy.
pub trait HierarchyStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Insert a country by name. Re-inserting an existing name returns
  /// [`Inserted::Existing`] and leaves the table unchanged.
  fn insert_country<'a>(
    &'a self,
    name: &'a str,
  ) -> impl Future<Output = Result<Inserted<Country>, Self::Error>> + Send + 'a;

  /// Insert a state. The abbreviation is unique across all countries;
  /// re-inserting an existing abbreviation returns [`Inserted::Existing`].
  /// Fails if `country_id` does not exist.
  fn insert_state<'a>(
    &'a self,
    name: &'a str,
    abbreviation: &'a str,
    country_id: i64,
  ) -> impl Future<Output = Result<Inserted<State>, Self::Error>> + Send + 'a;

  /// Insert a city, deduplicated on the (name, state) pair. The same name
  /// under two different states yields two distinct rows. Fails if
  /// `state_id` does not exist.
  fn insert_city<'a>(
    &'a self,
    name: &'a str,
    state_id: i64,
  ) -> impl Future<Output = Result<Inserted<City>, Self::Error>> + Send + 'a;

  /// All countries, natural table order.
  fn list_countries(
    &self,
  ) -> impl Future<Output = Result<Vec<Country>, Self::Error>> + Send + '_;

  /// All states, natural table order.
  fn list_states(
    &self,
  ) -> impl Future<Output = Result<Vec<State>, Self::Error>> + Send + '_;

  /// All cities joined with their state's abbreviation, ordered by city
  /// name ascending (byte-wise, locale-insensitive).
  fn list_cities(
    &self,
  ) -> impl Future<Output = Result<Vec<CityRow>, Self::Error>> + Send + '_;
}

// ─── POIs ────────────────────────────────────────────────────────────────────

/// Abstraction over the geo-indexed document collection of POIs.
pub trait PoiStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Idempotently create the spatial index over POI locations. Safe to call
  /// on every startup and safe to race; never yields a second index.
  fn ensure_geo_index(
    &self,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Append a document and return it with its assigned id. The city name is
  /// recorded as given; the checked registration path lives in
  /// `gazetteer-proximity`.
  fn insert_poi(
    &self,
    poi: NewPoi,
  ) -> impl Future<Output = Result<Poi, Self::Error>> + Send + '_;

  /// All POIs whose city name equals `city` exactly. Order is whatever the
  /// collection yields; callers must not depend on it.
  fn find_by_city<'a>(
    &'a self,
    city: &'a str,
  ) -> impl Future<Output = Result<Vec<Poi>, Self::Error>> + Send + 'a;

  /// All POIs within `radius_meters` of `center`, ascending by great-circle
  /// distance; ties broken by insertion order.
  fn radius_query(
    &self,
    center: GeoPoint,
    radius_meters: f64,
  ) -> impl Future<Output = Result<Vec<Poi>, Self::Error>> + Send + '_;

  /// The whole collection, natural order.
  fn find_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Poi>, Self::Error>> + Send + '_;

  /// Total number of stored POIs.
  fn count(
    &self,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;

  /// Distinct city names present in the collection, sorted ascending.
  fn distinct_cities(
    &self,
  ) -> impl Future<Output = Result<Vec<String>, Self::Error>> + Send + '_;
}
