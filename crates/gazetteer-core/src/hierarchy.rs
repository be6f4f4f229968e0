//! The relational location hierarchy: country → state → city.
//!
//! Rows are created once and never updated or deleted. Parent links are
//! enforced by the relational schema; the POI side references cities by
//! name only (see the consistency module in `gazetteer-proximity`).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
  pub id:   i64,
  pub name: String,
}

/// A state or province.
///
/// `abbreviation` is unique across the whole table, not per country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
  pub id:           i64,
  pub name:         String,
  pub abbreviation: String,
  pub country_id:   i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
  pub id:       i64,
  pub name:     String,
  pub state_id: i64,
}

/// A city joined with its state's abbreviation, as returned by
/// [`HierarchyStore::list_cities`](crate::store::HierarchyStore::list_cities).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityRow {
  pub id:         i64,
  pub name:       String,
  pub state_abbr: String,
}
