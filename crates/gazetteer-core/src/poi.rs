//! Point-of-interest types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result, geo::GeoPoint};

/// A stored point of interest.
///
/// `city` is a name sourced from the hierarchy, recorded by value — there is
/// no key-level link between the two stores. The consistency checks in
/// `gazetteer-proximity` detect orphans after the fact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poi {
  pub id:          Uuid,
  pub name:        String,
  pub city:        String,
  pub description: String,
  pub location:    GeoPoint,
}

/// Input for a POI insert.
///
/// Built through [`NewPoi::new`] so required fields are checked before
/// anything reaches a store. The location is a mandatory, already-validated
/// [`GeoPoint`] — there is no "unset coordinate" sentinel.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPoi {
  pub name:        String,
  pub city:        String,
  pub description: String,
  pub location:    GeoPoint,
}

impl NewPoi {
  pub fn new(
    name: impl Into<String>,
    city: impl Into<String>,
    location: GeoPoint,
    description: impl Into<String>,
  ) -> Result<Self> {
    let name = name.into();
    let city = city.into();
    if name.trim().is_empty() {
      return Err(Error::MissingField("name"));
    }
    if city.trim().is_empty() {
      return Err(Error::MissingField("city"));
    }
    Ok(Self {
      name,
      city,
      description: description.into(),
      location,
    })
  }
}
