//! On-disk document shape for the POI collection.
//!
//! Field names are kept byte-compatible with the legacy collection layout
//! (`nome_local`, `cidade`, `descricao`, `coordenadas`) so existing data
//! files stay readable. Geometry is a GeoJSON point: coordinates are
//! `[longitude, latitude]`, in that order.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gazetteer_core::{geo::GeoPoint, poi::Poi};

/// The only geometry kind this collection stores.
pub const POINT_TYPE: &str = "Point";

/// GeoJSON `Point` geometry.
///
/// `GeoPoint` serialises as a two-element `[longitude, latitude]` array, so
/// the wire shape is exactly `{"type":"Point","coordinates":[lon,lat]}` and
/// deserialisation goes through the coordinate range checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoJsonPoint {
  #[serde(rename = "type")]
  pub kind:        String,
  pub coordinates: GeoPoint,
}

impl From<GeoPoint> for GeoJsonPoint {
  fn from(p: GeoPoint) -> Self {
    Self {
      kind:        POINT_TYPE.to_owned(),
      coordinates: p,
    }
  }
}

/// One stored POI document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoiDocument {
  #[serde(rename = "_id")]
  pub id:          Uuid,
  #[serde(rename = "nome_local")]
  pub name:        String,
  #[serde(rename = "cidade")]
  pub city:        String,
  #[serde(rename = "descricao", default)]
  pub description: String,
  #[serde(rename = "coordenadas")]
  pub location:    GeoJsonPoint,
}

impl From<Poi> for PoiDocument {
  fn from(poi: Poi) -> Self {
    Self {
      id:          poi.id,
      name:        poi.name,
      city:        poi.city,
      description: poi.description,
      location:    poi.location.into(),
    }
  }
}

impl From<PoiDocument> for Poi {
  fn from(doc: PoiDocument) -> Self {
    Self {
      id:          doc.id,
      name:        doc.name,
      city:        doc.city,
      description: doc.description,
      location:    doc.location.coordinates,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn document_round_trips_with_legacy_field_names() {
    let poi = Poi {
      id:          Uuid::new_v4(),
      name:        "Praça da Independência".to_owned(),
      city:        "João Pessoa".to_owned(),
      description: "Praça central".to_owned(),
      location:    GeoPoint::new(-34.8610, -7.1153).unwrap(),
    };

    let doc = PoiDocument::from(poi.clone());
    let json = serde_json::to_value(&doc).unwrap();

    assert_eq!(json["nome_local"], "Praça da Independência");
    assert_eq!(json["cidade"], "João Pessoa");
    assert_eq!(json["descricao"], "Praça central");
    assert_eq!(json["coordenadas"]["type"], "Point");
    // Longitude first; a swap here would corrupt every spatial query.
    assert_eq!(json["coordenadas"]["coordinates"][0], -34.8610);
    assert_eq!(json["coordenadas"]["coordinates"][1], -7.1153);

    let back: PoiDocument = serde_json::from_value(json).unwrap();
    assert_eq!(Poi::from(back), poi);
  }
}
