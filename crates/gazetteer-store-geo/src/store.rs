//! [`GeoStore`] — the document-collection implementation of [`PoiStore`].

use std::{path::Path, time::Duration};

use uuid::Uuid;

use gazetteer_core::{
  geo::GeoPoint,
  poi::{NewPoi, Poi},
  store::PoiStore,
};

use crate::{
  Error, Result,
  collection::{Collection, GEO_INDEX_NAME},
  connection::{Connection, DEFAULT_CALL_TIMEOUT},
  document::PoiDocument,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// The POI collection handle.
///
/// Cloning is cheap — clones share the worker thread and its collection.
#[derive(Clone)]
pub struct GeoStore {
  conn: Connection,
}

impl GeoStore {
  /// Open (or create) a collection file at `path` with the default call
  /// timeout.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    Self::open_with_timeout(path, DEFAULT_CALL_TIMEOUT).await
  }

  /// Open (or create) a collection file at `path`; calls that take longer
  /// than `timeout` fail with a connectivity error.
  pub async fn open_with_timeout(
    path: impl AsRef<Path>,
    timeout: Duration,
  ) -> Result<Self> {
    let path = path.as_ref().to_owned();
    let collection = tokio::task::spawn_blocking(move || Collection::open(&path))
      .await
      .map_err(|e| Error::Connectivity(format!("open task failed: {e}")))??;
    Ok(Self {
      conn: Connection::spawn(collection, timeout),
    })
  }

  /// Open a collection with no backing file — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    Ok(Self {
      conn: Connection::spawn(Collection::in_memory(), DEFAULT_CALL_TIMEOUT),
    })
  }

  /// Names of the indexes currently registered on the collection.
  pub async fn index_names(&self) -> Result<Vec<String>> {
    self.conn.call(|collection| Ok(collection.index_names())).await
  }
}

// ─── PoiStore impl ───────────────────────────────────────────────────────────

impl PoiStore for GeoStore {
  type Error = Error;

  async fn ensure_geo_index(&self) -> Result<()> {
    let created = self
      .conn
      .call(|collection| Ok(collection.create_index(GEO_INDEX_NAME)))
      .await?;
    if created {
      tracing::info!(name = GEO_INDEX_NAME, "created spatial index");
    }
    Ok(())
  }

  async fn insert_poi(&self, poi: NewPoi) -> Result<Poi> {
    let poi = Poi {
      id:          Uuid::new_v4(),
      name:        poi.name,
      city:        poi.city,
      description: poi.description,
      location:    poi.location,
    };

    let doc = PoiDocument::from(poi.clone());
    self.conn.call(move |collection| collection.insert(doc)).await?;
    Ok(poi)
  }

  async fn find_by_city(&self, city: &str) -> Result<Vec<Poi>> {
    let city = city.to_owned();
    let docs = self
      .conn
      .call(move |collection| Ok(collection.find_by_city(&city)))
      .await?;
    Ok(docs.into_iter().map(Poi::from).collect())
  }

  async fn radius_query(
    &self,
    center: GeoPoint,
    radius_meters: f64,
  ) -> Result<Vec<Poi>> {
    let docs = self
      .conn
      .call(move |collection| collection.radius_query(center, radius_meters))
      .await?;
    Ok(docs.into_iter().map(Poi::from).collect())
  }

  async fn find_all(&self) -> Result<Vec<Poi>> {
    let docs = self.conn.call(|collection| Ok(collection.find_all())).await?;
    Ok(docs.into_iter().map(Poi::from).collect())
  }

  async fn count(&self) -> Result<u64> {
    self.conn.call(|collection| Ok(collection.len() as u64)).await
  }

  async fn distinct_cities(&self) -> Result<Vec<String>> {
    self.conn.call(|collection| Ok(collection.distinct_cities())).await
  }
}
