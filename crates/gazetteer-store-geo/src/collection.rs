//! The document collection the worker thread owns: documents in insertion
//! order, an optional append-only log, and a registry of named spatial
//! indexes.

use std::{
  collections::HashMap,
  fs::{File, OpenOptions},
  io::{BufRead as _, BufReader, Write as _},
  path::Path,
};

use gazetteer_core::geo::{GeoPoint, geodesic_meters};

use crate::{
  Error, Result,
  document::PoiDocument,
  index::{IndexedLocation, SpatialIndex},
};

/// Name of the one spatial index this collection carries. Name-stable so
/// repeated startups recognise it instead of creating a duplicate.
pub const GEO_INDEX_NAME: &str = "coordenadas_2dsphere";

pub struct Collection {
  docs:    Vec<PoiDocument>,
  log:     Option<File>,
  indexes: HashMap<String, SpatialIndex>,
}

impl Collection {
  /// Open (or create) a collection file at `path`, replaying one JSON
  /// document per line.
  pub fn open(path: &Path) -> Result<Self> {
    let mut docs = Vec::new();
    if path.exists() {
      let reader = BufReader::new(File::open(path)?);
      for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
          continue;
        }
        docs.push(serde_json::from_str(&line)?);
      }
    }

    let log = OpenOptions::new().create(true).append(true).open(path)?;

    Ok(Self {
      docs,
      log: Some(log),
      indexes: HashMap::new(),
    })
  }

  /// A collection with no backing file — useful for testing.
  pub fn in_memory() -> Self {
    Self {
      docs:    Vec::new(),
      log:     None,
      indexes: HashMap::new(),
    }
  }

  // ── Index registry ────────────────────────────────────────────────────

  /// Create the named index if absent, bulk-loading it from the current
  /// documents. Returns whether anything was created.
  pub fn create_index(&mut self, name: &str) -> bool {
    if self.indexes.contains_key(name) {
      return false;
    }
    let locations = self
      .docs
      .iter()
      .enumerate()
      .map(|(seq, doc)| IndexedLocation::new(seq, doc.location.coordinates))
      .collect();
    self.indexes.insert(name.to_owned(), SpatialIndex::bulk(locations));
    true
  }

  pub fn index_names(&self) -> Vec<String> {
    let mut names: Vec<String> = self.indexes.keys().cloned().collect();
    names.sort();
    names
  }

  // ── Writes ────────────────────────────────────────────────────────────

  /// Append a document to the log and the in-memory collection, keeping
  /// every live index in step. The log write is acknowledged before the
  /// document becomes visible.
  pub fn insert(&mut self, doc: PoiDocument) -> Result<()> {
    if let Some(log) = self.log.as_mut() {
      let line = serde_json::to_string(&doc)?;
      writeln!(log, "{line}")?;
      log.flush()?;
    }

    let seq = self.docs.len();
    let location = IndexedLocation::new(seq, doc.location.coordinates);
    for index in self.indexes.values_mut() {
      index.insert(location);
    }
    self.docs.push(doc);
    Ok(())
  }

  // ── Reads ─────────────────────────────────────────────────────────────

  pub fn find_by_city(&self, city: &str) -> Vec<PoiDocument> {
    self.docs.iter().filter(|d| d.city == city).cloned().collect()
  }

  pub fn find_all(&self) -> Vec<PoiDocument> { self.docs.clone() }

  pub fn len(&self) -> usize { self.docs.len() }

  pub fn distinct_cities(&self) -> Vec<String> {
    let mut cities: Vec<String> =
      self.docs.iter().map(|d| d.city.clone()).collect();
    cities.sort();
    cities.dedup();
    cities
  }

  /// Two-phase radius query: R-tree bounding-box pruning, then geodesic
  /// refinement. Results ascend by distance from `center`; ties keep
  /// insertion order.
  pub fn radius_query(
    &self,
    center: GeoPoint,
    radius_meters: f64,
  ) -> Result<Vec<PoiDocument>> {
    let index = self
      .indexes
      .get(GEO_INDEX_NAME)
      .ok_or(Error::IndexMissing(GEO_INDEX_NAME))?;

    let mut hits: Vec<(f64, usize)> = index
      .candidates(center, radius_meters)
      .into_iter()
      .map(|seq| {
        let distance =
          geodesic_meters(center, self.docs[seq].location.coordinates);
        (distance, seq)
      })
      .filter(|(distance, _)| *distance <= radius_meters)
      .collect();

    hits.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

    Ok(hits.into_iter().map(|(_, seq)| self.docs[seq].clone()).collect())
  }
}
