//! [`SqliteHierarchy`] — the SQLite implementation of [`HierarchyStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use gazetteer_core::{
  hierarchy::{City, CityRow, Country, State},
  store::{HierarchyStore, Inserted},
};

use crate::{Error, Result, schema::SCHEMA};

// ─── Store ───────────────────────────────────────────────────────────────────

/// The location hierarchy backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. One
/// long-lived connection serves all operations; each operation is a single
/// `call` unit of work on the connection's thread.
#[derive(Clone)]
pub struct SqliteHierarchy {
  conn: tokio_rusqlite::Connection,
}

/// Did this statement fail on a UNIQUE constraint?
fn is_unique_violation(e: &rusqlite::Error) -> bool {
  matches!(
    e,
    rusqlite::Error::SqliteFailure(f, _)
      if f.code == rusqlite::ErrorCode::ConstraintViolation
  )
}

impl SqliteHierarchy {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── HierarchyStore impl ─────────────────────────────────────────────────────

impl HierarchyStore for SqliteHierarchy {
  type Error = Error;

  async fn insert_country(&self, name: &str) -> Result<Inserted<Country>> {
    let name = name.to_owned();

    let outcome = self
      .conn
      .call(move |conn| {
        let inserted = conn.execute(
          "INSERT INTO paises (nome) VALUES (?1)",
          rusqlite::params![name],
        );
        match inserted {
          Ok(_) => Ok(Inserted::Created(Country {
            id: conn.last_insert_rowid(),
            name,
          })),
          Err(e) if is_unique_violation(&e) => {
            let existing = conn.query_row(
              "SELECT id, nome FROM paises WHERE nome = ?1",
              rusqlite::params![name],
              |row| {
                Ok(Country {
                  id:   row.get(0)?,
                  name: row.get(1)?,
                })
              },
            )?;
            Ok(Inserted::Existing(existing))
          }
          Err(e) => Err(e.into()),
        }
      })
      .await?;

    if let Inserted::Existing(country) = &outcome {
      tracing::debug!(name = %country.name, "country already exists; insert skipped");
    }
    Ok(outcome)
  }

  async fn insert_state(
    &self,
    name: &str,
    abbreviation: &str,
    country_id: i64,
  ) -> Result<Inserted<State>> {
    let name = name.to_owned();
    let abbr = abbreviation.to_owned();

    let outcome: Option<Inserted<State>> = self
      .conn
      .call(move |conn| {
        let parent_exists: bool = conn
          .query_row(
            "SELECT 1 FROM paises WHERE id = ?1",
            rusqlite::params![country_id],
            |_| Ok(true),
          )
          .optional()?
          .unwrap_or(false);
        if !parent_exists {
          return Ok(None);
        }

        let inserted = conn.execute(
          "INSERT INTO estados (nome, sigla, id_pais) VALUES (?1, ?2, ?3)",
          rusqlite::params![name, abbr, country_id],
        );
        match inserted {
          Ok(_) => Ok(Some(Inserted::Created(State {
            id: conn.last_insert_rowid(),
            name,
            abbreviation: abbr,
            country_id,
          }))),
          Err(e) if is_unique_violation(&e) => {
            let existing = conn.query_row(
              "SELECT id, nome, sigla, id_pais FROM estados WHERE sigla = ?1",
              rusqlite::params![abbr],
              |row| {
                Ok(State {
                  id:           row.get(0)?,
                  name:         row.get(1)?,
                  abbreviation: row.get(2)?,
                  country_id:   row.get(3)?,
                })
              },
            )?;
            Ok(Some(Inserted::Existing(existing)))
          }
          Err(e) => Err(e.into()),
        }
      })
      .await?;

    let outcome = outcome.ok_or(Error::CountryNotFound(country_id))?;
    if let Inserted::Existing(state) = &outcome {
      tracing::debug!(
        abbreviation = %state.abbreviation,
        "state abbreviation already exists; insert skipped"
      );
    }
    Ok(outcome)
  }

  async fn insert_city(
    &self,
    name: &str,
    state_id: i64,
  ) -> Result<Inserted<City>> {
    let name = name.to_owned();

    let outcome: Option<Inserted<City>> = self
      .conn
      .call(move |conn| {
        let parent_exists: bool = conn
          .query_row(
            "SELECT 1 FROM estados WHERE id = ?1",
            rusqlite::params![state_id],
            |_| Ok(true),
          )
          .optional()?
          .unwrap_or(false);
        if !parent_exists {
          return Ok(None);
        }

        // Read-then-write dedup on the (name, state) pair.
        let existing: Option<City> = conn
          .query_row(
            "SELECT id, nome, id_estado FROM cidades
             WHERE nome = ?1 AND id_estado = ?2",
            rusqlite::params![name, state_id],
            |row| {
              Ok(City {
                id:       row.get(0)?,
                name:     row.get(1)?,
                state_id: row.get(2)?,
              })
            },
          )
          .optional()?;
        if let Some(city) = existing {
          return Ok(Some(Inserted::Existing(city)));
        }

        conn.execute(
          "INSERT INTO cidades (nome, id_estado) VALUES (?1, ?2)",
          rusqlite::params![name, state_id],
        )?;
        Ok(Some(Inserted::Created(City {
          id: conn.last_insert_rowid(),
          name,
          state_id,
        })))
      })
      .await?;

    let outcome = outcome.ok_or(Error::StateNotFound(state_id))?;
    if let Inserted::Existing(city) = &outcome {
      tracing::debug!(
        name = %city.name,
        state_id = city.state_id,
        "city already exists in this state; insert skipped"
      );
    }
    Ok(outcome)
  }

  async fn list_countries(&self) -> Result<Vec<Country>> {
    let rows = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare("SELECT id, nome FROM paises")?;
        let rows = stmt
          .query_map([], |row| {
            Ok(Country {
              id:   row.get(0)?,
              name: row.get(1)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }

  async fn list_states(&self) -> Result<Vec<State>> {
    let rows = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare("SELECT id, nome, sigla, id_pais FROM estados")?;
        let rows = stmt
          .query_map([], |row| {
            Ok(State {
              id:           row.get(0)?,
              name:         row.get(1)?,
              abbreviation: row.get(2)?,
              country_id:   row.get(3)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }

  async fn list_cities(&self) -> Result<Vec<CityRow>> {
    let rows = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT c.id, c.nome, e.sigla
           FROM cidades c JOIN estados e ON c.id_estado = e.id
           ORDER BY c.nome",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(CityRow {
              id:         row.get(0)?,
              name:       row.get(1)?,
              state_abbr: row.get(2)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }
}
