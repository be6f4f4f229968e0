//! SQL schema for the hierarchy store.
//!
//! Executed once at connection startup. Table and column names are kept
//! byte-compatible with the legacy database layout so existing files stay
//! readable. Future migrations will be gated on `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// `busy_timeout` bounds how long any statement waits on a locked database
/// before failing instead of hanging.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;
PRAGMA busy_timeout = 3000;

CREATE TABLE IF NOT EXISTS paises (
    id   INTEGER PRIMARY KEY AUTOINCREMENT,
    nome TEXT NOT NULL UNIQUE
);

-- One abbreviation per table, not per country.
CREATE TABLE IF NOT EXISTS estados (
    id      INTEGER PRIMARY KEY AUTOINCREMENT,
    nome    TEXT NOT NULL,
    sigla   TEXT NOT NULL UNIQUE,
    id_pais INTEGER REFERENCES paises(id)
);

-- No unique constraint on (nome, id_estado); the store deduplicates with an
-- explicit read before the write.
CREATE TABLE IF NOT EXISTS cidades (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    nome      TEXT NOT NULL,
    id_estado INTEGER REFERENCES estados(id)
);

PRAGMA user_version = 1;
";
