// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Data access layer.
//!
//! This module holds the tune document store. Documents live in a single
//! SQLite table; the Hub only ever sees them through the [`TuneStore`] trait,
//! which is implemented for [`rusqlite::Connection`].
//!
//! # Tables
//!
//! * `tunes` - One row per tune document, keyed by its tune id.
//!
//! # Performance
//!
//! Queries use [`rusqlite::Connection::prepare_cached`] to reduce SQL parsing
//! overhead, search runs on every pause in typing.

pub(crate) mod import;
mod model;

use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension, params};

use crate::model::{TuneDocument, TuneList};

const TUNE_COLUMNS: &str = "tune_id, vehicle_name, signature, engine_make, engine_code, \
     displacement, cylinders_count, aspiration, year, updated_at";

/// Access to tune documents.
pub(crate) trait TuneStore {
    /// Finds tunes matching `query`, or every tune when `query` is `None`.
    ///
    /// Matching is a case-insensitive substring search over the vehicle name,
    /// signature, engine make and engine code. Results are newest first.
    fn search_tunes(&self, query: Option<&str>) -> Result<TuneList>;

    fn fetch_tune(&self, tune_id: &str) -> Result<Option<TuneDocument>>;

    /// Inserts or replaces documents, returning how many were written.
    fn upsert_tunes(&mut self, documents: &[TuneDocument]) -> Result<usize>;
}

/// Opens a connection to the SQLite database and configures performance
/// settings.
///
/// This function performs the following setup:
/// * **WAL Mode**: Enables Write-Ahead Logging so the store can be updated
///   while the Hub is reading.
/// * **Performance Tuning**: Sets synchronous mode to `NORMAL`.
/// * **Schema**: Executes [`create_schema`] to ensure the table and indices
///   exist.
///
/// # Errors
///
/// Returns an error if:
/// * The database file cannot be opened.
/// * The initial PRAGMA configurations fail.
/// * The schema initialization fails.
pub(crate) fn init_db(path: &str) -> Result<Connection> {
    let conn = Connection::open(path).with_context(|| format!("Failed to open database {}", path))?;

    let journal_mode: String = conn.query_row("PRAGMA journal_mode = WAL", [], |r| r.get(0))?;
    if journal_mode != "wal" {
        anyhow::bail!(
            "Failed to switch to WAL mode. Current mode: {}",
            journal_mode
        );
    }

    conn.execute_batch("PRAGMA synchronous = NORMAL;")?;
    conn.set_prepared_statement_cache_capacity(16);

    create_schema(&conn)?;

    Ok(conn)
}

/// Create the database schema.
///
/// Wrapped in a single transaction so the schema is updated atomically.
pub(crate) fn create_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "BEGIN;

        CREATE TABLE IF NOT EXISTS tunes (
            tune_id TEXT PRIMARY KEY NOT NULL,
            vehicle_name TEXT COLLATE NOCASE,
            signature TEXT NOT NULL DEFAULT '' COLLATE NOCASE,
            engine_make TEXT NOT NULL DEFAULT '' COLLATE NOCASE,
            engine_code TEXT NOT NULL DEFAULT '' COLLATE NOCASE,
            displacement REAL,
            cylinders_count INTEGER,
            aspiration TEXT NOT NULL DEFAULT '',
            year INTEGER,
            updated_at INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_tunes_updated_at ON tunes (updated_at);

        COMMIT;",
    )
    .context("Failed to create schema")
}

/// Escapes `LIKE` wildcards so the user's text is matched literally.
fn like_pattern(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len() + 2);
    escaped.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

impl TuneStore for Connection {
    fn search_tunes(&self, query: Option<&str>) -> Result<TuneList> {
        let query = query.map(str::trim).filter(|q| !q.is_empty());

        let documents = match query {
            Some(query) => {
                let sql = format!(
                    "SELECT {TUNE_COLUMNS}
                     FROM tunes
                     WHERE vehicle_name LIKE ?1 ESCAPE '\\'
                        OR signature LIKE ?1 ESCAPE '\\'
                        OR engine_make LIKE ?1 ESCAPE '\\'
                        OR engine_code LIKE ?1 ESCAPE '\\'
                     ORDER BY updated_at DESC, tune_id"
                );
                let mut stmt = self.prepare_cached(&sql)?;
                let rows = stmt
                    .query_map([like_pattern(query)], TuneDocument::from_row)?
                    .collect::<Result<Vec<_>, _>>()?;
                rows
            }
            None => {
                let sql = format!(
                    "SELECT {TUNE_COLUMNS} FROM tunes ORDER BY updated_at DESC, tune_id"
                );
                let mut stmt = self.prepare_cached(&sql)?;
                let rows = stmt
                    .query_map([], TuneDocument::from_row)?
                    .collect::<Result<Vec<_>, _>>()?;
                rows
            }
        };

        Ok(TuneList { documents })
    }

    fn fetch_tune(&self, tune_id: &str) -> Result<Option<TuneDocument>> {
        let sql = format!("SELECT {TUNE_COLUMNS} FROM tunes WHERE tune_id = ?");
        let mut stmt = self.prepare_cached(&sql)?;
        let result = stmt
            .query_row([tune_id], TuneDocument::from_row)
            .optional()?;

        Ok(result)
    }

    fn upsert_tunes(&mut self, documents: &[TuneDocument]) -> Result<usize> {
        let tx = self.transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO tunes (tune_id, vehicle_name, signature, engine_make, engine_code,
                                    displacement, cylinders_count, aspiration, year, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
                 ON CONFLICT (tune_id) DO UPDATE SET
                    vehicle_name = excluded.vehicle_name,
                    signature = excluded.signature,
                    engine_make = excluded.engine_make,
                    engine_code = excluded.engine_code,
                    displacement = excluded.displacement,
                    cylinders_count = excluded.cylinders_count,
                    aspiration = excluded.aspiration,
                    year = excluded.year,
                    updated_at = excluded.updated_at",
            )?;

            for doc in documents {
                stmt.execute(params![
                    doc.tune_id,
                    doc.vehicle_name,
                    doc.signature,
                    doc.engine_make,
                    doc.engine_code,
                    doc.displacement,
                    doc.cylinders_count,
                    doc.aspiration,
                    doc.year,
                    doc.updated_at,
                ])?;
            }
        }
        tx.commit()?;

        Ok(documents.len())
    }
}
