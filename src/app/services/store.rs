//! SQLite-backed farm store
//!
//! The store exclusively owns persisted farm records. It is constructed
//! explicitly (open-before-serve) and injected into every consumer; there is
//! no module-level connection state. Ids and timestamps are assigned here on
//! insertion and are immutable afterwards.
//!
//! Schema-level CHECK constraints enforce coordinate ranges and positive
//! capacity, so a candidate that slips past caller-side validation is still
//! rejected per-row rather than silently persisted.

use crate::app::models::{FarmRecord, NewFarm};
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info};
use uuid::Uuid;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS farms (
    id          TEXT PRIMARY KEY,
    name        TEXT NOT NULL,
    country     TEXT NOT NULL,
    latitude    REAL NOT NULL CHECK (latitude BETWEEN -90 AND 90),
    longitude   REAL NOT NULL CHECK (longitude BETWEEN -180 AND 180),
    capacity    REAL NOT NULL CHECK (capacity > 0),
    production  REAL NOT NULL,
    operator    TEXT NOT NULL DEFAULT '',
    created_at  TEXT NOT NULL,
    updated_at  TEXT NOT NULL
);
";

/// Result of a best-effort bulk insert
///
/// Individual row failures never abort the batch and nothing is rolled back;
/// callers get the itemized outcome instead of a boolean.
#[derive(Debug, Clone, Default)]
pub struct BulkInsertOutcome {
    /// Number of records actually persisted
    pub inserted: usize,
    /// Per-record failures, in batch order
    pub failures: Vec<InsertFailure>,
}

/// One record the store rejected during a bulk insert
#[derive(Debug, Clone)]
pub struct InsertFailure {
    /// Position of the record in the submitted batch
    pub index: usize,
    /// Farm name, for the import report
    pub name: String,
    /// Store-level failure message
    pub message: String,
}

/// Persistent collection of farm records
///
/// Wraps a single SQLite connection behind a mutex; the request model is
/// single-threaded-per-operation and no operation holds the lock across I/O
/// it does not own.
#[derive(Debug)]
pub struct FarmStore {
    conn: Mutex<Connection>,
}

impl FarmStore {
    /// Open (or create) the store at the given path and ensure the schema
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| Error::io("failed to create database directory", e))?;
            }
        }

        let conn = Connection::open(path)
            .map_err(|e| Error::database(format!("failed to open {}", path.display()), Some(e)))?;
        conn.execute_batch(SCHEMA)
            .map_err(|e| Error::database("failed to initialize schema", Some(e)))?;

        info!("Farm store opened at {}", path.display());
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory store, used by tests
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| Error::database("failed to open in-memory database", Some(e)))?;
        conn.execute_batch(SCHEMA)
            .map_err(|e| Error::database("failed to initialize schema", Some(e)))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| Error::database("store connection mutex poisoned", None))
    }

    /// Insert a single farm, assigning id and timestamps
    pub fn insert(&self, farm: &NewFarm) -> Result<FarmRecord> {
        let conn = self.conn()?;
        insert_with_conn(&conn, farm)
    }

    /// Insert a batch of farms, unordered best-effort
    ///
    /// Every candidate is attempted; a record failing the store's own
    /// constraints does not abort insertion of the others.
    pub fn insert_many(&self, farms: &[NewFarm]) -> Result<BulkInsertOutcome> {
        let conn = self.conn()?;
        let mut outcome = BulkInsertOutcome::default();

        for (index, farm) in farms.iter().enumerate() {
            match insert_with_conn(&conn, farm) {
                Ok(_) => outcome.inserted += 1,
                Err(error) => {
                    debug!("Bulk insert rejected '{}': {}", farm.name, error);
                    outcome.failures.push(InsertFailure {
                        index,
                        name: farm.name.clone(),
                        message: error.to_string(),
                    });
                }
            }
        }

        Ok(outcome)
    }

    /// Fetch a farm by id
    pub fn get(&self, id: &str) -> Result<Option<FarmRecord>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, country, latitude, longitude, capacity, production, operator,
                    created_at, updated_at
             FROM farms WHERE id = ?1",
        )?;

        let mut rows = stmt.query_map(params![id], row_to_record)?;
        match rows.next() {
            Some(record) => Ok(Some(record?)),
            None => Ok(None),
        }
    }

    /// Fetch every farm in the store's natural return order
    pub fn list_all(&self) -> Result<Vec<FarmRecord>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, country, latitude, longitude, capacity, production, operator,
                    created_at, updated_at
             FROM farms",
        )?;

        let records = stmt
            .query_map([], row_to_record)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(records)
    }

    /// Delete a farm by id
    ///
    /// Idempotent: returns whether a matching record existed. Deleting an
    /// unknown id is a successful no-op, never an error.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let conn = self.conn()?;
        let affected = conn.execute("DELETE FROM farms WHERE id = ?1", params![id])?;
        Ok(affected > 0)
    }

    /// Number of farms currently persisted
    pub fn count(&self) -> Result<u64> {
        let conn = self.conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM farms", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}

fn insert_with_conn(conn: &Connection, farm: &NewFarm) -> Result<FarmRecord> {
    let id = Uuid::new_v4().to_string();
    let now = Utc::now();

    conn.execute(
        "INSERT INTO farms (id, name, country, latitude, longitude, capacity, production,
                            operator, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            id,
            farm.name,
            farm.country,
            farm.latitude,
            farm.longitude,
            farm.capacity,
            farm.production,
            farm.operator,
            now.to_rfc3339(),
            now.to_rfc3339(),
        ],
    )
    .map_err(|e| Error::database(format!("failed to insert farm '{}'", farm.name), Some(e)))?;

    Ok(FarmRecord {
        id,
        name: farm.name.clone(),
        country: farm.country.clone(),
        latitude: farm.latitude,
        longitude: farm.longitude,
        capacity: farm.capacity,
        production: farm.production,
        operator: farm.operator.clone(),
        created_at: now,
        updated_at: now,
    })
}

fn row_to_record(row: &rusqlite::Row<'_>) -> rusqlite::Result<FarmRecord> {
    Ok(FarmRecord {
        id: row.get(0)?,
        name: row.get(1)?,
        country: row.get(2)?,
        latitude: row.get(3)?,
        longitude: row.get(4)?,
        capacity: row.get(5)?,
        production: row.get(6)?,
        operator: row.get(7)?,
        created_at: parse_timestamp(row, 8)?,
        updated_at: parse_timestamp(row, 9)?,
    })
}

fn parse_timestamp(row: &rusqlite::Row<'_>, index: usize) -> rusqlite::Result<DateTime<Utc>> {
    let raw: String = row.get(index)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(index, rusqlite::types::Type::Text, Box::new(e))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, latitude: f64) -> NewFarm {
        NewFarm {
            name: name.to_string(),
            country: "Albania".to_string(),
            latitude,
            longitude: 19.8,
            capacity: 50.0,
            production: 125.0,
            operator: String::new(),
        }
    }

    #[test]
    fn test_insert_assigns_id_and_timestamps() {
        let store = FarmStore::open_in_memory().unwrap();
        let record = store.insert(&candidate("Vlora Wind", 41.3)).unwrap();

        assert!(!record.id.is_empty());
        assert_eq!(record.created_at, record.updated_at);

        let fetched = store.get(&record.id).unwrap().unwrap();
        assert_eq!(fetched, record);
    }

    #[test]
    fn test_get_unknown_id_returns_none() {
        let store = FarmStore::open_in_memory().unwrap();
        assert!(store.get("no-such-id").unwrap().is_none());
    }

    #[test]
    fn test_delete_is_idempotent() {
        let store = FarmStore::open_in_memory().unwrap();
        let record = store.insert(&candidate("Vlora Wind", 41.3)).unwrap();

        assert!(store.delete(&record.id).unwrap());
        assert!(!store.delete(&record.id).unwrap());
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_bulk_insert_survives_row_failures() {
        let store = FarmStore::open_in_memory().unwrap();

        // Second candidate violates the latitude CHECK constraint; the store
        // must reject it without aborting its siblings.
        let batch = vec![
            candidate("Good One", 41.3),
            candidate("Bad Latitude", 120.0),
            candidate("Good Two", 42.0),
        ];

        let outcome = store.insert_many(&batch).unwrap();
        assert_eq!(outcome.inserted, 2);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].index, 1);
        assert_eq!(outcome.failures[0].name, "Bad Latitude");
        assert_eq!(store.count().unwrap(), 2);
    }

    #[test]
    fn test_list_all_returns_every_record() {
        let store = FarmStore::open_in_memory().unwrap();
        store.insert(&candidate("A", 41.0)).unwrap();
        store.insert(&candidate("B", 42.0)).unwrap();

        let farms = store.list_all().unwrap();
        assert_eq!(farms.len(), 2);
    }
}
