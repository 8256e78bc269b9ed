//! SQLite storage bootstrap for the on-device database.
//!
//! # Responsibility
//! - Open file or in-memory connections for Amparo core.
//! - Apply schema migrations before handing out a usable connection.
//!
//! # Invariants
//! - Applied migration version is tracked via `PRAGMA user_version`.
//! - Returned connections always have the full schema in place.

use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::Instant;

pub mod migrations;

use migrations::apply_migrations;

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl std::fmt::Display for DbError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "database schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl std::error::Error for DbError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Opens the on-device database file and applies pending migrations.
///
/// # Side effects
/// - Emits `db_open` log events with duration and status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let started_at = Instant::now();
    let result = Connection::open(path)
        .map_err(DbError::from)
        .and_then(bootstrap);
    log_open_outcome("file", started_at, &result);
    result
}

/// Opens an in-memory database and applies pending migrations.
///
/// Used by tests and scaffolding flows that must not touch the device
/// filesystem.
pub fn open_db_in_memory() -> DbResult<Connection> {
    let started_at = Instant::now();
    let result = Connection::open_in_memory()
        .map_err(DbError::from)
        .and_then(bootstrap);
    log_open_outcome("memory", started_at, &result);
    result
}

fn bootstrap(mut conn: Connection) -> DbResult<Connection> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(std::time::Duration::from_secs(5))?;
    apply_migrations(&mut conn)?;
    Ok(conn)
}

fn log_open_outcome(mode: &str, started_at: Instant, result: &DbResult<Connection>) {
    let duration_ms = started_at.elapsed().as_millis();
    match result {
        Ok(_) => info!("event=db_open module=db status=ok mode={mode} duration_ms={duration_ms}"),
        Err(err) => error!(
            "event=db_open module=db status=error mode={mode} duration_ms={duration_ms} error={err}"
        ),
    }
}
