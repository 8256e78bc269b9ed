//! Local record store: whole-collection persistence over a key-value
//! interface.
//!
//! # Responsibility
//! - Provide the `get`/`set` key-value contract and its SQLite
//!   implementation.
//! - Provide the generic [`RecordStore`] that every screen persists its
//!   collection through.
//!
//! # Invariants
//! - A collection is always written as one JSON array value; `save`
//!   fully replaces the prior value.
//! - Reads of an absent key return an empty collection, never an error.
//! - There is no cross-key transaction and no locking; each screen is
//!   the single writer for its own key and the last write wins.

use crate::db::{migrations::latest_version, DbError};
use log::warn;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::marker::PhantomData;

/// Collection key for diary entries (unchanged from the shipped app).
pub const DIARY_COLLECTION: &str = "diaryEntries";
/// Collection key for community posts (unchanged from the shipped app).
pub const POSTS_COLLECTION: &str = "communityPosts";
/// Collection key for medication reminders (unchanged from the shipped
/// app).
pub const REMINDERS_COLLECTION: &str = "medicationReminders";

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence error for collection reads and writes.
#[derive(Debug)]
pub enum StoreError {
    /// Underlying database failure.
    Db(DbError),
    /// Stored value at `key` is not valid JSON for the collection type.
    CorruptData {
        key: String,
        source: serde_json::Error,
    },
    /// Collection could not be serialized for writing.
    Serialize(serde_json::Error),
    /// Connection has not been migrated to the supported schema version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Schema is missing a table this store requires.
    MissingRequiredTable(&'static str),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::CorruptData { key, source } => {
                write!(f, "corrupt collection data at key `{key}`: {source}")
            }
            Self::Serialize(err) => write!(f, "failed to serialize collection: {err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::CorruptData { source, .. } => Some(source),
            Self::Serialize(err) => Some(err),
            Self::UninitializedConnection { .. } | Self::MissingRequiredTable(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persistent key-value contract the record store is built on.
///
/// `get` returns the raw serialized value or `None` when the key was
/// never written; `set` fully replaces the value at the key.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;
}

/// SQLite-backed key-value store over the `collections` table.
pub struct SqliteKeyValueStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKeyValueStore<'conn> {
    /// Constructs a store from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        let actual_version =
            conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
        let expected_version = latest_version();
        if actual_version != expected_version {
            return Err(StoreError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }

        let table_present = conn
            .query_row(
                "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'collections';",
                [],
                |_| Ok(()),
            )
            .optional()?
            .is_some();
        if !table_present {
            return Err(StoreError::MissingRequiredTable("collections"));
        }

        Ok(Self { conn })
    }
}

impl KeyValueStore for SqliteKeyValueStore<'_> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM collections WHERE key = ?1;",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO collections (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT (key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }
}

/// In-memory key-value store for tests and scaffolding flows.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    values: HashMap<String, String>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Whole-collection store for one record type under one storage key.
///
/// Every mutation re-serializes the entire collection; there is no
/// per-record addressing at the storage layer.
pub struct RecordStore<T> {
    key: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Serialize + DeserializeOwned> RecordStore<T> {
    pub const fn new(key: &'static str) -> Self {
        Self {
            key,
            _marker: PhantomData,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Loads the full collection.
    ///
    /// # Contract
    /// - Absent key yields an empty collection.
    /// - Undecodable stored data yields [`StoreError::CorruptData`].
    pub fn load(&self, kv: &impl KeyValueStore) -> StoreResult<Vec<T>> {
        match kv.get(self.key)? {
            None => Ok(Vec::new()),
            Some(raw) => {
                serde_json::from_str(&raw).map_err(|source| StoreError::CorruptData {
                    key: self.key.to_string(),
                    source,
                })
            }
        }
    }

    /// Loads the full collection, degrading corrupt data to an empty
    /// collection after logging it.
    ///
    /// Database errors still propagate; only undecodable payloads are
    /// swallowed, matching the screens' no-crash recovery behavior.
    pub fn load_or_empty(&self, kv: &impl KeyValueStore) -> StoreResult<Vec<T>> {
        match self.load(kv) {
            Err(StoreError::CorruptData { key, source }) => {
                warn!(
                    "event=collection_load module=store status=corrupt key={key} error={source}"
                );
                Ok(Vec::new())
            }
            other => other,
        }
    }

    /// Serializes and writes the full collection, replacing the prior
    /// value at the key.
    pub fn save(&self, kv: &mut impl KeyValueStore, records: &[T]) -> StoreResult<()> {
        let payload = serde_json::to_string(records).map_err(StoreError::Serialize)?;
        kv.set(self.key, &payload)
    }
}
