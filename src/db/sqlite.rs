// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! SQLite-backed storage.
//!
//! A single `kv` table holds one row per storage key; the value column is
//! the whole serialized collection blob, rewritten wholesale on every
//! mutation. Two processes open on the same database are last-writer-wins;
//! there is no cross-process notification.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use crate::db::{StorageBackend, StorageError};

const SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS kv (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
)";

/// Durable key/value storage over SQLite.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Open (or create) the database at `path`.
    ///
    /// Missing parent directories are created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.execute(SCHEMA_SQL, [])?;
        tracing::debug!(path = %path.display(), "Opened local storage");
        Ok(Self { conn })
    }

    /// Open an in-memory database (contents discarded on drop).
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory()?;
        conn.execute(SCHEMA_SQL, [])?;
        Ok(Self { conn })
    }
}

impl StorageBackend for SqliteStorage {
    fn get(&self, key: &str) -> Option<String> {
        let result = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional();

        match result {
            Ok(value) => value,
            Err(err) => {
                // Unreadable storage degrades to "nothing stored" at load.
                tracing::warn!(key, error = %err, "Storage read failed");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get() {
        let mut storage = SqliteStorage::open_in_memory().unwrap();
        storage.set("k", "[1,2,3]").unwrap();
        assert_eq!(storage.get("k").as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn test_get_absent_key() {
        let storage = SqliteStorage::open_in_memory().unwrap();
        assert_eq!(storage.get("missing"), None);
    }

    #[test]
    fn test_overwrite_is_wholesale() {
        let mut storage = SqliteStorage::open_in_memory().unwrap();
        storage.set("k", "old").unwrap();
        storage.set("k", "new").unwrap();
        assert_eq!(storage.get("k").as_deref(), Some("new"));
    }

    #[test]
    fn test_reopen_preserves_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.db");

        {
            let mut storage = SqliteStorage::open(&path).unwrap();
            storage.set("k", "persisted").unwrap();
        }

        let storage = SqliteStorage::open(&path).unwrap();
        assert_eq!(storage.get("k").as_deref(), Some("persisted"));
    }

    #[test]
    fn test_open_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("store.db");
        let storage = SqliteStorage::open(&path).unwrap();
        assert_eq!(storage.get("k"), None);
        assert!(path.exists());
    }
}
