// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Routine collection store.

use serde_json::Value;

use crate::db::{keys, SharedStorage, StorageError};
use crate::models::routine::{is_valid_routine, Routine};
use crate::stores::{CollectionRecord, CollectionStore};

impl CollectionRecord for Routine {
    const STORAGE_KEY: &'static str = keys::ROUTINES;

    fn id(&self) -> &str {
        &self.id
    }

    fn sort_key(&self) -> &str {
        &self.created_at
    }

    fn is_valid(value: &Value) -> bool {
        is_valid_routine(value)
    }

    // Routines persist as a bare JSON array.
    fn unwrap_container(parsed: Value) -> Option<Vec<Value>> {
        match parsed {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    fn encode_container(records: &[Self]) -> Result<String, serde_json::Error> {
        serde_json::to_string(records)
    }
}

/// Persistent routine collection, newest first.
pub struct RoutineStore {
    inner: CollectionStore<Routine>,
}

impl RoutineStore {
    /// Load routines from storage (empty on absent or unreadable data).
    pub fn load(storage: SharedStorage) -> Self {
        Self {
            inner: CollectionStore::load(storage),
        }
    }

    /// All routines, newest first.
    pub fn routines(&self) -> &[Routine] {
        self.inner.records()
    }

    pub fn find(&self, routine_id: &str) -> Option<&Routine> {
        self.inner.find(routine_id)
    }

    /// Replace an existing routine wholesale or insert a new one.
    pub fn upsert(&mut self, routine: Routine) -> Result<(), StorageError> {
        self.inner.upsert(routine)
    }

    /// Delete a routine. Completions referencing it are left alone.
    pub fn remove(&mut self, routine_id: &str) -> Result<(), StorageError> {
        self.inner.remove(routine_id)
    }
}
