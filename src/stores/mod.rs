// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persistent collection stores.
//!
//! Each store keeps an in-memory ordered collection byte-for-byte
//! consistent with a single serialized blob in local storage: mutations
//! apply in memory first and then rewrite the whole blob before
//! returning. Collections always read newest-first (descending by the
//! record's timestamp field, stable for ties).

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::db::{SharedStorage, StorageError};

pub mod completions;
pub mod routines;

pub use completions::CompletionStore;
pub use routines::RoutineStore;

/// A record type that lives in a persistent collection.
pub trait CollectionRecord: Serialize + DeserializeOwned + Clone {
    /// Versioned storage key for the whole collection blob.
    const STORAGE_KEY: &'static str;

    /// Unique identifier.
    fn id(&self) -> &str;

    /// Timestamp field the collection sorts descending by.
    fn sort_key(&self) -> &str;

    /// Structural validator for one raw record.
    fn is_valid(value: &Value) -> bool;

    /// Extract the record array from the persisted container shape.
    ///
    /// Container shapes differ per collection and are load-bearing for
    /// compatibility with existing persisted data.
    fn unwrap_container(parsed: Value) -> Option<Vec<Value>>;

    /// Serialize records back into the persisted container shape.
    fn encode_container(records: &[Self]) -> Result<String, serde_json::Error>;
}

/// Generic persistent collection over an injected storage capability.
pub struct CollectionStore<R: CollectionRecord> {
    storage: SharedStorage,
    records: Vec<R>,
}

impl<R: CollectionRecord> CollectionStore<R> {
    /// Load the collection from storage.
    ///
    /// An absent key, unparseable JSON, or an unexpected container shape
    /// all degrade to an empty collection; records failing the structural
    /// validator are dropped individually. Never raises.
    pub fn load(storage: SharedStorage) -> Self {
        let raw = storage.borrow().get(R::STORAGE_KEY);
        let records = match raw {
            None => Vec::new(),
            Some(raw) => Self::decode(&raw),
        };

        let mut store = Self { storage, records };
        store.sort();
        tracing::debug!(
            key = R::STORAGE_KEY,
            count = store.records.len(),
            "Loaded collection"
        );
        store
    }

    fn decode(raw: &str) -> Vec<R> {
        let parsed: Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key = R::STORAGE_KEY, error = %err, "Discarding unparseable blob");
                return Vec::new();
            }
        };

        let Some(items) = R::unwrap_container(parsed) else {
            tracing::warn!(key = R::STORAGE_KEY, "Discarding blob with unexpected shape");
            return Vec::new();
        };

        let total = items.len();
        let records: Vec<R> = items
            .into_iter()
            .filter(|item| R::is_valid(item))
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect();

        if records.len() < total {
            tracing::warn!(
                key = R::STORAGE_KEY,
                kept = records.len(),
                total,
                "Dropped records failing validation"
            );
        }
        records
    }

    // Stable, so records with equal timestamps keep their relative order.
    fn sort(&mut self) {
        self.records.sort_by(|a, b| b.sort_key().cmp(a.sort_key()));
    }

    /// Serialize the full collection back to its storage key.
    fn persist(&self) -> Result<(), StorageError> {
        let blob = R::encode_container(&self.records)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        self.storage.borrow_mut().set(R::STORAGE_KEY, &blob)
    }

    /// All records, newest first.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn find(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Replace the record with a matching id wholesale, or insert as new;
    /// either way the collection is re-sorted and persisted.
    pub(crate) fn upsert(&mut self, record: R) -> Result<(), StorageError> {
        match self
            .records
            .iter()
            .position(|existing| existing.id() == record.id())
        {
            Some(index) => self.records[index] = record,
            None => self.records.insert(0, record),
        }
        self.sort();
        self.persist()
    }

    /// Prepend a new record, re-sort, persist.
    pub(crate) fn add(&mut self, record: R) -> Result<(), StorageError> {
        self.records.insert(0, record);
        self.sort();
        self.persist()
    }

    /// Remove the record with a matching id; a no-op if none matches.
    pub(crate) fn remove(&mut self, id: &str) -> Result<(), StorageError> {
        self.records.retain(|record| record.id() != id);
        self.persist()
    }
}
