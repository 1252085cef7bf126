// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Completion history store.

use serde::Serialize;
use serde_json::Value;

use crate::db::{keys, SharedStorage, StorageError};
use crate::models::completion::{is_valid_completion, RoutineCompletion};
use crate::stores::{CollectionRecord, CollectionStore};

/// The persisted container shape for the completions key.
#[derive(Serialize)]
struct StorageShape<'a> {
    completions: &'a [RoutineCompletion],
}

impl CollectionRecord for RoutineCompletion {
    const STORAGE_KEY: &'static str = keys::COMPLETIONS;

    fn id(&self) -> &str {
        &self.id
    }

    fn sort_key(&self) -> &str {
        &self.completed_at
    }

    fn is_valid(value: &Value) -> bool {
        is_valid_completion(value)
    }

    // Completions persist wrapped in an object, unlike routines' bare
    // array. The asymmetry is load-bearing for existing persisted data.
    fn unwrap_container(parsed: Value) -> Option<Vec<Value>> {
        match parsed {
            Value::Object(mut obj) => match obj.remove("completions") {
                Some(Value::Array(items)) => Some(items),
                _ => None,
            },
            _ => None,
        }
    }

    fn encode_container(records: &[Self]) -> Result<String, serde_json::Error> {
        serde_json::to_string(&StorageShape {
            completions: records,
        })
    }
}

/// Persistent completion history, newest first.
pub struct CompletionStore {
    inner: CollectionStore<RoutineCompletion>,
}

impl CompletionStore {
    /// Load completions from storage (empty on absent or unreadable data).
    pub fn load(storage: SharedStorage) -> Self {
        Self {
            inner: CollectionStore::load(storage),
        }
    }

    /// All completions, newest first.
    pub fn completions(&self) -> &[RoutineCompletion] {
        self.inner.records()
    }

    pub fn find(&self, completion_id: &str) -> Option<&RoutineCompletion> {
        self.inner.find(completion_id)
    }

    /// History for one routine, in collection (newest-first) order.
    pub fn for_routine(&self, routine_id: &str) -> Vec<&RoutineCompletion> {
        self.inner
            .records()
            .iter()
            .filter(|completion| completion.routine_id == routine_id)
            .collect()
    }

    /// Record a new completion. Completions are never updated in place.
    pub fn add(&mut self, completion: RoutineCompletion) -> Result<(), StorageError> {
        self.inner.add(completion)
    }

    pub fn remove(&mut self, completion_id: &str) -> Result<(), StorageError> {
        self.inner.remove(completion_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{shared, MemoryStorage};

    fn completion(id: &str, routine_id: &str, completed_at: &str) -> RoutineCompletion {
        RoutineCompletion {
            id: id.to_string(),
            routine_id: routine_id.to_string(),
            routine_name: "Legs".to_string(),
            exercise_count: 3,
            exercises: None,
            completed_at: completed_at.to_string(),
        }
    }

    #[test]
    fn test_add_keeps_newest_first() {
        let mut store = CompletionStore::load(shared(MemoryStorage::new()));
        store.add(completion("c1", "r1", "2024-01-01T00:00:00.000Z")).unwrap();
        store.add(completion("c2", "r1", "2024-03-01T00:00:00.000Z")).unwrap();
        store.add(completion("c3", "r1", "2024-02-01T00:00:00.000Z")).unwrap();

        let ids: Vec<&str> = store.completions().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["c2", "c3", "c1"]);
    }

    #[test]
    fn test_for_routine_filters_weak_references() {
        let mut store = CompletionStore::load(shared(MemoryStorage::new()));
        store.add(completion("c1", "r1", "2024-01-01T00:00:00.000Z")).unwrap();
        store.add(completion("c2", "r2", "2024-02-01T00:00:00.000Z")).unwrap();
        store.add(completion("c3", "r1", "2024-03-01T00:00:00.000Z")).unwrap();

        let history: Vec<&str> = store.for_routine("r1").iter().map(|c| c.id.as_str()).collect();
        assert_eq!(history, vec!["c3", "c1"]);
    }

    #[test]
    fn test_persists_wrapped_in_object() {
        let storage = shared(MemoryStorage::new());
        let mut store = CompletionStore::load(storage.clone());
        store.add(completion("c1", "r1", "2024-01-01T00:00:00.000Z")).unwrap();

        let raw = storage.borrow().get(keys::COMPLETIONS).unwrap();
        let parsed: Value = serde_json::from_str(&raw).unwrap();
        assert!(parsed.is_object());
        assert_eq!(parsed["completions"].as_array().unwrap().len(), 1);
    }
}
