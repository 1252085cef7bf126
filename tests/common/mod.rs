// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use progress_tracker::config::Config;
use progress_tracker::db::{shared, MemoryStorage, SharedStorage};
use progress_tracker::models::{ExerciseDraft, RoutineDraft};
use progress_tracker::router::MemoryLocation;
use progress_tracker::App;

/// Create a test app over fresh in-memory storage.
#[allow(dead_code)]
pub fn create_test_app() -> App<MemoryLocation> {
    create_test_app_on(shared(MemoryStorage::new()))
}

/// Create a test app over the given storage handle.
#[allow(dead_code)]
pub fn create_test_app_on(storage: SharedStorage) -> App<MemoryLocation> {
    let config = Config::test_default();
    let location = MemoryLocation::new("/");
    App::new(config, storage, location)
}

/// A draft with one named exercise per entry.
#[allow(dead_code)]
pub fn draft(name: &str, exercises: &[&str]) -> RoutineDraft {
    RoutineDraft {
        name: name.to_string(),
        exercises: exercises
            .iter()
            .map(|exercise| ExerciseDraft::named(exercise, None))
            .collect(),
    }
}
