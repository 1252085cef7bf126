// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Completion history model for storage.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::id::make_id;
use crate::models::exercise::{is_valid_exercise, Exercise};
use crate::models::routine::Routine;

/// An immutable record that a routine was finished at a specific time.
///
/// `routine_id` is a weak reference: it stays valid as a lookup key after
/// the routine is deleted, it just stops resolving. `routine_name` and the
/// optional `exercises` snapshot are frozen at completion time; renaming
/// or editing the routine later does not alter history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineCompletion {
    /// Globally unique identifier
    pub id: String,
    /// Id of the routine that was completed (weak reference)
    pub routine_id: String,
    /// Routine name as it was at completion time
    pub routine_name: String,
    /// Number of exercises at completion time
    #[serde(deserialize_with = "count")]
    pub exercise_count: u32,
    /// Full exercise snapshot; absent on records predating snapshotting
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercises: Option<Vec<Exercise>>,
    /// Completion timestamp (ISO 8601), also the collection sort key
    pub completed_at: String,
}

impl RoutineCompletion {
    /// Snapshot a finished run of `routine` at `completed_at`.
    pub fn snapshot(routine: &Routine, completed_at: String) -> Self {
        Self {
            id: make_id(),
            routine_id: routine.id.clone(),
            routine_name: routine.name.clone(),
            exercise_count: routine.exercises.len() as u32,
            exercises: Some(routine.exercises.clone()),
            completed_at,
        }
    }
}

// The validator admits any JSON number here; older records may carry a
// float, which truncates to a count.
fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value.is_finite() && value > 0.0 {
        Ok(value.trunc() as u32)
    } else {
        Ok(0)
    }
}

/// Structural validator for one raw completion record.
pub fn is_valid_completion(value: &Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };

    if !obj.get("id").is_some_and(Value::is_string) {
        return false;
    }
    if !obj.get("routineId").is_some_and(Value::is_string) {
        return false;
    }
    if !obj.get("routineName").is_some_and(Value::is_string) {
        return false;
    }
    if !obj.get("exerciseCount").is_some_and(Value::is_number) {
        return false;
    }
    if !obj.get("completedAt").is_some_and(Value::is_string) {
        return false;
    }

    match obj.get("exercises") {
        None => true,
        Some(Value::Array(exercises)) => exercises.iter().all(is_valid_exercise),
        Some(_) => false,
    }
}
