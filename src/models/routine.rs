// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Routine model for storage.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::exercise::{is_valid_exercise, Exercise};

/// A named, ordered template of exercises.
///
/// Exercise order is meaningful and defines run order. `id` and
/// `created_at` are immutable after creation; edits replace the rest of
/// the record wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Routine {
    /// Globally unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Ordered exercise list (may be empty in storage, never from drafts)
    pub exercises: Vec<Exercise>,
    /// Creation timestamp (ISO 8601), also the collection sort key
    pub created_at: String,
}

/// Structural validator for one raw routine record.
pub fn is_valid_routine(value: &Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };

    if !obj.get("id").is_some_and(Value::is_string) {
        return false;
    }
    if !obj.get("name").is_some_and(Value::is_string) {
        return false;
    }
    if !obj.get("createdAt").is_some_and(Value::is_string) {
        return false;
    }

    match obj.get("exercises") {
        Some(Value::Array(exercises)) => exercises.iter().all(is_valid_exercise),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_routine_value() -> Value {
        json!({
            "id": "r1",
            "name": "Upper body",
            "createdAt": "2024-01-01T00:00:00.000Z",
            "exercises": [
                {"id": "e1", "name": "Push-ups", "sets": 3},
                {"id": "e2", "name": "Rows", "imageUrls": ["exercises/rows.png"]},
            ],
        })
    }

    #[test]
    fn test_is_valid_routine_accepts() {
        assert!(is_valid_routine(&valid_routine_value()));
    }

    #[test]
    fn test_is_valid_routine_accepts_empty_exercises() {
        // Permitted in storage even though drafts cannot produce it.
        assert!(is_valid_routine(&json!({
            "id": "r1",
            "name": "Empty",
            "createdAt": "2024-01-01T00:00:00.000Z",
            "exercises": [],
        })));
    }

    #[test]
    fn test_is_valid_routine_rejects_missing_fields() {
        for key in ["id", "name", "createdAt", "exercises"] {
            let mut value = valid_routine_value();
            value.as_object_mut().unwrap().remove(key);
            assert!(!is_valid_routine(&value), "should reject missing {key}");
        }
    }

    #[test]
    fn test_is_valid_routine_rejects_bad_exercise() {
        let mut value = valid_routine_value();
        value["exercises"][0]["name"] = json!(42);
        assert!(!is_valid_routine(&value));
    }

    #[test]
    fn test_roundtrip_preserves_camel_case_wire_format() {
        let routine: Routine = serde_json::from_value(valid_routine_value()).unwrap();
        let back = serde_json::to_value(&routine).unwrap();
        assert_eq!(back["createdAt"], "2024-01-01T00:00:00.000Z");
        assert_eq!(back["exercises"][1]["imageUrls"][0], "exercises/rows.png");
    }
}
