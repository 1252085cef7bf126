// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Exercise value object, embedded in routines and completion snapshots.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single exercise within a routine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Identifier, unique within its routine
    pub id: String,
    /// Display name (non-empty after trimming in the draft flow)
    pub name: String,
    /// Reference image URLs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_urls: Option<Vec<String>>,
    /// Target sets
    #[serde(
        default,
        deserialize_with = "positive_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub sets: Option<u32>,
    /// Target reps per set
    #[serde(
        default,
        deserialize_with = "positive_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub reps: Option<u32>,
    /// Working weight
    #[serde(
        default,
        deserialize_with = "positive_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub weight: Option<f64>,
}

/// Sets/reps/weight replacement values for one exercise.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ExerciseMeta {
    pub sets: Option<u32>,
    pub reps: Option<u32>,
    pub weight: Option<f64>,
}

impl Exercise {
    /// Replace the sets/reps/weight fields wholesale.
    pub fn set_meta(&mut self, meta: ExerciseMeta) {
        self.sets = meta.sets;
        self.reps = meta.reps;
        self.weight = meta.weight;
    }
}

/// Normalize a numeric input to a strictly positive integer, or absent.
///
/// Zero, negative, and non-finite values are treated as unset; fractional
/// values are truncated.
pub fn normalize_positive_int(value: f64) -> Option<u32> {
    if !value.is_finite() {
        return None;
    }
    let truncated = value.trunc();
    if truncated > 0.0 && truncated <= f64::from(u32::MAX) {
        Some(truncated as u32)
    } else {
        None
    }
}

/// Normalize a numeric input to a strictly positive number, or absent.
pub fn normalize_positive_number(value: f64) -> Option<f64> {
    (value.is_finite() && value > 0.0).then_some(value)
}

fn positive_int<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.and_then(normalize_positive_int))
}

fn positive_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.and_then(normalize_positive_number))
}

/// Structural validator for one raw exercise record.
///
/// Checks required-field presence and primitive types, and optional-field
/// type-if-present. This predicate, not the Rust type, decides what counts
/// as a valid persisted record.
pub fn is_valid_exercise(value: &Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };

    if !obj.get("id").is_some_and(Value::is_string) {
        return false;
    }
    if !obj.get("name").is_some_and(Value::is_string) {
        return false;
    }

    for key in ["sets", "reps", "weight"] {
        if let Some(v) = obj.get(key) {
            if !v.is_number() {
                return false;
            }
        }
    }

    match obj.get("imageUrls") {
        None => true,
        Some(Value::Array(urls)) => urls.iter().all(Value::is_string),
        Some(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_valid_exercise_minimal() {
        assert!(is_valid_exercise(&json!({"id": "e1", "name": "Push-ups"})));
    }

    #[test]
    fn test_is_valid_exercise_full() {
        assert!(is_valid_exercise(&json!({
            "id": "e1",
            "name": "Push-ups",
            "imageUrls": ["exercises/pushups.png"],
            "sets": 3,
            "reps": 12,
            "weight": 20.5,
        })));
    }

    #[test]
    fn test_is_valid_exercise_rejects_wrong_types() {
        assert!(!is_valid_exercise(&json!({"id": 1, "name": "x"})));
        assert!(!is_valid_exercise(&json!({"id": "e1", "name": null})));
        assert!(!is_valid_exercise(&json!({"id": "e1", "name": "x", "sets": "3"})));
        assert!(!is_valid_exercise(&json!({"id": "e1", "name": "x", "imageUrls": "not-a-list"})));
        assert!(!is_valid_exercise(&json!({"id": "e1", "name": "x", "imageUrls": [1]})));
        assert!(!is_valid_exercise(&json!("not an object")));
    }

    #[test]
    fn test_deserialize_normalizes_non_positive_to_absent() {
        let ex: Exercise = serde_json::from_value(json!({
            "id": "e1",
            "name": "Push-ups",
            "sets": 0,
            "reps": -2,
            "weight": 0.0,
        }))
        .unwrap();
        assert_eq!(ex.sets, None);
        assert_eq!(ex.reps, None);
        assert_eq!(ex.weight, None);
    }

    #[test]
    fn test_deserialize_truncates_fractional_counts() {
        let ex: Exercise = serde_json::from_value(json!({
            "id": "e1",
            "name": "Push-ups",
            "sets": 2.9,
            "weight": 12.5,
        }))
        .unwrap();
        assert_eq!(ex.sets, Some(2));
        assert_eq!(ex.weight, Some(12.5));
    }

    #[test]
    fn test_serialize_skips_absent_fields() {
        let ex = Exercise {
            id: "e1".to_string(),
            name: "Push-ups".to_string(),
            image_urls: None,
            sets: None,
            reps: None,
            weight: None,
        };
        let value = serde_json::to_value(&ex).unwrap();
        assert_eq!(value, json!({"id": "e1", "name": "Push-ups"}));
    }

    #[test]
    fn test_normalize_positive_int() {
        assert_eq!(normalize_positive_int(3.0), Some(3));
        assert_eq!(normalize_positive_int(2.7), Some(2));
        assert_eq!(normalize_positive_int(0.5), None);
        assert_eq!(normalize_positive_int(0.0), None);
        assert_eq!(normalize_positive_int(-1.0), None);
        assert_eq!(normalize_positive_int(f64::INFINITY), None);
    }

    #[test]
    fn test_normalize_positive_number() {
        assert_eq!(normalize_positive_number(12.5), Some(12.5));
        assert_eq!(normalize_positive_number(0.0), None);
        assert_eq!(normalize_positive_number(-0.5), None);
        assert_eq!(normalize_positive_number(f64::NAN), None);
    }
}
