// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Create/edit form drafts and the routine build flow.

use validator::Validate;

use crate::error::AppError;
use crate::id::make_id;
use crate::models::exercise::Exercise;
use crate::models::routine::Routine;
use crate::time_utils::now_utc_rfc3339;

/// One editable exercise row in the create/edit form.
///
/// Rows keep a stable id so exercise identity survives an edit; image
/// input is a single URL (stored as a one-element list when non-empty).
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseDraft {
    pub id: String,
    pub name: String,
    pub image_url: String,
}

impl ExerciseDraft {
    /// A fresh, empty row.
    pub fn new() -> Self {
        Self {
            id: make_id(),
            name: String::new(),
            image_url: String::new(),
        }
    }

    /// A named row, optionally with a reference image.
    pub fn named(name: &str, image_url: Option<&str>) -> Self {
        Self {
            id: make_id(),
            name: name.to_string(),
            image_url: image_url.unwrap_or_default().to_string(),
        }
    }

    /// Row pre-filled from an existing exercise (edit flow).
    pub fn from_exercise(exercise: &Exercise) -> Self {
        Self {
            id: exercise.id.clone(),
            name: exercise.name.clone(),
            image_url: exercise
                .image_urls
                .as_ref()
                .and_then(|urls| urls.first())
                .cloned()
                .unwrap_or_default(),
        }
    }
}

impl Default for ExerciseDraft {
    fn default() -> Self {
        Self::new()
    }
}

/// The create/edit form state for a routine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoutineDraft {
    pub name: String,
    pub exercises: Vec<ExerciseDraft>,
}

/// Post-normalization shape the draft must satisfy before saving.
#[derive(Debug, Validate)]
struct NormalizedDraft {
    #[validate(length(min = 1, message = "Routine name is required."))]
    name: String,
    #[validate(length(min = 1, message = "Add at least one exercise."))]
    exercises: Vec<Exercise>,
}

impl RoutineDraft {
    /// Draft pre-filled from an existing routine (edit flow).
    pub fn from_routine(routine: &Routine) -> Self {
        Self {
            name: routine.name.clone(),
            exercises: routine
                .exercises
                .iter()
                .map(ExerciseDraft::from_exercise)
                .collect(),
        }
    }

    /// Build a saveable routine from the draft.
    ///
    /// Names are trimmed; unnamed exercise rows are dropped. A routine
    /// cannot be saved without a name and at least one named exercise.
    /// Building against `existing` preserves its id and creation
    /// timestamp; otherwise a new id is minted and the current time
    /// stamped.
    pub fn build(&self, existing: Option<&Routine>) -> Result<Routine, AppError> {
        let name = self.name.trim().to_string();

        let exercises: Vec<Exercise> = self
            .exercises
            .iter()
            .filter_map(|draft| {
                let exercise_name = draft.name.trim();
                if exercise_name.is_empty() {
                    return None;
                }
                Some(Exercise {
                    id: draft.id.clone(),
                    name: exercise_name.to_string(),
                    image_urls: normalize_image_urls(&draft.image_url),
                    sets: None,
                    reps: None,
                    weight: None,
                })
            })
            .collect();

        let normalized = NormalizedDraft {
            name: name.clone(),
            exercises,
        };
        normalized
            .validate()
            .map_err(|errors| AppError::Validation(first_message(&errors)))?;

        Ok(match existing {
            Some(routine) => Routine {
                id: routine.id.clone(),
                name,
                exercises: normalized.exercises,
                created_at: routine.created_at.clone(),
            },
            None => Routine {
                id: make_id(),
                name,
                exercises: normalized.exercises,
                created_at: now_utc_rfc3339(),
            },
        })
    }
}

fn normalize_image_urls(image_url: &str) -> Option<Vec<String>> {
    let trimmed = image_url.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(vec![trimmed.to_string()])
    }
}

fn first_message(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|list| list.iter())
        .filter_map(|error| error.message.as_ref())
        .map(|message| message.to_string())
        .next()
        .unwrap_or_else(|| "Invalid routine.".to_string())
}
