// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod completion;
pub mod draft;
pub mod exercise;
pub mod routine;

pub use completion::{is_valid_completion, RoutineCompletion};
pub use draft::{ExerciseDraft, RoutineDraft};
pub use exercise::{is_valid_exercise, Exercise, ExerciseMeta};
pub use routine::{is_valid_routine, Routine};
