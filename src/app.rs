// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared application state and composite flows.
//!
//! Owns the two collection stores and the router; the shell (CLI, tests)
//! only reads store values and calls the flows here.

use crate::config::Config;
use crate::db::SharedStorage;
use crate::error::{AppError, Result};
use crate::models::{ExerciseMeta, Routine, RoutineCompletion, RoutineDraft};
use crate::router::{Location, Route, Router};
use crate::stores::{CompletionStore, RoutineStore};
use crate::time_utils::now_utc_rfc3339;

/// Shared application state.
pub struct App<L: Location> {
    pub config: Config,
    pub routines: RoutineStore,
    pub completions: CompletionStore,
    pub router: Router<L>,
}

impl<L: Location> App<L> {
    /// Load both collections and derive the initial route.
    pub fn new(config: Config, storage: SharedStorage, location: L) -> Self {
        let routines = RoutineStore::load(storage.clone());
        let completions = CompletionStore::load(storage);
        let router = Router::new(location, &config.base_path);
        Self {
            config,
            routines,
            completions,
            router,
        }
    }

    // ─── Route Resolution ────────────────────────────────────────

    /// The routine the current `run/{id}` route points at, if it resolves.
    pub fn routine_for_run(&self) -> Option<&Routine> {
        match self.router.current() {
            Route::Run { routine_id } => self.routines.find(routine_id),
            _ => None,
        }
    }

    /// The routine the current `edit/{id}` route points at, if it resolves.
    pub fn routine_for_edit(&self) -> Option<&Routine> {
        match self.router.current() {
            Route::Edit { routine_id } => self.routines.find(routine_id),
            _ => None,
        }
    }

    /// The completion the current `completed/{id}` route points at, if it
    /// resolves. A stale id (deleted record, old bookmark) yields `None`;
    /// presenting a fallback is the shell's concern.
    pub fn completion_for_view(&self) -> Option<&RoutineCompletion> {
        match self.router.current() {
            Route::Completed { completion_id } => self.completions.find(completion_id),
            _ => None,
        }
    }

    /// Completion history for one routine, newest first.
    pub fn completion_history(&self, routine_id: &str) -> Vec<&RoutineCompletion> {
        self.completions.for_routine(routine_id)
    }

    // ─── Flows ───────────────────────────────────────────────────

    /// Build and save a routine from a draft, then navigate to running it.
    ///
    /// With `existing_id`, the draft edits that routine in place
    /// (preserving id and creation time); otherwise a new routine is
    /// created.
    pub fn save_routine(&mut self, draft: &RoutineDraft, existing_id: Option<&str>) -> Result<Routine> {
        let existing = existing_id.and_then(|id| self.routines.find(id)).cloned();
        let routine = draft.build(existing.as_ref())?;
        self.routines.upsert(routine.clone())?;
        self.router.navigate(Route::Run {
            routine_id: routine.id.clone(),
        });
        Ok(routine)
    }

    /// Delete a routine and return home.
    ///
    /// Deletion does not cascade: completion history for the routine is
    /// kept, with its weak reference now unresolvable.
    pub fn delete_routine(&mut self, routine_id: &str) -> Result<()> {
        self.routines.remove(routine_id)?;
        self.router.navigate(Route::Home);
        Ok(())
    }

    /// Record a finished run: snapshot the routine into a completion,
    /// add it to history, and return home.
    pub fn complete_run(&mut self, routine_id: &str) -> Result<RoutineCompletion> {
        let routine = self
            .routines
            .find(routine_id)
            .ok_or_else(|| AppError::NotFound(format!("routine {routine_id}")))?
            .clone();

        let completion = RoutineCompletion::snapshot(&routine, now_utc_rfc3339());
        self.completions.add(completion.clone())?;
        self.router.navigate(Route::Home);
        Ok(completion)
    }

    /// Delete one completion record.
    pub fn delete_completion(&mut self, completion_id: &str) -> Result<()> {
        self.completions.remove(completion_id)?;
        Ok(())
    }

    /// Update one exercise's sets/reps/weight in place during a run.
    ///
    /// An unknown exercise id leaves the routine unchanged (the write
    /// still happens, mirroring an edit that touched nothing).
    pub fn set_exercise_meta(
        &mut self,
        routine_id: &str,
        exercise_id: &str,
        meta: ExerciseMeta,
    ) -> Result<()> {
        let mut routine = self
            .routines
            .find(routine_id)
            .ok_or_else(|| AppError::NotFound(format!("routine {routine_id}")))?
            .clone();

        if let Some(exercise) = routine
            .exercises
            .iter_mut()
            .find(|exercise| exercise.id == exercise_id)
        {
            exercise.set_meta(meta);
        }

        self.routines.upsert(routine)?;
        Ok(())
    }
}
