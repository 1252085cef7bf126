// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Built-in exercise presets.

use crate::models::ExerciseDraft;

/// A suggested exercise, optionally with a bundled reference image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExercisePreset {
    pub name: &'static str,
    pub image_url: Option<&'static str>,
}

impl ExercisePreset {
    /// Start a draft row from this preset.
    pub fn to_draft(&self) -> ExerciseDraft {
        ExerciseDraft::named(self.name, self.image_url)
    }
}

pub const EXERCISE_PRESETS: &[ExercisePreset] = &[
    ExercisePreset {
        name: "Lat pull down",
        image_url: Some("exercises/lat-pull-down.png"),
    },
    ExercisePreset {
        name: "Face pull",
        image_url: Some("exercises/face-pull.png"),
    },
    ExercisePreset {
        name: "Rowing machine",
        image_url: Some("exercises/rowing-machine.png"),
    },
    ExercisePreset {
        name: "Lateral raise dumbbell",
        image_url: Some("exercises/lateral-raise.png"),
    },
    ExercisePreset {
        name: "Shoulder press dumbbell",
        image_url: Some("exercises/shoulder-press-dumbbell.png"),
    },
    ExercisePreset {
        name: "Shrugs dumbbell",
        image_url: Some("exercises/shrugs-dumbbell.png"),
    },
    ExercisePreset {
        name: "Triceps cable",
        image_url: Some("exercises/triceps-cable.png"),
    },
    ExercisePreset {
        name: "Reverse fly",
        image_url: Some("exercises/reverse-fly.png"),
    },
    ExercisePreset {
        name: "Treadmill intervals",
        image_url: None,
    },
    ExercisePreset {
        name: "Quads machine",
        image_url: Some("exercises/quads-machine.jpg"),
    },
    ExercisePreset {
        name: "Squat with dumbbell",
        image_url: None,
    },
    ExercisePreset {
        name: "Hams machine",
        image_url: None,
    },
    ExercisePreset {
        name: "Sumo squat",
        image_url: None,
    },
    ExercisePreset {
        name: "Hip thrust",
        image_url: None,
    },
    ExercisePreset {
        name: "Calves",
        image_url: None,
    },
    ExercisePreset {
        name: "Chest press dumbbell",
        image_url: Some("exercises/chest-press-dumbbell.jpg"),
    },
    ExercisePreset {
        name: "Upper chest dumbbell",
        image_url: None,
    },
    ExercisePreset {
        name: "Push ups on knee",
        image_url: None,
    },
    ExercisePreset {
        name: "Arnold biceps",
        image_url: None,
    },
    ExercisePreset {
        name: "Hammer biceps",
        image_url: Some("exercises/hammer-biceps.png"),
    },
    ExercisePreset {
        name: "Chest press barbell",
        image_url: None,
    },
    ExercisePreset {
        name: "Wall sit",
        image_url: Some("exercises/wall-sit.jpg"),
    },
];

/// Look up a preset by name, case-insensitively.
pub fn find_preset(name: &str) -> Option<&'static ExercisePreset> {
    EXERCISE_PRESETS
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name.trim()))
}
