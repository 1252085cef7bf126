// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Opaque identifier generation.

use uuid::Uuid;

/// Generate a collision-resistant opaque identifier.
///
/// Used for routines, exercises, and completion records. The result is
/// suitable as a collection key; no ordering is implied.
pub fn make_id() -> String {
    Uuid::new_v4().to_string()
}
