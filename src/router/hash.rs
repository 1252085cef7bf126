// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Hash-fragment route encoding.
//!
//! An equivalent, interchangeable encoding of the same five-state route
//! model for hosts that prefer fragment navigation over paths: `#`,
//! `#create`, `#edit/{id}`, `#run/{id}`, `#completed/{id}`. No base
//! prefix is involved; fragments are already host-relative.

use crate::router::{parse_suffix, suffix, Route};

/// Canonical hash fragment for a route.
pub fn to_hash(route: &Route) -> String {
    format!("#{}", suffix(route))
}

/// Parse a hash fragment into a route.
///
/// Empty and unrecognized fragments resolve to [`Route::Home`].
pub fn parse_hash_route(hash: &str) -> Route {
    let rest = hash.trim().trim_start_matches('#');
    parse_suffix(rest.trim_start_matches('/'))
}
