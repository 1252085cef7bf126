// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Progress-Tracker: define exercise routines, run them, keep history
//!
//! This crate is the local-first state layer: two schema-validated
//! persistent collections (routines, completions) over an injected
//! storage capability, and a five-state router kept synchronized with a
//! navigable location. Rendering is the host's concern; it reads store
//! values and calls the flows on [`App`].

pub mod app;
pub mod assets;
pub mod config;
pub mod db;
pub mod error;
pub mod id;
pub mod models;
pub mod presets;
pub mod router;
pub mod run;
pub mod stores;
pub mod time_utils;

pub use app::App;
