// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, SecondsFormat, Utc};

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
///
/// Millisecond precision matches the timestamps already present in stored
/// collections (e.g. `2024-01-01T00:00:00.000Z`).
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Current instant in the stored timestamp format.
pub fn now_utc_rfc3339() -> String {
    format_utc_rfc3339(Utc::now())
}

/// Format a duration in seconds as `m:ss`.
///
/// Absent, non-finite, and zero durations all render as an em dash.
pub fn format_duration(seconds: Option<f64>) -> String {
    let Some(seconds) = seconds.filter(|s| s.is_finite()) else {
        return "—".to_string();
    };

    let total = seconds.trunc().max(0.0) as u64;
    if total == 0 {
        return "—".to_string();
    }

    let mins = total / 60;
    let secs = total % 60;
    format!("{}:{:02}", mins, secs)
}
