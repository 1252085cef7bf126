// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Reference image URL resolution.

use crate::router::normalize_base_path;

/// Resolve a stored image URL against the configured base path.
///
/// Fully-qualified URLs (`http:`, `https:`, `data:`, `blob:`) and
/// explicitly relative paths (`./`, `../`) pass through untouched, as do
/// paths already under the base. Site-absolute paths and bare
/// app-relative paths are rewritten under the base prefix.
pub fn resolve_image_url(base_path: &str, raw_url: &str) -> String {
    let url = raw_url.trim();
    if url.is_empty() {
        return url.to_string();
    }

    let lower = url.to_ascii_lowercase();
    if ["http:", "https:", "data:", "blob:"]
        .iter()
        .any(|scheme| lower.starts_with(scheme))
    {
        return url.to_string();
    }

    let base = normalize_base_path(base_path);
    if url.starts_with(base.as_str()) {
        return url.to_string();
    }

    if let Some(rest) = url.strip_prefix('/') {
        return format!("{base}{rest}");
    }

    if url.starts_with("./") || url.starts_with("../") {
        return url.to_string();
    }

    format!("{base}{url}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fully_qualified_untouched() {
        assert_eq!(
            resolve_image_url("/app/", "https://example.com/a.png"),
            "https://example.com/a.png"
        );
        assert_eq!(
            resolve_image_url("/app/", "DATA:image/png;base64,xyz"),
            "DATA:image/png;base64,xyz"
        );
    }

    #[test]
    fn test_already_under_base_kept() {
        assert_eq!(
            resolve_image_url("/app/", "/app/exercises/a.png"),
            "/app/exercises/a.png"
        );
    }

    #[test]
    fn test_site_absolute_rebased() {
        assert_eq!(
            resolve_image_url("/app/", "/exercises/a.png"),
            "/app/exercises/a.png"
        );
    }

    #[test]
    fn test_explicit_relative_untouched() {
        assert_eq!(resolve_image_url("/app/", "./a.png"), "./a.png");
        assert_eq!(resolve_image_url("/app/", "../a.png"), "../a.png");
    }

    #[test]
    fn test_app_relative_prefixed() {
        assert_eq!(
            resolve_image_url("/app/", "exercises/a.png"),
            "/app/exercises/a.png"
        );
        assert_eq!(resolve_image_url("/", "exercises/a.png"), "/exercises/a.png");
    }

    #[test]
    fn test_empty_stays_empty() {
        assert_eq!(resolve_image_url("/app/", "   "), "");
    }
}
