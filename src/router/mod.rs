// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client-side routing.
//!
//! The current view is derived, not stored: the single source of truth is
//! the location string. `Router` keeps an in-memory [`Route`] synchronized
//! with a [`Location`] backend so back/forward and reload behave
//! correctly.

pub mod hash;

/// The application's current logical screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Create,
    Edit { routine_id: String },
    Run { routine_id: String },
    Completed { completion_id: String },
}

/// Normalize a configured base path to exactly one leading and one
/// trailing separator (`""`, `"app"`, `"/app"`, `"/app/"` all become
/// `"/app/"`; the root stays `"/"`).
pub fn normalize_base_path(base_path: &str) -> String {
    let trimmed = base_path.trim();
    let mut normalized = if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    };
    if !normalized.starts_with('/') {
        normalized.insert(0, '/');
    }
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    if normalized == "//" {
        "/".to_string()
    } else {
        normalized
    }
}

fn strip_base_path(pathname: &str, base_path: &str) -> String {
    let base = normalize_base_path(base_path);
    let raw = pathname.trim();
    let raw = if raw.is_empty() { "/" } else { raw };

    let rest = if base != "/" && raw.starts_with(base.as_str()) {
        &raw[base.len()..]
    } else {
        raw
    };
    rest.trim_start_matches('/').to_string()
}

// Shared by the path and hash schemes: both encode the same five states.
pub(crate) fn parse_suffix(rest: &str) -> Route {
    match rest.split_once('/') {
        None => match rest {
            "" => Route::Home,
            "create" => Route::Create,
            _ => Route::Home,
        },
        Some((head, id)) if !id.is_empty() && !id.contains('/') => match head {
            "edit" => Route::Edit {
                routine_id: id.to_string(),
            },
            "run" => Route::Run {
                routine_id: id.to_string(),
            },
            "completed" => Route::Completed {
                completion_id: id.to_string(),
            },
            _ => Route::Home,
        },
        // Anything unrecognized deliberately falls back to home.
        Some(_) => Route::Home,
    }
}

pub(crate) fn suffix(route: &Route) -> String {
    match route {
        Route::Home => String::new(),
        Route::Create => "create".to_string(),
        Route::Edit { routine_id } => format!("edit/{routine_id}"),
        Route::Run { routine_id } => format!("run/{routine_id}"),
        Route::Completed { completion_id } => format!("completed/{completion_id}"),
    }
}

/// Parse a location pathname into a route under the given base path.
///
/// An empty or unrecognized remainder resolves to [`Route::Home`]; this is
/// a fallback, not an error.
pub fn parse_path_route(pathname: &str, base_path: &str) -> Route {
    parse_suffix(&strip_base_path(pathname, base_path))
}

/// Canonical external path for a route under the given base path.
///
/// Ids are inserted verbatim and must not contain `/`.
pub fn to_path(route: &Route, base_path: &str) -> String {
    let base = normalize_base_path(base_path);
    let suffix = suffix(route);
    if suffix.is_empty() {
        base
    } else {
        format!("{base}{suffix}")
    }
}

/// The platform location surface the router reads and writes.
pub trait Location {
    /// Current pathname.
    fn pathname(&self) -> String;

    /// Push a new history entry with the given path.
    fn push(&mut self, path: &str);
}

/// History-stack location backend for tests and terminal hosts.
#[derive(Debug, Clone)]
pub struct MemoryLocation {
    entries: Vec<String>,
    index: usize,
}

impl MemoryLocation {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            index: 0,
        }
    }

    /// Go back one history entry. Returns false at the oldest entry.
    pub fn back(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Go forward one history entry. Returns false at the newest entry.
    pub fn forward(&mut self) -> bool {
        if self.index + 1 < self.entries.len() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Number of history entries.
    pub fn history_len(&self) -> usize {
        self.entries.len()
    }
}

impl Location for MemoryLocation {
    fn pathname(&self) -> String {
        self.entries[self.index].clone()
    }

    // Pushing from the middle of the stack drops the forward entries,
    // like browser history.
    fn push(&mut self, path: &str) {
        self.entries.truncate(self.index + 1);
        self.entries.push(path.to_string());
        self.index += 1;
    }
}

/// Five-state router synchronized with a location backend.
pub struct Router<L: Location> {
    location: L,
    base_path: String,
    current: Route,
}

impl<L: Location> Router<L> {
    /// Construct a router, deriving the initial route from the location.
    pub fn new(location: L, base_path: &str) -> Self {
        let base_path = normalize_base_path(base_path);
        let current = parse_path_route(&location.pathname(), &base_path);
        Self {
            location,
            base_path,
            current,
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Navigate to `next`.
    ///
    /// Pushes a history entry only when the computed path differs from the
    /// current one; navigating to the already-current route updates
    /// in-memory state without growing history.
    pub fn navigate(&mut self, next: Route) {
        let next_path = to_path(&next, &self.base_path);
        if self.location.pathname() != next_path {
            self.location.push(&next_path);
        }
        self.current = next;
    }

    /// Re-derive the route from the now-current location.
    ///
    /// The back/forward handler: call after any external history move.
    /// Never pushes a history entry itself.
    pub fn sync(&mut self) {
        self.current = parse_path_route(&self.location.pathname(), &self.base_path);
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    /// Mutable access to the location backend, for driving external
    /// navigation (back/forward). Follow with [`Router::sync`].
    pub fn location_mut(&mut self) -> &mut L {
        &mut self.location
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_path_forms() {
        assert_eq!(normalize_base_path(""), "/");
        assert_eq!(normalize_base_path("/"), "/");
        assert_eq!(normalize_base_path("app"), "/app/");
        assert_eq!(normalize_base_path("/app"), "/app/");
        assert_eq!(normalize_base_path("/app/"), "/app/");
        assert_eq!(normalize_base_path("  /app  "), "/app/");
    }

    #[test]
    fn test_parse_known_routes_at_root() {
        assert_eq!(parse_path_route("/", "/"), Route::Home);
        assert_eq!(parse_path_route("/create", "/"), Route::Create);
        assert_eq!(
            parse_path_route("/edit/r1", "/"),
            Route::Edit {
                routine_id: "r1".to_string()
            }
        );
        assert_eq!(
            parse_path_route("/run/r1", "/"),
            Route::Run {
                routine_id: "r1".to_string()
            }
        );
        assert_eq!(
            parse_path_route("/completed/c1", "/"),
            Route::Completed {
                completion_id: "c1".to_string()
            }
        );
    }

    #[test]
    fn test_parse_unrecognized_falls_back_to_home() {
        assert_eq!(parse_path_route("/bogus", "/"), Route::Home);
        assert_eq!(parse_path_route("/edit", "/"), Route::Home);
        assert_eq!(parse_path_route("/edit/", "/"), Route::Home);
        assert_eq!(parse_path_route("/edit/a/b", "/"), Route::Home);
        assert_eq!(parse_path_route("", "/"), Route::Home);
    }

    #[test]
    fn test_parse_under_base_path() {
        assert_eq!(
            parse_path_route("/app/edit/r1", "/app/"),
            Route::Edit {
                routine_id: "r1".to_string()
            }
        );
        assert_eq!(parse_path_route("/app/", "/app/"), Route::Home);
        // A path outside the base still strips leading separators only.
        assert_eq!(parse_path_route("/other/create", "/app/"), Route::Home);
    }

    #[test]
    fn test_to_path_under_base_path() {
        let route = Route::Edit {
            routine_id: "r1".to_string(),
        };
        assert_eq!(to_path(&route, "/app/"), "/app/edit/r1");
        assert_eq!(to_path(&Route::Home, "/app/"), "/app/");
        assert_eq!(to_path(&Route::Create, "/"), "/create");
    }

    #[test]
    fn test_roundtrip_all_variants() {
        let id = "0a1b2c3d-4e5f-6789-abcd-ef0123456789".to_string();
        let routes = [
            Route::Home,
            Route::Create,
            Route::Edit {
                routine_id: id.clone(),
            },
            Route::Run {
                routine_id: id.clone(),
            },
            Route::Completed {
                completion_id: id.clone(),
            },
        ];
        for base in ["/", "/app/", "app"] {
            for route in &routes {
                let path = to_path(route, base);
                assert_eq!(&parse_path_route(&path, base), route, "base={base}");
            }
        }
    }

    #[test]
    fn test_navigate_pushes_history() {
        let mut router = Router::new(MemoryLocation::new("/"), "/");
        router.navigate(Route::Create);
        assert_eq!(router.current(), &Route::Create);
        assert_eq!(router.location().pathname(), "/create");
        assert_eq!(router.location().history_len(), 2);
    }

    #[test]
    fn test_navigate_same_route_is_idempotent() {
        let mut router = Router::new(MemoryLocation::new("/"), "/");
        router.navigate(Route::Create);
        router.navigate(Route::Create);
        assert_eq!(router.location().history_len(), 2);
        assert_eq!(router.current(), &Route::Create);
    }

    #[test]
    fn test_back_forward_resync() {
        let mut router = Router::new(MemoryLocation::new("/"), "/");
        router.navigate(Route::Create);
        router.navigate(Route::Run {
            routine_id: "r1".to_string(),
        });

        assert!(router.location_mut().back());
        router.sync();
        assert_eq!(router.current(), &Route::Create);

        assert!(router.location_mut().forward());
        router.sync();
        assert_eq!(
            router.current(),
            &Route::Run {
                routine_id: "r1".to_string()
            }
        );
        // Re-deriving never grew history.
        assert_eq!(router.location().history_len(), 3);
    }

    #[test]
    fn test_push_truncates_forward_entries() {
        let mut router = Router::new(MemoryLocation::new("/"), "/");
        router.navigate(Route::Create);
        router.location_mut().back();
        router.sync();

        router.navigate(Route::Run {
            routine_id: "r1".to_string(),
        });
        assert_eq!(router.location().history_len(), 2);
        assert!(!router.location_mut().forward());
    }

    #[test]
    fn test_initial_route_from_location() {
        let router = Router::new(MemoryLocation::new("/app/completed/c9"), "/app");
        assert_eq!(
            router.current(),
            &Route::Completed {
                completion_id: "c9".to_string()
            }
        );
    }
}
