//! Path to view matching for the navigation shell.
//!
//! The route table is ordered and the first matching entry wins. `/` is an
//! exact match so it does not swallow every other path. The others are
//! segment-aware prefix matches: `/posts` matches `/posts` and `/posts/7`
//! but not `/postscript`. Matching ignores ASCII case, a trailing slash, the
//! query string and the fragment.

use std::fmt;

/// The three top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Posts,
    Sentry,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Posts => "/posts",
            Route::Sentry => "/sentry",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Prefix,
}

#[derive(Debug, Clone, Copy)]
pub struct RouteEntry {
    pub pattern: &'static str,
    pub kind: MatchKind,
    pub route: Route,
}

impl RouteEntry {
    fn matches(&self, path: &str) -> bool {
        let pattern = self.pattern.trim_end_matches('/');
        match self.kind {
            MatchKind::Exact => path.trim_end_matches('/').eq_ignore_ascii_case(pattern),
            MatchKind::Prefix => {
                if path.len() < pattern.len() || !path.is_char_boundary(pattern.len()) {
                    return false;
                }
                let (head, rest) = path.split_at(pattern.len());
                head.eq_ignore_ascii_case(pattern) && (rest.is_empty() || rest.starts_with('/'))
            }
        }
    }
}

pub const ROUTES: &[RouteEntry] = &[
    RouteEntry {
        pattern: "/",
        kind: MatchKind::Exact,
        route: Route::Home,
    },
    RouteEntry {
        pattern: "/posts",
        kind: MatchKind::Prefix,
        route: Route::Posts,
    },
    RouteEntry {
        pattern: "/sentry",
        kind: MatchKind::Prefix,
        route: Route::Sentry,
    },
];

/// Strip query and fragment; an empty path is the root.
fn location_path(location: &str) -> &str {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    let path = &location[..end];
    if path.is_empty() {
        "/"
    } else {
        path
    }
}

/// First route in [`ROUTES`] that matches `location`, if any.
pub fn match_route(location: &str) -> Option<Route> {
    let path = location_path(location);
    ROUTES.iter().find(|entry| entry.matches(path)).map(|entry| entry.route)
}
