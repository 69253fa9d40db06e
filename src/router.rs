//! Path to view resolution.
//!
//! One route exists: the application root maps to the project builder view.
//! Paths are matched relative to the history base path. Anything else is
//! unhandled and resolves to no view; there is no not-found route.

use std::fmt;

mod history;

pub use history::History;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    ProjectBuilder,
}

impl View {
    pub fn name(self) -> &'static str {
        match self {
            View::ProjectBuilder => "ProjectBuilder",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

struct Route {
    path: &'static str,
    view: View,
}

const ROUTES: &[Route] = &[Route {
    path: "/",
    view: View::ProjectBuilder,
}];

pub struct Router {
    base: String,
    history: History,
}

impl Router {
    /// `base` is the routing base path, e.g. `/` or `/app/`.
    pub fn new(base: &str) -> Self {
        Self {
            base: normalize_base(base),
            history: History::default(),
        }
    }

    /// Resolve a location path to its view, or `None` when no route matches.
    pub fn resolve(&self, path: &str) -> Option<View> {
        let path = strip_query_and_fragment(path);
        let relative = self.strip_base(path)?;

        ROUTES
            .iter()
            .find(|route| route.path == relative)
            .map(|route| route.view)
    }

    /// Full location path for a view, base included.
    pub fn href(&self, view: View) -> String {
        let route_path = ROUTES
            .iter()
            .find(|route| route.view == view)
            .map_or("/", |route| route.path);

        format!("{}{}", self.base, route_path).replace("//", "/")
    }

    /// Overwrite the current history entry and resolve its target.
    ///
    /// The shell's initial navigation replaces rather than pushes, as a
    /// browser history router does on page load.
    pub fn replace(&mut self, path: &str) -> Option<View> {
        self.history.replace(path);
        self.resolve(path)
    }

    /// Record a navigation and resolve its target.
    pub fn push(&mut self, path: &str) -> Option<View> {
        self.history.push(path);
        self.resolve(path)
    }

    pub fn current(&self) -> Option<&str> {
        self.history.current()
    }

    fn strip_base(&self, path: &str) -> Option<String> {
        let trimmed_base = self.base.trim_end_matches('/');
        let rest = path.strip_prefix(trimmed_base)?;

        if rest.is_empty() {
            return Some("/".to_string());
        }
        if !rest.starts_with('/') {
            // "/application" must not match base "/app"
            return None;
        }
        Some(rest.to_string())
    }
}

/// Base paths always start and end with a slash.
fn normalize_base(base: &str) -> String {
    let trimmed = base.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}/")
    }
}

fn strip_query_and_fragment(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or(path)
}
