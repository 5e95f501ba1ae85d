//! Path resolution and the session guard for role-gated pages.
//!
//! The Dioxus router in the app mirrors [`VERITAS_ROUTES`]; this module is the
//! plain-data version of the same table so resolution and guarding can be
//! exercised without a renderer.

use crate::navigation::normalize_path;
use crate::{Role, Session};
use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::OnceLock;

pub const LOGIN_PATH: &str = "/login";
pub const SIGNUP_PATH: &str = "/signup";

/// Every page the client can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Login,
    Signup,
    StudentDashboard,
    TeacherDashboard,
    MentorDashboard,
    ResearcherDashboard,
    ResearchRepository,
}

impl Page {
    /// Role a session must hold to see this page. `None` for public pages.
    pub fn required_role(&self) -> Option<Role> {
        match self {
            Page::Login | Page::Signup => None,
            Page::StudentDashboard => Some(Role::Student),
            Page::TeacherDashboard => Some(Role::Teacher),
            Page::MentorDashboard => Some(Role::Mentor),
            Page::ResearcherDashboard | Page::ResearchRepository => Some(Role::Researcher),
        }
    }
}

/// How a declared route matches a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// The path must equal this string.
    Exact(&'static str),
    /// The path must equal this string or continue it with `/`.
    Prefix(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDef {
    pub matcher: Matcher,
    pub page: Page,
}

const fn exact(path: &'static str, page: Page) -> RouteDef {
    RouteDef {
        matcher: Matcher::Exact(path),
        page,
    }
}

const fn prefix(path: &'static str, page: Page) -> RouteDef {
    RouteDef {
        matcher: Matcher::Prefix(path),
        page,
    }
}

/// The client's route surface. Everything else redirects to `/login`.
pub const VERITAS_ROUTES: &[RouteDef] = &[
    exact(LOGIN_PATH, Page::Login),
    exact(SIGNUP_PATH, Page::Signup),
    exact("/researcher/repo", Page::ResearchRepository),
    prefix("/student", Page::StudentDashboard),
    prefix("/teacher", Page::TeacherDashboard),
    prefix("/mentor", Page::MentorDashboard),
    prefix("/researcher", Page::ResearcherDashboard),
];

/// Result of resolving a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Render(Page),
    Redirect(&'static str),
}

/// Route table misconfiguration, detected when the table is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteConfigError {
    /// Paths must be absolute and prefixes may not be the root.
    InvalidPath(&'static str),
    DuplicateExact(&'static str),
    /// Two prefixes where one equals or contains the other.
    OverlappingPrefix(&'static str, &'static str),
}

impl fmt::Display for RouteConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteConfigError::InvalidPath(p) => write!(f, "invalid route path {p:?}"),
            RouteConfigError::DuplicateExact(p) => write!(f, "route {p:?} declared twice"),
            RouteConfigError::OverlappingPrefix(a, b) => {
                write!(f, "prefix routes {a:?} and {b:?} overlap")
            }
        }
    }
}

impl std::error::Error for RouteConfigError {}

fn prefix_matches(prefix: &str, path: &str) -> bool {
    path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Validated route table.
#[derive(Debug, Clone)]
pub struct RouteTable {
    exact: Vec<(&'static str, Page)>,
    prefixes: Vec<(&'static str, Page)>,
}

impl RouteTable {
    pub fn from_routes(routes: &[RouteDef]) -> Result<Self, RouteConfigError> {
        let mut exact: Vec<(&'static str, Page)> = Vec::new();
        let mut prefixes: Vec<(&'static str, Page)> = Vec::new();

        for route in routes {
            match route.matcher {
                Matcher::Exact(path) => {
                    if !path.starts_with('/') {
                        return Err(RouteConfigError::InvalidPath(path));
                    }
                    if exact.iter().any(|(p, _)| *p == path) {
                        return Err(RouteConfigError::DuplicateExact(path));
                    }
                    exact.push((path, route.page));
                }
                Matcher::Prefix(path) => {
                    if !path.starts_with('/') || path == "/" || path.ends_with('/') {
                        return Err(RouteConfigError::InvalidPath(path));
                    }
                    if let Some((other, _)) = prefixes
                        .iter()
                        .find(|(p, _)| prefix_matches(p, path) || prefix_matches(path, p))
                    {
                        return Err(RouteConfigError::OverlappingPrefix(other, path));
                    }
                    prefixes.push((path, route.page));
                }
            }
        }

        Ok(Self { exact, prefixes })
    }

    /// The application's table, built and checked once.
    pub fn veritas() -> &'static RouteTable {
        static TABLE: OnceLock<RouteTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            RouteTable::from_routes(VERITAS_ROUTES)
                .unwrap_or_else(|e| panic!("built-in route table is invalid: {e}"))
        })
    }

    /// Map a path to a page, or to the login redirect.
    ///
    /// Query and fragment are ignored, a trailing `/` is dropped, and matching
    /// is case-sensitive. Exact routes win over prefixes.
    pub fn resolve(&self, path: &str) -> Resolution {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = normalize_path(path);

        if let Some((_, page)) = self.exact.iter().find(|(p, _)| *p == path) {
            return Resolution::Render(*page);
        }

        self.prefixes
            .iter()
            .filter(|(p, _)| prefix_matches(p, path))
            .max_by_key(|(p, _)| p.len())
            .map(|(_, page)| Resolution::Render(*page))
            .unwrap_or(Resolution::Redirect(LOGIN_PATH))
    }
}

/// Apply the session guard to a resolution at time `now`.
///
/// Role-gated pages need a valid session of the page's role. No session (or an
/// expired one) redirects to login; a session of another role is sent to its
/// own dashboard.
pub fn authorize_at(
    resolution: Resolution,
    session: Option<&Session>,
    now: DateTime<Utc>,
) -> Resolution {
    let Resolution::Render(page) = resolution else {
        return resolution;
    };
    let Some(required) = page.required_role() else {
        return resolution;
    };

    match session.filter(|s| s.is_valid_at(now)) {
        None => Resolution::Redirect(LOGIN_PATH),
        Some(session) if session.role() == required => resolution,
        Some(session) => Resolution::Redirect(session.role().home_path()),
    }
}

pub fn authorize(resolution: Resolution, session: Option<&Session>) -> Resolution {
    authorize_at(resolution, session, Utc::now())
}

/// Resolve `path` against the built-in table and guard it.
pub fn navigate(path: &str, session: Option<&Session>) -> Resolution {
    authorize(RouteTable::veritas().resolve(path), session)
}
