//! Route table and guards
//!
//! Guards are pure functions over a [`SessionContext`] snapshot. The app takes
//! a fresh snapshot on every navigation and follows redirects until a route
//! renders.

use std::fmt;

use resumecheck_client::ApiError;
use resumecheck_core::{ResumeId, SessionContext};
use tracing::{debug, warn};

/// Redirect hops followed before giving up and showing the home page
pub const MAX_REDIRECTS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    Dashboard,
    Report(ResumeId),
    Admin,
}

/// Access rule attached to a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    /// Anyone
    Open,
    /// Signed-out users only
    Public,
    /// Signed-in users, optionally admins only
    Protected { require_admin: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Render,
    Redirect(Route),
}

impl Route {
    /// Match a path against the route table. Query strings and fragments are
    /// ignored; `None` means no route matches.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.trim_end_matches('/');

        match path {
            "" => Some(Route::Home),
            "/login" => Some(Route::Login),
            "/register" => Some(Route::Register),
            "/dashboard" => Some(Route::Dashboard),
            "/admin" => Some(Route::Admin),
            _ => path
                .strip_prefix("/report/")
                .filter(|id| !id.is_empty() && !id.contains('/'))
                .map(|id| Route::Report(ResumeId::new(id))),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Report(id) => format!("/report/{id}"),
            Route::Admin => "/admin".to_string(),
        }
    }

    pub fn guard(&self) -> Guard {
        match self {
            Route::Home => Guard::Open,
            Route::Login | Route::Register => Guard::Public,
            Route::Dashboard | Route::Report(_) => Guard::Protected {
                require_admin: false,
            },
            Route::Admin => Guard::Protected {
                require_admin: true,
            },
        }
    }

    /// The auth pages render without the navbar
    pub fn shows_navbar(&self) -> bool {
        !matches!(self, Route::Login | Route::Register)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl Guard {
    pub fn check(self, session: &SessionContext) -> Decision {
        match self {
            Guard::Open => Decision::Render,
            Guard::Public => public_route(session),
            Guard::Protected { require_admin } => protected_route(session, require_admin),
        }
    }
}

/// Signed-in users only; admins only when `require_admin` is set.
pub fn protected_route(session: &SessionContext, require_admin: bool) -> Decision {
    if !session.is_signed_in() {
        return Decision::Redirect(Route::Login);
    }

    if require_admin && !session.is_admin() {
        return Decision::Redirect(Route::Dashboard);
    }

    Decision::Render
}

/// Signed-out users only. Signed-in users land on their home page.
pub fn public_route(session: &SessionContext) -> Decision {
    if session.is_signed_in() {
        if session.is_admin() {
            return Decision::Redirect(Route::Admin);
        }
        return Decision::Redirect(Route::Dashboard);
    }

    Decision::Render
}

/// Follow guard redirects from `path` to the route that renders.
///
/// Unknown paths go to `/`.
pub fn resolve(path: &str, session: &SessionContext) -> Route {
    let mut route = Route::parse(path).unwrap_or_else(|| {
        debug!(path = %path, "No route matches, redirecting home");
        Route::Home
    });

    for _ in 0..MAX_REDIRECTS {
        match route.guard().check(session) {
            Decision::Render => return route,
            Decision::Redirect(next) => {
                debug!(from = %route, to = %next, "Guard redirect");
                route = next;
            }
        }
    }

    warn!(path = %path, "Too many redirects, falling back to home");
    Route::Home
}

/// Navigation an API failure calls for, if any
pub fn redirect_for(error: &ApiError) -> Option<Route> {
    match error {
        ApiError::AuthExpired => Some(Route::Login),
        ApiError::Forbidden => Some(Route::Dashboard),
        _ => None,
    }
}
