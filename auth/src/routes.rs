//! Route table for the application.
//!
//! The Leptos router declares the actual routes; this table is the single
//! place that names their paths so redirects, links and the router agree.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Every page reachable by path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    SignIn,
    SignUp,
    Dashboard,
}

impl AppRoute {
    /// Single path segment used in route declarations (empty for `/`).
    #[must_use]
    pub fn segment(self) -> &'static str {
        match self {
            Self::Home => "",
            Self::SignIn => "sign-in",
            Self::SignUp => "sign-up",
            Self::Dashboard => "dashboard",
        }
    }

    /// Absolute path for links and redirects.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::SignIn => "/sign-in",
            Self::SignUp => "/sign-up",
            Self::Dashboard => "/dashboard",
        }
    }
}
