//! Route-guard state machine.
//!
//! The guard holds no state of its own: every decision is a pure function of
//! the current [`AuthState`], so it re-evaluates whenever the store changes.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::routes::AppRoute;
use crate::store::AuthState;

/// What a guarded route should do right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    /// First session check still pending: show a placeholder, do not navigate.
    Loading,
    /// Signed in: render the protected subtree.
    Authenticated,
    /// Signed out: redirect to sign-in without rendering protected content.
    Unauthenticated,
}

impl GuardState {
    #[must_use]
    pub fn from_auth(state: &AuthState) -> Self {
        if state.loading {
            Self::Loading
        } else if state.user.is_some() {
            Self::Authenticated
        } else {
            Self::Unauthenticated
        }
    }

    /// Where a protected route sends the visitor, if anywhere.
    #[must_use]
    pub fn redirect(self) -> Option<AppRoute> {
        match self {
            Self::Unauthenticated => Some(AppRoute::SignIn),
            Self::Loading | Self::Authenticated => None,
        }
    }

    /// Where a sign-in/sign-up page sends a visitor who is already signed in.
    #[must_use]
    pub fn public_only_redirect(self) -> Option<AppRoute> {
        match self {
            Self::Authenticated => Some(AppRoute::Dashboard),
            Self::Loading | Self::Unauthenticated => None,
        }
    }
}
