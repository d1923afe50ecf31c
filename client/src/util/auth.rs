//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sign-in and sign-up pages must send an already signed-in visitor to the
//! dashboard the same way, including when the sign-in completes on the page.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use auth::{AuthState, GuardState};
use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthContext;

/// Destination for a signed-in visitor on a public-only page.
pub fn signed_in_target(state: &AuthState) -> Option<&'static str> {
    GuardState::from_auth(state).public_only_redirect().map(auth::AppRoute::path)
}

/// Navigate away whenever auth has loaded and a user is present.
pub fn install_signed_in_redirect<F>(auth: AuthContext, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(target) = signed_in_target(&auth.state.get()) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
