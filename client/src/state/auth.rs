//! Auth context for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the `AuthProvider` and provides an [`AuthContext`]. Route guards
//! and pages read `state`; forms call the action methods.
//!
//! DESIGN
//! ======
//! The provider holds `Rc` values and cannot live in a thread-safe signal, so
//! it sits in local storage (`StoredValue::new_local`). The copyable context
//! only carries arena handles. `state` is written solely by the store's watch
//! listener, never by components.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::rc::Rc;

use auth::{AuthError, AuthProvider, AuthResult, AuthState, Credentials};
use leptos::prelude::*;

use crate::net::gotrue::GoTrueClient;

pub type AppAuthProvider = AuthProvider<GoTrueClient>;

/// Auth state and actions available to every component under `App`.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: RwSignal<AuthState>,
    provider: StoredValue<Rc<AppAuthProvider>, LocalStorage>,
}

impl AuthContext {
    /// Mirror `provider`'s store into a new signal and wrap both.
    #[must_use]
    pub fn new(provider: Rc<AppAuthProvider>) -> Self {
        let state = RwSignal::new(provider.store().snapshot());
        provider.store().watch(move |snapshot| {
            // The signal is gone once the owning view is disposed.
            if state.try_set(snapshot.clone()).is_some() {
                log::debug!("auth state changed after context disposal");
            }
        });
        Self { state, provider: StoredValue::new_local(provider) }
    }

    fn provider(&self) -> Result<Rc<AppAuthProvider>, AuthError> {
        self.provider
            .try_get_value()
            .ok_or_else(|| AuthError::configuration("auth context disposed"))
    }

    /// # Errors
    ///
    /// See [`AuthProvider::sign_in`].
    pub async fn sign_in(self, credentials: Credentials) -> AuthResult {
        self.provider()?.sign_in(&credentials).await
    }

    /// # Errors
    ///
    /// See [`AuthProvider::sign_up`].
    pub async fn sign_up(self, credentials: Credentials) -> AuthResult {
        self.provider()?.sign_up(&credentials).await
    }

    /// # Errors
    ///
    /// See [`AuthProvider::sign_out`].
    pub async fn sign_out(self) -> Result<(), AuthError> {
        self.provider()?.sign_out().await
    }

    pub fn clear_error(&self) {
        if let Ok(provider) = self.provider() {
            provider.clear_error();
        }
    }
}
