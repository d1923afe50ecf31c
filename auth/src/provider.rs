//! Session lifecycle driver and auth action wrappers.
//!
//! ARCHITECTURE
//! ============
//! `AuthProvider` is the single owning root of the auth session. `start`
//! acquires the provider's event subscription, then returns a driver future
//! that resolves the initial session and applies events in arrival order
//! until the returned [`AuthHandle`] is stopped or dropped. The host decides
//! where the driver runs (`spawn_local` in the browser, a `LocalPool` in
//! tests).
//!
//! Actions never write `user`. A successful sign-in is observed through the
//! provider's `SignedIn` event, so the store has exactly one writer per field
//! and no double update races between the action response and the event.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use futures::channel::oneshot;
use futures::future::{self, Either, LocalBoxFuture};
use futures::{FutureExt, StreamExt};

use crate::client::{EventStream, IdentityClient};
use crate::notify::{Notice, Notifier};
use crate::store::AuthStore;
use crate::types::{AuthError, AuthResult, Credentials};

pub const SIGNED_IN_MESSAGE: &str = "Signed in successfully!";
pub const SIGNED_UP_MESSAGE: &str = "Signed up successfully!";
pub const SIGNED_OUT_MESSAGE: &str = "Signed out.";

/// Owner of the auth session: identity client, state store and notifier.
pub struct AuthProvider<C> {
    client: Rc<C>,
    store: AuthStore,
    notifier: Rc<dyn Notifier>,
}

impl<C: IdentityClient + 'static> AuthProvider<C> {
    #[must_use]
    pub fn new(client: Rc<C>, store: AuthStore, notifier: Rc<dyn Notifier>) -> Self {
        Self { client, store, notifier }
    }

    #[must_use]
    pub fn store(&self) -> &AuthStore {
        &self.store
    }

    /// Subscribe to lifecycle events and build the driver future.
    ///
    /// The subscription is taken before the initial session fetch starts, so
    /// no event emitted during the fetch is missed. The driver must be polled
    /// (spawned) for anything to happen; it completes once the handle stops.
    pub fn start(&self) -> (AuthHandle, LocalBoxFuture<'static, ()>) {
        let (subscription, events) = self.client.on_auth_state_change();
        let (stop_tx, stop_rx) = oneshot::channel::<()>();
        let handle = AuthHandle { stop: Some(stop_tx), mounted: self.store.mounted_flag() };

        let client = Rc::clone(&self.client);
        let store = self.store.clone();
        let driver = async move {
            let run = async {
                futures::join!(initialize(client.as_ref(), &store), consume_events(events, &store));
            };
            futures::pin_mut!(run);

            match future::select(run, stop_rx).await {
                Either::Left(((), _)) => log::debug!("auth event stream closed"),
                Either::Right(_) => log::debug!("auth driver stopped"),
            }
            subscription.release();
        };

        (handle, driver.boxed_local())
    }

    /// Sign in with email + password.
    ///
    /// # Errors
    ///
    /// Returns the provider's rejection or the transport failure; either is
    /// also stored in `AuthState.error`.
    pub async fn sign_in(&self, credentials: &Credentials) -> AuthResult {
        self.store.clear_error();
        match self.client.sign_in_with_password(credentials).await {
            Ok(user) => {
                log::info!("signed in as {}", credentials.email);
                self.notifier.notify(Notice::success(SIGNED_IN_MESSAGE));
                Ok(user)
            }
            Err(err) => Err(self.fail("sign-in", err)),
        }
    }

    /// Register a new account with email + password.
    ///
    /// # Errors
    ///
    /// Same contract as [`AuthProvider::sign_in`].
    pub async fn sign_up(&self, credentials: &Credentials) -> AuthResult {
        self.store.clear_error();
        match self.client.sign_up(credentials).await {
            Ok(user) => {
                log::info!("signed up {}", credentials.email);
                self.notifier.notify(Notice::success(SIGNED_UP_MESSAGE));
                Ok(user)
            }
            Err(err) => Err(self.fail("sign-up", err)),
        }
    }

    /// End the current session.
    ///
    /// # Errors
    ///
    /// Same contract as [`AuthProvider::sign_in`].
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        self.store.clear_error();
        match self.client.sign_out().await {
            Ok(()) => {
                self.notifier.notify(Notice::success(SIGNED_OUT_MESSAGE));
                Ok(())
            }
            Err(err) => Err(self.fail("sign-out", err)),
        }
    }

    pub fn clear_error(&self) {
        self.store.clear_error();
    }

    fn fail(&self, action: &str, error: AuthError) -> AuthError {
        self.store.set_error(error.clone());
        if error.is_provider_reported() {
            log::warn!("{action} rejected: {error}");
            self.notifier.notify(Notice::error(error.message.clone()));
        } else {
            log::error!("unexpected {action} error: {error}");
        }
        error
    }
}

async fn initialize<C: IdentityClient + ?Sized>(client: &C, store: &AuthStore) {
    let result = client.get_session().await.map(|session| session.map(|s| s.user));
    if let Err(err) = &result {
        log::error!("error getting session: {err}");
    }
    store.resolve_initial(result);
}

async fn consume_events(mut events: EventStream, store: &AuthStore) {
    while let Some(event) = events.next().await {
        if !store.is_mounted() {
            break;
        }
        store.apply_event(&event);
    }
}

// =============================================================================
// HANDLE
// =============================================================================

/// Teardown handle returned by [`AuthProvider::start`].
///
/// Stopping (or dropping) the handle freezes the store immediately and tells
/// the driver to release its subscription. The handle is `Send + Sync` so it
/// can live inside UI cleanup callbacks.
pub struct AuthHandle {
    stop: Option<oneshot::Sender<()>>,
    mounted: Arc<AtomicBool>,
}

impl AuthHandle {
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.mounted.store(false, Ordering::Release);
        if let Some(tx) = self.stop.take() {
            // The driver may already be gone.
            let _ = tx.send(());
        }
    }
}

impl Drop for AuthHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}
