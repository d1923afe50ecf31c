//! Auth state store: who is signed in right now.
//!
//! SYSTEM CONTEXT
//! ==============
//! The lifecycle driver in `provider` feeds this store from the initial
//! session fetch and the provider's event stream; action wrappers only touch
//! `error`. UI layers mirror the store through [`AuthStore::watch`].
//!
//! DESIGN
//! ======
//! A store is mounted from creation until [`AuthStore::unmount`], which is
//! terminal: afterwards every mutation is a silent no-op. The mounted flag is
//! an `Arc<AtomicBool>` because the teardown handle that flips it must be
//! movable into UI cleanup hooks that require `Send`.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::types::{AuthError, AuthEvent, AuthEventKind, User};

/// Snapshot of the authentication state.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    /// True only until the first session check resolves.
    pub loading: bool,
    /// Most recent failure; independent of whether `user` is still valid.
    pub error: Option<AuthError>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true, error: None }
    }
}

impl AuthState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self.loading && self.user.is_some()
    }
}

type Listener = Box<dyn Fn(&AuthState)>;

/// Shared handle to the auth state. Clones point at the same state.
#[derive(Clone)]
pub struct AuthStore {
    state: Rc<RefCell<AuthState>>,
    listeners: Rc<RefCell<Vec<Listener>>>,
    mounted: Arc<AtomicBool>,
}

impl Default for AuthStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(AuthState::default())),
            listeners: Rc::new(RefCell::new(Vec::new())),
            mounted: Arc::new(AtomicBool::new(true)),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> AuthState {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }

    pub(crate) fn mounted_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.mounted)
    }

    /// Register `listener` to receive a snapshot after every mutation that
    /// changes the state.
    pub fn watch(&self, listener: impl Fn(&AuthState) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    /// Record the outcome of the initial session check.
    pub fn resolve_initial(&self, result: Result<Option<User>, AuthError>) {
        self.mutate(|state| {
            match result {
                Ok(user) => state.user = user,
                Err(error) => state.error = Some(error),
            }
            state.loading = false;
        });
    }

    /// Apply one lifecycle event. Returns whether the state changed.
    pub fn apply_event(&self, event: &AuthEvent) -> bool {
        self.mutate(|state| match (event.kind, event.user()) {
            (AuthEventKind::SignedIn, Some(user)) => {
                state.user = Some(user.clone());
                state.error = None;
            }
            (AuthEventKind::SignedOut, _) => {
                state.user = None;
                state.error = None;
            }
            (AuthEventKind::TokenRefreshed, Some(user)) => {
                state.user = Some(user.clone());
            }
            _ => {}
        })
    }

    pub fn set_error(&self, error: AuthError) {
        self.mutate(|state| state.error = Some(error));
    }

    /// Drop the last error without touching `user`.
    pub fn clear_error(&self) {
        self.mutate(|state| state.error = None);
    }

    /// Stop accepting mutations. Terminal.
    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::Release);
    }

    fn mutate(&self, update: impl FnOnce(&mut AuthState)) -> bool {
        if !self.is_mounted() {
            log::debug!("auth store unmounted; ignoring mutation");
            return false;
        }

        let snapshot = {
            let mut state = self.state.borrow_mut();
            let before = state.clone();
            update(&mut state);
            if *state == before {
                return false;
            }
            state.clone()
        };

        for listener in self.listeners.borrow().iter() {
            listener(&snapshot);
        }
        true
    }
}
