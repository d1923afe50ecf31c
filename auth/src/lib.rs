//! Authentication session core shared by the Gatehouse UI.
//!
//! This crate owns the session lifecycle independent of any UI framework:
//! the data model, the identity-client boundary, the auth state store fed by
//! lifecycle events, the sign-in/sign-up/sign-out action wrappers, and the
//! route-guard state machine.
//!
//! CONCURRENCY
//! ===========
//! Everything here runs on one cooperative thread (the browser event loop).
//! Shared state is `Rc<RefCell<_>>`, and lifecycle events arrive over a
//! `futures` mpsc channel consumed by a single driver task.

pub mod client;
pub mod guard;
pub mod notify;
pub mod provider;
pub mod routes;
pub mod store;
pub mod types;

#[cfg(test)]
mod test_helpers;

pub use client::{EventHub, EventStream, IdentityClient, Subscription};
pub use guard::GuardState;
pub use notify::{Notice, NoticeLevel, Notifier};
pub use provider::{AuthHandle, AuthProvider};
pub use routes::AppRoute;
pub use store::{AuthState, AuthStore};
pub use types::{AuthError, AuthErrorKind, AuthEvent, AuthEventKind, AuthResult, Credentials, Session, User};
