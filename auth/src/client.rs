//! Boundary with the hosted identity provider's client.
//!
//! ARCHITECTURE
//! ============
//! The provider client is a trait so the store and actions can run against
//! the real HTTP client in the browser and a scripted fake in tests.
//! Lifecycle events fan out through an [`EventHub`]: each subscriber gets its
//! own unbounded channel plus a [`Subscription`] that removes the sender when
//! released, which ends the subscriber's stream once buffered events drain.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use async_trait::async_trait;
use futures::channel::mpsc;

use crate::types::{AuthError, AuthEvent, Credentials, Session, User};

/// Receiving half of a lifecycle subscription.
pub type EventStream = mpsc::UnboundedReceiver<AuthEvent>;

/// Operations the auth layer needs from the identity provider's client.
///
/// Futures are `!Send`: implementations run on the browser event loop.
#[async_trait(?Send)]
pub trait IdentityClient {
    /// Current session, if one exists.
    async fn get_session(&self) -> Result<Option<Session>, AuthError>;

    /// Subscribe to lifecycle events. Events are delivered in emission order.
    fn on_auth_state_change(&self) -> (Subscription, EventStream);

    async fn sign_in_with_password(&self, credentials: &Credentials) -> Result<Option<User>, AuthError>;

    /// Register a new account. `Ok(None)` means the provider accepted the
    /// request without returning a user.
    async fn sign_up(&self, credentials: &Credentials) -> Result<Option<User>, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;
}

// =============================================================================
// EVENT HUB
// =============================================================================

#[derive(Default)]
struct HubInner {
    next_id: u64,
    subscribers: Vec<(u64, mpsc::UnboundedSender<AuthEvent>)>,
}

/// Fan-out of lifecycle events to every live subscriber.
#[derive(Clone, Default)]
pub struct EventHub {
    inner: Rc<RefCell<HubInner>>,
}

impl EventHub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber and return its release handle and event stream.
    #[must_use]
    pub fn subscribe(&self) -> (Subscription, EventStream) {
        let (tx, rx) = mpsc::unbounded();
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push((id, tx));
        log::debug!("auth event subscriber {id} registered");
        (Subscription { id, hub: Rc::downgrade(&self.inner), released: false }, rx)
    }

    /// Deliver `event` to every subscriber. Subscribers whose receiver is gone
    /// are dropped.
    pub fn emit(&self, event: &AuthEvent) {
        log::debug!("auth event {:?}", event.kind);
        self.inner
            .borrow_mut()
            .subscribers
            .retain(|(_, tx)| tx.unbounded_send(event.clone()).is_ok());
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}

/// Release handle for one lifecycle subscription.
///
/// [`Subscription::release`] consumes the handle, and dropping an unreleased
/// handle releases it, so a subscription is released exactly once.
pub struct Subscription {
    id: u64,
    hub: Weak<RefCell<HubInner>>,
    released: bool,
}

impl Subscription {
    pub fn release(mut self) {
        self.release_inner();
    }

    fn release_inner(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        if let Some(hub) = self.hub.upgrade() {
            hub.borrow_mut().subscribers.retain(|(id, _)| *id != self.id);
        }
        log::debug!("auth event subscriber {} released", self.id);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_inner();
    }
}
