//! Scripted identity client and recording notifier for unit tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;

use crate::client::{EventHub, EventStream, IdentityClient, Subscription};
use crate::notify::{Notice, Notifier};
use crate::types::{AuthError, AuthEvent, Credentials, Session, User};

#[must_use]
pub fn user(id: &str) -> User {
    User {
        id: id.to_owned(),
        email: Some(format!("{id}@example.com")),
        created_at: None,
        email_confirmed_at: Some("2024-01-01T00:00:00Z".to_owned()),
        user_metadata: serde_json::json!({}),
    }
}

#[must_use]
pub fn session(id: &str) -> Session {
    Session {
        access_token: format!("access-{id}"),
        refresh_token: format!("refresh-{id}"),
        token_type: "bearer".to_owned(),
        expires_in: 3600,
        expires_at: None,
        user: user(id),
    }
}

/// In-memory identity client. Responses are queued per operation; events are
/// only delivered when a test calls [`FakeIdentityClient::emit`].
#[derive(Default)]
pub struct FakeIdentityClient {
    pub hub: EventHub,
    pub get_session_results: RefCell<VecDeque<Result<Option<Session>, AuthError>>>,
    pub sign_in_results: RefCell<VecDeque<Result<Option<User>, AuthError>>>,
    pub sign_up_results: RefCell<VecDeque<Result<Option<User>, AuthError>>>,
    pub sign_out_results: RefCell<VecDeque<Result<(), AuthError>>>,
    pub subscribe_calls: Cell<usize>,
    pub last_credentials: RefCell<Option<Credentials>>,
}

impl FakeIdentityClient {
    #[must_use]
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn emit(&self, event: AuthEvent) {
        self.hub.emit(&event);
    }
}

#[async_trait(?Send)]
impl IdentityClient for FakeIdentityClient {
    async fn get_session(&self) -> Result<Option<Session>, AuthError> {
        self.get_session_results.borrow_mut().pop_front().unwrap_or(Ok(None))
    }

    fn on_auth_state_change(&self) -> (Subscription, EventStream) {
        self.subscribe_calls.set(self.subscribe_calls.get() + 1);
        self.hub.subscribe()
    }

    async fn sign_in_with_password(&self, credentials: &Credentials) -> Result<Option<User>, AuthError> {
        *self.last_credentials.borrow_mut() = Some(credentials.clone());
        self.sign_in_results.borrow_mut().pop_front().unwrap_or(Ok(None))
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<Option<User>, AuthError> {
        *self.last_credentials.borrow_mut() = Some(credentials.clone());
        self.sign_up_results.borrow_mut().pop_front().unwrap_or(Ok(None))
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.sign_out_results.borrow_mut().pop_front().unwrap_or(Ok(()))
    }
}

/// Notifier that keeps every notice it receives.
#[derive(Default)]
pub struct RecordingNotifier {
    pub notices: RefCell<Vec<Notice>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    #[must_use]
    pub fn taken(&self) -> Vec<Notice> {
        self.notices.borrow_mut().drain(..).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}
