//! Identity client for a GoTrue-compatible auth API (Supabase Auth).
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, session kept in
//! memory and mirrored to `localStorage`.
//! Server-side (SSR) and tests: requests fail with a transport error since
//! the provider is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses are decoded into `AuthError` with a kind taken from the
//! provider's `error_code`; anything that fails before a response arrives is
//! a `Transport` error. Nothing here panics.
//!
//! EVENTS
//! ======
//! `InitialSession` after the first session read, `TokenRefreshed` when an
//! expired persisted session is renewed, `SignedIn` after password sign-in or
//! an auto-confirmed sign-up, `SignedOut` after sign-out.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "gotrue_test.rs"]
mod gotrue_test;

use std::cell::RefCell;

use async_trait::async_trait;
use auth::{
    AuthError, AuthEvent, AuthEventKind, Credentials, EventHub, EventStream, IdentityClient, Session, Subscription,
    User,
};
use serde::Deserialize;

use super::session_storage;
use crate::config::{ConfigError, IdentityConfig};

const PASSWORD_GRANT_PATH: &str = "token?grant_type=password";
const REFRESH_GRANT_PATH: &str = "token?grant_type=refresh_token";
const SIGNUP_PATH: &str = "signup";
const LOGOUT_PATH: &str = "logout";

/// Refresh a persisted session this many seconds before it expires.
const REFRESH_MARGIN_SECS: i64 = 60;

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(base_url: &str, path: &str) -> String {
    format!("{base_url}/auth/v1/{path}")
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error_code: Option<String>,
    msg: Option<String>,
    message: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
}

/// Decode a non-2xx provider response.
#[cfg(any(test, feature = "hydrate"))]
fn error_from_response(status: u16, body: &str) -> AuthError {
    use auth::AuthErrorKind;

    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let code = parsed.error_code.as_deref().or(parsed.error.as_deref());
    let kind = match (status, code.map(AuthErrorKind::from_code)) {
        (429, _) => AuthErrorKind::RateLimited,
        (_, Some(kind)) if kind != AuthErrorKind::Provider => kind,
        (401 | 403, _) => AuthErrorKind::SessionMissing,
        _ => AuthErrorKind::Provider,
    };
    let message = parsed
        .msg
        .or(parsed.message)
        .or(parsed.error_description)
        .or(parsed.error)
        .unwrap_or_else(|| format!("auth request failed: {status}"));
    AuthError::new(kind, message)
}

fn parse_session(body: &str) -> Result<Session, AuthError> {
    serde_json::from_str(body).map_err(|e| AuthError::transport(format!("unexpected session response: {e}")))
}

/// Sign-up answers with a full session when the account is auto-confirmed,
/// and with the bare user while email confirmation is pending.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SignUpResponse {
    Session(Session),
    User(User),
}

fn parse_sign_up(body: &str) -> Result<SignUpResponse, AuthError> {
    serde_json::from_str(body).map_err(|e| AuthError::transport(format!("unexpected sign-up response: {e}")))
}

/// Fill in `expires_at` from `expires_in` when the provider omitted it.
fn stamp_expiry(mut session: Session, now: i64) -> Session {
    if session.expires_at.is_none() {
        session.expires_at = Some(now.saturating_add(session.expires_in));
    }
    session
}

fn needs_refresh(session: &Session, now: i64) -> bool {
    session.expires_at.map_or(false, |expires_at| expires_at.saturating_sub(REFRESH_MARGIN_SECS) <= now)
}

#[allow(clippy::cast_possible_truncation)]
fn now_secs() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        (js_sys::Date::now() / 1000.0) as i64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
    }
}

#[cfg(feature = "hydrate")]
fn transport(err: impl std::fmt::Display) -> AuthError {
    AuthError::transport(err.to_string())
}

// =============================================================================
// CLIENT
// =============================================================================

/// Browser client for the hosted identity provider.
pub struct GoTrueClient {
    config: Result<IdentityConfig, ConfigError>,
    hub: EventHub,
    session: RefCell<Option<Session>>,
}

impl GoTrueClient {
    /// Build a client. A configuration error is kept and reported by every
    /// call, so the app still renders and surfaces it through auth state.
    #[must_use]
    pub fn new(config: Result<IdentityConfig, ConfigError>) -> Self {
        if let Err(err) = &config {
            log::error!("identity provider not configured: {err}");
        }
        Self { config, hub: EventHub::new(), session: RefCell::new(None) }
    }

    #[must_use]
    pub fn from_build_env() -> Self {
        Self::new(IdentityConfig::from_build_env())
    }

    fn config(&self) -> Result<&IdentityConfig, AuthError> {
        self.config.as_ref().map_err(|e| e.clone().into())
    }

    fn remember(&self, session: Session) -> Session {
        let session = stamp_expiry(session, now_secs());
        session_storage::save(&session);
        *self.session.borrow_mut() = Some(session.clone());
        session
    }

    fn forget(&self) {
        session_storage::clear();
        *self.session.borrow_mut() = None;
    }

    async fn refresh(&self, refresh_token: &str) -> Result<Session, AuthError> {
        let payload = serde_json::json!({ "refresh_token": refresh_token });
        let body = self.post(REFRESH_GRANT_PATH, &payload, None).await?;
        parse_session(&body)
    }

    /// POST `payload` to `/auth/v1/{path}` and return the raw 2xx body.
    async fn post(&self, path: &str, payload: &serde_json::Value, bearer: Option<&str>) -> Result<String, AuthError> {
        let config = self.config()?;
        #[cfg(feature = "hydrate")]
        {
            let url = endpoint(&config.url, path);
            let mut request = gloo_net::http::Request::post(&url).header("apikey", &config.anon_key);
            if let Some(token) = bearer {
                request = request.header("Authorization", &format!("Bearer {token}"));
            }
            let resp = request.json(payload).map_err(transport)?.send().await.map_err(transport)?;
            let status = resp.status();
            let body = resp.text().await.map_err(transport)?;
            if !resp.ok() {
                return Err(error_from_response(status, &body));
            }
            Ok(body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (config, path, payload, bearer);
            Err(AuthError::transport("not available on server"))
        }
    }
}

#[async_trait(?Send)]
impl IdentityClient for GoTrueClient {
    async fn get_session(&self) -> Result<Option<Session>, AuthError> {
        self.config()?;

        let current = self.session.borrow().clone().or_else(session_storage::load);
        let Some(stored) = current else {
            self.hub.emit(&AuthEvent::new(AuthEventKind::InitialSession, None));
            return Ok(None);
        };

        let session = if needs_refresh(&stored, now_secs()) {
            match self.refresh(&stored.refresh_token).await {
                Ok(fresh) => {
                    let fresh = self.remember(fresh);
                    self.hub.emit(&AuthEvent::token_refreshed(fresh.clone()));
                    fresh
                }
                Err(err) => {
                    if err.is_provider_reported() {
                        self.forget();
                    }
                    return Err(err);
                }
            }
        } else {
            *self.session.borrow_mut() = Some(stored.clone());
            stored
        };

        self.hub.emit(&AuthEvent::new(AuthEventKind::InitialSession, Some(session.clone())));
        Ok(Some(session))
    }

    fn on_auth_state_change(&self) -> (Subscription, EventStream) {
        self.hub.subscribe()
    }

    async fn sign_in_with_password(&self, credentials: &Credentials) -> Result<Option<User>, AuthError> {
        let payload = serde_json::json!({ "email": credentials.email, "password": credentials.password });
        let body = self.post(PASSWORD_GRANT_PATH, &payload, None).await?;
        let session = self.remember(parse_session(&body)?);
        self.hub.emit(&AuthEvent::signed_in(session.clone()));
        Ok(Some(session.user))
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<Option<User>, AuthError> {
        let payload = serde_json::json!({ "email": credentials.email, "password": credentials.password });
        let body = self.post(SIGNUP_PATH, &payload, None).await?;
        match parse_sign_up(&body)? {
            SignUpResponse::Session(session) => {
                let session = self.remember(session);
                self.hub.emit(&AuthEvent::signed_in(session.clone()));
                Ok(Some(session.user))
            }
            SignUpResponse::User(user) => {
                log::info!("sign-up for {} awaits email confirmation", credentials.email);
                Ok(Some(user))
            }
        }
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        let token = self.session.borrow().as_ref().map(|s| s.access_token.clone());
        if let Some(token) = token {
            match self.post(LOGOUT_PATH, &serde_json::json!({}), Some(&token)).await {
                Ok(_) => {}
                // The provider already dropped the session; finish locally.
                Err(err) if err.kind == auth::AuthErrorKind::SessionMissing => {
                    log::debug!("logout for unknown session: {err}");
                }
                Err(err) => return Err(err),
            }
        }
        self.forget();
        self.hub.emit(&AuthEvent::signed_out());
        Ok(())
    }
}
