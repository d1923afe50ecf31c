//! Identity data model mirrored from the hosted provider.
//!
//! DESIGN
//! ======
//! `User` and `Session` deserialize straight from the provider's JSON so the
//! HTTP client can hand them over without a translation layer. Unknown fields
//! are ignored.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity record issued by the provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Provider-assigned unique identifier.
    pub id: String,
    /// Primary email address, if the account has one.
    #[serde(default)]
    pub email: Option<String>,
    /// Account creation timestamp (RFC 3339), as reported by the provider.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Set once the email address is verified; absent while sign-up
    /// confirmation is pending.
    #[serde(default)]
    pub email_confirmed_at: Option<String>,
    /// Free-form profile metadata.
    #[serde(default = "empty_metadata")]
    pub user_metadata: serde_json::Value,
}

fn empty_metadata() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl User {
    /// Best label for greeting the user: metadata `full_name`, then email, then id.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.user_metadata
            .get("full_name")
            .and_then(serde_json::Value::as_str)
            .filter(|name| !name.trim().is_empty())
            .or(self.email.as_deref())
            .unwrap_or(&self.id)
    }

    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        self.email_confirmed_at.is_some()
    }
}

/// Provider-issued proof of authentication.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    /// Lifetime of `access_token` in seconds, counted from issue.
    #[serde(default)]
    pub expires_in: i64,
    /// Absolute expiry in unix seconds, when the provider reports one.
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: User,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

// Tokens stay out of logs.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token_type", &self.token_type)
            .field("expires_at", &self.expires_at)
            .field("user", &self.user.id)
            .finish_non_exhaustive()
    }
}

/// Email + password pair submitted by the sign-in and sign-up forms.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

// =============================================================================
// ERRORS
// =============================================================================

/// Classification of an auth failure, following the provider's error taxonomy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthErrorKind {
    InvalidCredentials,
    EmailNotConfirmed,
    UserAlreadyExists,
    WeakPassword,
    RateLimited,
    SessionMissing,
    /// Any other failure reported by the provider.
    Provider,
    /// Network or decoding failure while talking to the provider.
    Transport,
    /// The identity client has no usable configuration.
    Configuration,
}

impl AuthErrorKind {
    /// True when the provider itself rejected the request, as opposed to the
    /// call failing before a provider answer was available.
    #[must_use]
    pub fn is_provider_reported(self) -> bool {
        !matches!(self, Self::Transport | Self::Configuration)
    }

    /// Map a provider `error_code` (e.g. `"invalid_credentials"`) onto a kind.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "invalid_credentials" | "invalid_grant" => Self::InvalidCredentials,
            "email_not_confirmed" => Self::EmailNotConfirmed,
            "user_already_exists" | "email_exists" => Self::UserAlreadyExists,
            "weak_password" => Self::WeakPassword,
            "over_request_rate_limit" | "over_email_send_rate_limit" => Self::RateLimited,
            "session_not_found" | "refresh_token_not_found" | "session_expired" => Self::SessionMissing,
            _ => Self::Provider,
        }
    }
}

/// Error carried in `AuthState.error` and returned from every auth action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct AuthError {
    pub kind: AuthErrorKind,
    pub message: String,
}

impl AuthError {
    #[must_use]
    pub fn new(kind: AuthErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    /// Network/decoding failure; never shown as a provider rejection.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(AuthErrorKind::Transport, message)
    }

    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(AuthErrorKind::Configuration, message)
    }

    #[must_use]
    pub fn is_provider_reported(&self) -> bool {
        self.kind.is_provider_reported()
    }
}

/// Outcome of sign-in and sign-up: the resulting user, if any, or the failure.
pub type AuthResult = Result<Option<User>, AuthError>;

// =============================================================================
// LIFECYCLE EVENTS
// =============================================================================

/// Kind of lifecycle notification emitted by the identity client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthEventKind {
    InitialSession,
    SignedIn,
    SignedOut,
    TokenRefreshed,
    UserUpdated,
    PasswordRecovery,
}

/// A lifecycle notification with the session it refers to, if any.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthEvent {
    pub kind: AuthEventKind,
    pub session: Option<Session>,
}

impl AuthEvent {
    #[must_use]
    pub fn new(kind: AuthEventKind, session: Option<Session>) -> Self {
        Self { kind, session }
    }

    #[must_use]
    pub fn signed_in(session: Session) -> Self {
        Self::new(AuthEventKind::SignedIn, Some(session))
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self::new(AuthEventKind::SignedOut, None)
    }

    #[must_use]
    pub fn token_refreshed(session: Session) -> Self {
        Self::new(AuthEventKind::TokenRefreshed, Some(session))
    }

    /// User carried by the event's session.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }
}
