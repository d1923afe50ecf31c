use super::*;

fn user(id: &str) -> User {
    User {
        id: id.to_owned(),
        email: None,
        created_at: None,
        email_confirmed_at: None,
        user_metadata: empty_metadata(),
    }
}

// =============================================================================
// User
// =============================================================================

#[test]
fn user_deserializes_with_missing_optional_fields() {
    let user: User = serde_json::from_str(r#"{"id":"u-1","aud":"authenticated"}"#).unwrap();
    assert_eq!(user.id, "u-1");
    assert!(user.email.is_none());
    assert_eq!(user.user_metadata, serde_json::json!({}));
}

#[test]
fn display_name_prefers_full_name_then_email_then_id() {
    let mut u = user("u-1");
    assert_eq!(u.display_name(), "u-1");

    u.email = Some("ada@example.com".to_owned());
    assert_eq!(u.display_name(), "ada@example.com");

    u.user_metadata = serde_json::json!({ "full_name": "Ada Lovelace" });
    assert_eq!(u.display_name(), "Ada Lovelace");
}

#[test]
fn confirmation_follows_email_confirmed_at() {
    let pending: User = serde_json::from_str(r#"{"id":"u-1","email":"a@b.com"}"#).unwrap();
    assert!(!pending.is_confirmed());

    let confirmed: User =
        serde_json::from_str(r#"{"id":"u-1","email_confirmed_at":"2024-01-01T00:00:00Z"}"#).unwrap();
    assert!(confirmed.is_confirmed());
}

#[test]
fn display_name_ignores_blank_full_name() {
    let mut u = user("u-1");
    u.email = Some("ada@example.com".to_owned());
    u.user_metadata = serde_json::json!({ "full_name": "   " });
    assert_eq!(u.display_name(), "ada@example.com");
}

// =============================================================================
// Session
// =============================================================================

#[test]
fn session_deserializes_provider_token_response() {
    let json = serde_json::json!({
        "access_token": "at",
        "refresh_token": "rt",
        "token_type": "bearer",
        "expires_in": 3600,
        "expires_at": 1_700_000_000,
        "user": { "id": "u-1", "email": "a@b.com" }
    });
    let session: Session = serde_json::from_value(json).unwrap();
    assert_eq!(session.expires_at, Some(1_700_000_000));
    assert_eq!(session.user.email.as_deref(), Some("a@b.com"));
}

#[test]
fn session_debug_hides_tokens() {
    let session = Session {
        access_token: "secret-access".to_owned(),
        refresh_token: "secret-refresh".to_owned(),
        token_type: "bearer".to_owned(),
        expires_in: 3600,
        expires_at: None,
        user: user("u-1"),
    };
    let rendered = format!("{session:?}");
    assert!(!rendered.contains("secret-access"));
    assert!(!rendered.contains("secret-refresh"));
    assert!(rendered.contains("u-1"));
}

#[test]
fn credentials_debug_redacts_password() {
    let creds = Credentials::new("a@b.com", "hunter22");
    let rendered = format!("{creds:?}");
    assert!(rendered.contains("a@b.com"));
    assert!(!rendered.contains("hunter22"));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn transport_and_configuration_are_not_provider_reported() {
    assert!(!AuthError::transport("offline").is_provider_reported());
    assert!(!AuthError::configuration("missing url").is_provider_reported());
    assert!(AuthError::new(AuthErrorKind::InvalidCredentials, "nope").is_provider_reported());
    assert!(AuthError::new(AuthErrorKind::Provider, "nope").is_provider_reported());
}

#[test]
fn error_display_is_the_message() {
    let err = AuthError::new(AuthErrorKind::RateLimited, "Too many requests");
    assert_eq!(err.to_string(), "Too many requests");
}

#[test]
fn from_code_maps_known_provider_codes() {
    assert_eq!(AuthErrorKind::from_code("invalid_credentials"), AuthErrorKind::InvalidCredentials);
    assert_eq!(AuthErrorKind::from_code("email_not_confirmed"), AuthErrorKind::EmailNotConfirmed);
    assert_eq!(AuthErrorKind::from_code("user_already_exists"), AuthErrorKind::UserAlreadyExists);
    assert_eq!(AuthErrorKind::from_code("weak_password"), AuthErrorKind::WeakPassword);
    assert_eq!(AuthErrorKind::from_code("over_request_rate_limit"), AuthErrorKind::RateLimited);
    assert_eq!(AuthErrorKind::from_code("session_not_found"), AuthErrorKind::SessionMissing);
    assert_eq!(AuthErrorKind::from_code("something_new"), AuthErrorKind::Provider);
}

// =============================================================================
// Events
// =============================================================================

#[test]
fn event_kind_uses_provider_names() {
    let kind: AuthEventKind = serde_json::from_str("\"TOKEN_REFRESHED\"").unwrap();
    assert_eq!(kind, AuthEventKind::TokenRefreshed);
    assert_eq!(serde_json::to_string(&AuthEventKind::SignedOut).unwrap(), "\"SIGNED_OUT\"");
}

#[test]
fn signed_out_event_has_no_user() {
    assert!(AuthEvent::signed_out().user().is_none());
}
