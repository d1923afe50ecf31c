use super::*;

#[test]
fn from_values_trims_trailing_slash_and_whitespace() {
    let cfg = IdentityConfig::from_values(Some(" https://abc.supabase.co/ "), Some(" anon ")).unwrap();
    assert_eq!(cfg.url, "https://abc.supabase.co");
    assert_eq!(cfg.anon_key, "anon");
}

#[test]
fn from_values_accepts_plain_http_for_local_stacks() {
    let cfg = IdentityConfig::from_values(Some("http://localhost:54321"), Some("anon")).unwrap();
    assert_eq!(cfg.url, "http://localhost:54321");
}

#[test]
fn from_values_requires_url() {
    assert_eq!(
        IdentityConfig::from_values(None, Some("anon")),
        Err(ConfigError::Missing { var: AUTH_URL_VAR })
    );
    assert_eq!(
        IdentityConfig::from_values(Some("   "), Some("anon")),
        Err(ConfigError::Missing { var: AUTH_URL_VAR })
    );
}

#[test]
fn from_values_requires_anon_key() {
    assert_eq!(
        IdentityConfig::from_values(Some("https://abc.supabase.co"), None),
        Err(ConfigError::Missing { var: AUTH_ANON_KEY_VAR })
    );
}

#[test]
fn from_values_rejects_non_http_url() {
    assert_eq!(
        IdentityConfig::from_values(Some("ftp://abc"), Some("anon")),
        Err(ConfigError::InvalidUrl { url: "ftp://abc".to_owned() })
    );
}

#[test]
fn config_error_converts_to_configuration_auth_error() {
    let err: AuthError = ConfigError::Missing { var: AUTH_URL_VAR }.into();
    assert_eq!(err.kind, auth::AuthErrorKind::Configuration);
    assert!(err.message.contains(AUTH_URL_VAR));
}
