//! Identity provider configuration captured at build time.
//!
//! The browser bundle has no runtime environment, so the provider URL and the
//! public (anon) API key are read with `option_env!` when the crate is
//! compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use auth::AuthError;

pub const AUTH_URL_VAR: &str = "GATEHOUSE_AUTH_URL";
pub const AUTH_ANON_KEY_VAR: &str = "GATEHOUSE_AUTH_ANON_KEY";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} was not set when the client was built")]
    Missing { var: &'static str },
    #[error("invalid identity provider URL '{url}' (expected http:// or https://)")]
    InvalidUrl { url: String },
}

impl From<ConfigError> for AuthError {
    fn from(err: ConfigError) -> Self {
        AuthError::configuration(err.to_string())
    }
}

/// Location and public key of the hosted identity provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentityConfig {
    /// Base URL without trailing slash, e.g. `https://xyz.supabase.co`.
    pub url: String,
    pub anon_key: String,
}

impl IdentityConfig {
    /// Read `GATEHOUSE_AUTH_URL` and `GATEHOUSE_AUTH_ANON_KEY` as captured at
    /// compile time.
    ///
    /// # Errors
    ///
    /// Returns an error if either variable was unset/blank or the URL is not
    /// http(s).
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("GATEHOUSE_AUTH_URL"), option_env!("GATEHOUSE_AUTH_ANON_KEY"))
    }

    /// Validate raw values.
    ///
    /// # Errors
    ///
    /// Same as [`IdentityConfig::from_build_env`].
    pub fn from_values(url: Option<&str>, anon_key: Option<&str>) -> Result<Self, ConfigError> {
        let url = non_blank(url).ok_or(ConfigError::Missing { var: AUTH_URL_VAR })?;
        let anon_key = non_blank(anon_key).ok_or(ConfigError::Missing { var: AUTH_ANON_KEY_VAR })?;
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::InvalidUrl { url: url.to_owned() });
        }
        Ok(Self { url: url.trim_end_matches('/').to_owned(), anon_key: anon_key.to_owned() })
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}
