//! Server configuration parsed from environment variables.
//!
//! Variables may come from the process environment or a `.env` file loaded
//! by `main` before this runs.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT '{0}' (expected 1-65535)")]
    InvalidPort(String),
    #[error("HOST must not be blank")]
    BlankHost,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: default `0.0.0.0`
    /// - `PORT`: default 3000
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is not a non-zero `u16` or `HOST` is blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(std::env::var("HOST").ok().as_deref(), std::env::var("PORT").ok().as_deref())
    }

    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_values(host: Option<&str>, port: Option<&str>) -> Result<Self, ConfigError> {
        let host = match host {
            None => DEFAULT_HOST.to_owned(),
            Some(raw) if raw.trim().is_empty() => return Err(ConfigError::BlankHost),
            Some(raw) => raw.trim().to_owned(),
        };
        Ok(Self { host, port: parse_port(port)? })
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_PORT);
    };
    match raw.trim().parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort(raw.to_owned())),
    }
}
