//! Host configuration parsed from environment variables.
//!
//! Optional (all have defaults):
//! - `PORT`: listen port, default 3000
//! - `API_UPSTREAM_URL`: REST backend the `/api` proxy forwards to
//! - `API_PROXY_TIMEOUT_SECS`: per-request upstream timeout, default 30

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_UPSTREAM_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
    #[error("API_UPSTREAM_URL must start with http:// or https://, got {0:?}")]
    UpstreamScheme(String),
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Upstream API base, without a trailing slash.
    pub api_upstream_url: String,
    pub proxy_timeout_secs: u64,
}

impl HostConfig {
    /// Build typed config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set but unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`HostConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let proxy_timeout_secs =
            parse_or("API_PROXY_TIMEOUT_SECS", lookup("API_PROXY_TIMEOUT_SECS"), DEFAULT_PROXY_TIMEOUT_SECS)?;

        let api_upstream_url = lookup("API_UPSTREAM_URL")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_UPSTREAM_URL.to_owned());
        if !(api_upstream_url.starts_with("http://") || api_upstream_url.starts_with("https://")) {
            return Err(ConfigError::UpstreamScheme(api_upstream_url));
        }
        let api_upstream_url = api_upstream_url.trim_end_matches('/').to_owned();

        Ok(Self { port, api_upstream_url, proxy_timeout_secs })
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { var, value }),
    }
}
