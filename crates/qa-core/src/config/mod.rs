//! Client configuration for the QA backend.
//!
//! Values come from the environment (`QA_API_BASE_URL`,
//! `QA_HTTP_TIMEOUT_SECS`); frontends may override the base URL.

use std::time::Duration;

use crate::error::{Error, Result};

/// Backend used when `QA_API_BASE_URL` is not set.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Environment variable holding the backend base URL.
pub const API_BASE_URL_ENV: &str = "QA_API_BASE_URL";

/// Environment variable holding an optional request timeout in seconds.
pub const HTTP_TIMEOUT_ENV: &str = "QA_HTTP_TIMEOUT_SECS";

/// Connection settings for [`crate::api::HttpQaApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_base_url: String,
    request_timeout: Option<Duration>,
}

impl ClientConfig {
    /// Config for an explicit base URL with no request timeout.
    pub fn new(api_base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            api_base_url: normalize_base_url(&api_base_url.into())?,
            request_timeout: None,
        })
    }

    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_url = non_blank_var(&lookup, API_BASE_URL_ENV)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let timeout = match non_blank_var(&lookup, HTTP_TIMEOUT_ENV) {
            Some(raw) => Some(parse_timeout_secs(&raw)?),
            None => None,
        };

        Ok(Self::new(base_url)?.with_timeout(timeout))
    }

    /// Replace the base URL, keeping other settings.
    pub fn with_base_url(self, api_base_url: &str) -> Result<Self> {
        Ok(Self {
            api_base_url: normalize_base_url(api_base_url)?,
            ..self
        })
    }

    /// Set the per-request timeout. `None` waits indefinitely.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Normalized base URL without a trailing slash.
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    /// Per-request timeout, if any.
    pub const fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }
}

/// Trim whitespace and trailing slashes, and require an http(s) scheme.
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let base = raw.trim().trim_end_matches('/').to_string();
    if base.is_empty() {
        return Err(Error::InvalidInput(
            "API base URL must not be empty".to_string(),
        ));
    }
    let has_http_scheme =
        url::Url::parse(&base).is_ok_and(|url| matches!(url.scheme(), "http" | "https"));
    if !has_http_scheme {
        return Err(Error::InvalidInput(
            "API base URL must include http:// or https://".to_string(),
        ));
    }
    Ok(base)
}

/// Variables set to whitespace count as unset.
fn non_blank_var(lookup: impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    let value = lookup(name)?;
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn parse_timeout_secs(raw: &str) -> Result<Duration> {
    match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(Error::InvalidInput(format!(
            "{HTTP_TIMEOUT_ENV} must be a positive number of seconds, got '{raw}'"
        ))),
    }
}
