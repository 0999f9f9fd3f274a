use std::time::Duration;

use crate::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://dispositivos-moviles-fastapi.onrender.com/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

pub const BASE_URL_ENV: &str = "ROSTER_BASE_URL";
pub const API_KEY_ENV: &str = "ROSTER_API_KEY";
pub const TIMEOUT_ENV: &str = "ROSTER_TIMEOUT_SECS";

/// Connection settings for [`crate::RemoteStudentClient`].
///
/// The same timeout bounds connecting and the whole request (write and read).
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    api_key: String,
    timeout: Duration,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: normalize_base_url(DEFAULT_BASE_URL),
            api_key: String::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl AsRef<str>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.as_ref()),
            api_key: api_key.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Defaults overridden by `ROSTER_BASE_URL`, `ROSTER_API_KEY` and `ROSTER_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`ClientConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|value| !value.trim().is_empty()) {
            config = config.with_base_url(base_url);
        }
        if let Some(api_key) = lookup(API_KEY_ENV) {
            config = config.with_api_key(api_key);
        }
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            config = config.with_timeout(parse_timeout_secs(&raw)?);
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.base_url = normalize_base_url(base_url.as_ref());
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        let lowered = self.base_url.to_ascii_lowercase();
        let has_scheme = ["https://", "http://"]
            .iter()
            .any(|scheme| lowered.starts_with(scheme) && lowered.len() > scheme.len());
        if !has_scheme {
            return Err(ConfigError::InvalidBaseUrl {
                value: self.base_url.clone(),
            });
        }

        if self.timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout {
                value: String::from("0"),
            });
        }

        Ok(())
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// `{base}/{path}` with exactly one separating slash.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

/// Parse a whole, positive number of seconds.
pub fn parse_timeout_secs(raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout {
            value: raw.to_owned(),
        }),
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
