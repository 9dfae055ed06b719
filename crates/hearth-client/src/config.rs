//! Client configuration loaded from environment variables.
//!
//! All settings have sensible defaults so the app can start in demo mode
//! with zero configuration.

use std::time::Duration;

/// Which backend the data service talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Seeded in-process store, persisted to a JSON snapshot.
    Local,
    /// REST backend at [`AppConfig::api_base`].
    Remote,
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Backend selection.
    /// Env: `HEARTH_MODE` (`local`/`remote`)
    /// Default: `local`
    pub mode: Mode,

    /// Base URL of the REST API, no trailing slash.
    /// Env: `HEARTH_API_BASE`
    /// Default: `http://127.0.0.1:3000/api`
    pub api_base: String,

    /// Per-request timeout for remote calls.
    /// Env: `HEARTH_TIMEOUT_SECS`
    /// Default: 10 seconds.
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Local,
            api_base: "http://127.0.0.1:3000/api".to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl AppConfig {
    /// Local demo-mode configuration.
    pub fn local() -> Self {
        Self::default()
    }

    /// Remote configuration against the given API base.
    pub fn remote(api_base: impl Into<String>) -> Self {
        Self {
            mode: Mode::Remote,
            api_base: api_base.into(),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables, falling back to
    /// defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(mode) = std::env::var("HEARTH_MODE") {
            match mode.as_str() {
                "remote" => config.mode = Mode::Remote,
                "local" => config.mode = Mode::Local,
                other => {
                    tracing::warn!(value = %other, "Invalid HEARTH_MODE, using local");
                }
            }
        }

        if let Ok(base) = std::env::var("HEARTH_API_BASE") {
            config.api_base = base.trim_end_matches('/').to_string();
        }

        if let Ok(val) = std::env::var("HEARTH_TIMEOUT_SECS") {
            if let Ok(secs) = val.parse::<u64>() {
                config.request_timeout = Duration::from_secs(secs);
            } else {
                tracing::warn!(value = %val, "Invalid HEARTH_TIMEOUT_SECS, using default");
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.mode, Mode::Local);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_remote_constructor() {
        let config = AppConfig::remote("https://api.example.com/api");
        assert_eq!(config.mode, Mode::Remote);
        assert_eq!(config.api_base, "https://api.example.com/api");
    }
}
