use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Default backend origin used in local development.
///
/// Mirrors the dev reverse-proxy target: the login path prefixes and /api
/// are forwarded to a backend on this port when no explicit URL is set.
const DEFAULT_API_URL: &str = "http://localhost:3000";

/// Application configuration wrapper.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Default for Config {
    fn default() -> Self {
        let mut builder = AppConfig::builder();
        if let Ok(url) = std::env::var("WORKIO_API_URL") {
            if !url.is_empty() {
                builder = builder.api_base_url(url);
            }
        }
        let app = builder.build().unwrap_or_else(|e| {
            tracing::warn!("ignoring WORKIO_API_URL: {}", e);
            AppConfig::default()
        });
        Self { app }
    }
}

impl Config {
    /// Create a new configuration from the environment
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    /// Configuration pointing at an explicit base URL (used by tests)
    pub fn with_base_url(url: impl Into<String>) -> Self {
        Self {
            app: AppConfig {
                api_base_url: Some(url.into()),
            },
        }
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url(), path)
    }

    pub fn base_url(&self) -> &str {
        self.app.api_base_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }
}
