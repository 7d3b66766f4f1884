//! Application configuration.

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

use storefront_data::{Backoff, FetchPolicy, RetryPolicy};

/// Default config file looked up next to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "storefront.toml";

/// Top-level configuration, loaded from TOML.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceConfig,
}

/// Product service connection settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Base URL of the product service.
    pub base_url: String,
    /// Per-attempt deadline in milliseconds.
    pub timeout_ms: u64,
    /// Retries after the initial attempt.
    pub max_retries: u32,
    /// Base backoff delay in milliseconds.
    pub backoff_ms: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_ms: 3000,
            max_retries: 1,
            backoff_ms: 50,
        }
    }
}

impl AppConfig {
    /// Load configuration.
    ///
    /// An explicit path must parse; without one, `storefront.toml` is used
    /// when present, defaults otherwise.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("could not read config at {}", path.display()))?;
                toml::from_str(&text)
                    .with_context(|| format!("invalid config at {}", path.display()))
            }
            None => {
                let default = Path::new(DEFAULT_CONFIG_PATH);
                if default.exists() {
                    Self::load(Some(default))
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Fetch policy derived from the service settings.
    pub fn fetch_policy(&self) -> FetchPolicy {
        let base = Duration::from_millis(self.service.backoff_ms);
        FetchPolicy::new(
            Duration::from_millis(self.service.timeout_ms),
            RetryPolicy::new(self.service.max_retries).with_backoff(Backoff::Exponential {
                base,
                max: base.saturating_mul(10),
            }),
        )
    }
}
