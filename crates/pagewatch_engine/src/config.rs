use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid url '{url}' in config: {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Static startup configuration. Immutable after load.
///
/// ```json
/// {
///     "sleep": 300,
///     "webhooks": [
///         { "webhook": "https://...", "urls": ["https://..."] }
///     ]
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Inter-cycle delay in seconds.
    pub sleep: u64,
    /// Channel definitions, in notification order.
    pub webhooks: Vec<ChannelConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChannelConfig {
    /// Webhook destination URL.
    pub webhook: String,
    /// Watched URLs, in poll order.
    pub urls: Vec<String>,
}

impl Config {
    /// Load and validate the config file. Any failure here is fatal to
    /// startup.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.sleep)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for channel in &self.webhooks {
            check_url(&channel.webhook)?;
            for url in &channel.urls {
                check_url(url)?;
            }
        }
        Ok(())
    }
}

fn check_url(raw: &str) -> Result<(), ConfigError> {
    url::Url::parse(raw)
        .map(|_| ())
        .map_err(|err| ConfigError::InvalidUrl {
            url: raw.to_string(),
            reason: err.to_string(),
        })
}
