use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub feed: FeedConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FeedConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    /// Per-request timeout. None means the client default (no timeout).
    #[serde(default)]
    pub request_timeout_s: Option<u64>,
}

fn default_base_url() -> String {
    "https://qiita.com/api/v2".to_string()
}
fn default_page() -> u32 { 1 }
fn default_per_page() -> u32 { 20 }

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page: default_page(),
            per_page: default_per_page(),
            request_timeout_s: None,
        }
    }
}

impl Config {
    /// Load config from a TOML file. A missing file is not an error: the
    /// app runs fine on defaults alone.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| "Failed to parse config TOML")?;
        Ok(config)
    }
}
