//! Driver configuration, loaded from `<root>/config/scholarpath.yml`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// The hosted backend the original frontend points at.
const DEFAULT_API_BASE_URL: &str = "https://scholarpath-ai-backend.onrender.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Load configuration from `<root>/config/scholarpath.yml`.
///
/// A missing file yields the built-in defaults; a file that exists but does
/// not parse is an error.
pub fn load(root: &str) -> Result<AppConfig> {
    let path = PathBuf::from(root).join("config/scholarpath.yml");

    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {:?}", path))?;

    let config: AppConfig = serde_yaml::from_str(&content)
        .with_context(|| "Failed to parse config YAML")?;

    Ok(config)
}
