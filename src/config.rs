use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ToolhubError;

/// Environment variable that overrides `api.base_url`
pub const BASE_URL_ENV: &str = "TOOLHUB_BASE_URL";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub ui: UiConfig,
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Scheme, host and port of the site, e.g. `http://localhost:5000`
    pub base_url: String,
    /// Path every API route is mounted under
    pub api_prefix: String,
    /// Request timeout; none when unset
    pub timeout_ms: Option<u64>,
    /// Raw `Cookie` header value carrying the login session
    pub session_cookie: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            api_prefix: "/api".to_string(),
            timeout_ms: None,
            session_cookie: None,
        }
    }
}

/// Session cookies stay out of logs
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("api_prefix", &self.api_prefix)
            .field("timeout_ms", &self.timeout_ms)
            .field("session_cookie", &self.session_cookie.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Minimum trimmed query length (in characters) before a search is sent
    pub min_query_len: usize,
    /// How long a notification stays visible
    pub notification_ms: u64,
    /// Path of the page being driven; the catalog loads at startup when it contains `/tools`
    pub page_path: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            min_query_len: 2,
            notification_ms: 3000,
            page_path: "/tools".to_string(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain, then apply environment overrides
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        let mut config = Self::load_file(config_path)?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the API client cannot work with
    pub fn validate(&self) -> crate::Result<()> {
        let base_url = self.api.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ToolhubError::Config(format!(
                "api.base_url must start with http:// or https://, got '{}'",
                base_url
            )));
        }
        if self.ui.min_query_len == 0 {
            return Err(ToolhubError::Config("ui.min_query_len must be at least 1".to_string()));
        }
        Ok(())
    }

    fn load_file(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try primary location: ~/.config/<project>/<project>.yml
        if let Some(config_dir) = dirs::config_dir() {
            let project_name = env!("CARGO_PKG_NAME");
            let primary_config = config_dir.join(project_name).join(format!("{}.yml", project_name));
            if primary_config.exists() {
                match Self::load_from_file(&primary_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from {}: {}", primary_config.display(), e);
                    }
                }
            }
        }

        // Try fallback location: ./<project>.yml
        let project_name = env!("CARGO_PKG_NAME");
        let fallback_config = PathBuf::from(format!("{}.yml", project_name));
        if fallback_config.exists() {
            match Self::load_from_file(&fallback_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load config from {}: {}", fallback_config.display(), e);
                }
            }
        }

        // No config file found, use defaults
        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(base_url) = std::env::var(BASE_URL_ENV)
            && !base_url.trim().is_empty()
        {
            log::info!("Using base URL from {}", BASE_URL_ENV);
            self.api.base_url = base_url;
        }
    }
}
