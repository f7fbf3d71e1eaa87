use crate::data;
use crate::types::{EndpointDescriptor, MetricCard, SourceCount};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "dictionary-dashboard";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not find home directory")]
    NoHomeDir,
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// Everything the endpoint browser is parameterized by
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Prefix joined with each endpoint path when copying
    pub base_url: String,
    /// Render request body schemas and example responses for the expanded row
    pub show_examples: bool,
    pub stats: Vec<MetricCard>,
    pub sources: Vec<SourceCount>,
    pub endpoints: Vec<EndpointDescriptor>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: data::DEFAULT_BASE_URL.to_string(),
            show_examples: true,
            stats: data::default_stats(),
            sources: data::default_sources(),
            endpoints: data::default_endpoints(),
        }
    }
}

impl Config {
    /// ~/.config/dictionary-dashboard, created on first use
    pub fn app_dir() -> Result<PathBuf, ConfigError> {
        // Use ~/.config instead of platform-specific directory
        let home_dir = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        let app_dir = home_dir.join(".config").join(APP_DIR_NAME);

        if !app_dir.exists() {
            fs::create_dir_all(&app_dir).map_err(|source| ConfigError::Io {
                path: app_dir.clone(),
                source,
            })?;
        }

        Ok(app_dir)
    }

    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::app_dir()?.join("config.toml"))
    }

    /// Load config from the default location, or defaults if the file doesn't exist
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(config.sanitized())
    }

    /// Replace an unusable base URL with the default one
    fn sanitized(mut self) -> Self {
        match validate_url(&self.dashboard.base_url) {
            Ok(()) => {
                self.dashboard.base_url = normalize_base_url(&self.dashboard.base_url);
            }
            Err(reason) => {
                tracing::warn!(
                    "Ignoring base_url {:?}: {}",
                    self.dashboard.base_url,
                    reason
                );
                self.dashboard.base_url = data::DEFAULT_BASE_URL.to_string();
            }
        }
        self
    }
}

/// Simple URL validation
pub fn validate_url(url: &str) -> Result<(), String> {
    if url.is_empty() {
        return Err("URL cannot be empty".to_string());
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err("URL must start with http:// or https://".to_string());
    }

    url::Url::parse(url).map_err(|e| format!("Invalid URL format: {e}"))?;

    Ok(())
}

/// Strip trailing slashes so joining with a `/`-prefixed path never doubles them
/// Example: https://api.example.com/ -> https://api.example.com
pub fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
