use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const ENV_API_KEY: &str = "OPENWEATHER_API_KEY";
pub const ENV_BASE_URL: &str = "OPENWEATHER_BASE_URL";
pub const ENV_BIND_ADDR: &str = "WEATHER_BIND_ADDR";
pub const ENV_INDEX_PATH: &str = "WEATHER_INDEX_PATH";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3001";
pub const DEFAULT_INDEX_PATH: &str = "index.html";
pub const DEFAULT_OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org";

/// OpenWeather credentials and endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenWeatherConfig {
    /// Example TOML:
    /// [openweather]
    /// api_key = "..."
    pub api_key: Option<String>,
    pub base_url: String,
}

impl Default for OpenWeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_OPENWEATHER_BASE_URL.to_string(),
        }
    }
}

/// Process-wide configuration, built once at startup and shared read-only
/// with every request handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Socket address the HTTP listener binds to.
    pub bind_addr: String,
    /// HTML page served at `/`, relative to the working directory.
    pub index_path: PathBuf,
    pub openweather: OpenWeatherConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            index_path: PathBuf::from(DEFAULT_INDEX_PATH),
            openweather: OpenWeatherConfig::default(),
        }
    }
}

impl Config {
    /// Defaults, then the config file (if any), then process environment.
    ///
    /// `explicit_path` replaces the platform config location; unlike the
    /// platform file, an explicit path must exist.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut cfg = match explicit_path {
            Some(path) => Self::from_file(path)?,
            // No platform config dir (e.g. no home directory) means no file.
            None => Self::from_optional_file(Self::config_file_path().ok().as_deref())?,
        };

        cfg.apply_env(|name| std::env::var(name).ok());
        Ok(cfg)
    }

    /// Parse `path` when it exists; otherwise start from defaults.
    pub fn from_optional_file(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if path.exists() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Override fields from environment-style lookups. Unset variables leave
    /// the current value alone.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(ENV_API_KEY) {
            self.openweather.api_key = Some(key);
        }
        if let Some(url) = lookup(ENV_BASE_URL) {
            self.openweather.base_url = url;
        }
        if let Some(addr) = lookup(ENV_BIND_ADDR) {
            self.bind_addr = addr;
        }
        if let Some(path) = lookup(ENV_INDEX_PATH) {
            self.index_path = PathBuf::from(path);
        }
    }

    /// Path to the platform config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-task", "weather-server")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Returns the OpenWeather API key, treating an empty value as unset.
    pub fn api_key(&self) -> Option<&str> {
        self.openweather
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.openweather.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.openweather.base_url = base_url.into();
        self
    }
}
