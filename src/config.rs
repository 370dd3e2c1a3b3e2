use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct TitanConfig {
    pub app: AppConfig,
    pub storage: StorageConfig,
    pub ai: AiConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub db_path: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AiConfig {
    /// API key for the hosted model. Usually supplied via `TITAN_API_KEY`
    /// rather than written into the config file.
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
    pub timeout_secs: u64,
    pub temperature: f64,
}

impl Default for TitanConfig {
    fn default() -> Self {
        Self {
            app: AppConfig::default(),
            storage: StorageConfig::default(),
            ai: AiConfig::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let db_path = default_titan_dir()
            .join("titan.db")
            .to_string_lossy()
            .into_owned();
        Self { db_path }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-3-pro-preview".into(),
            endpoint: "https://generativelanguage.googleapis.com".into(),
            timeout_secs: 30,
            temperature: 0.7,
        }
    }
}

/// Returns `~/.titan/`
pub fn default_titan_dir() -> PathBuf {
    dirs::home_dir()
        .expect("home directory must exist")
        .join(".titan")
}

/// Returns the default config file path: `~/.titan/config.toml`
pub fn default_config_path() -> PathBuf {
    default_titan_dir().join("config.toml")
}

impl TitanConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            TitanConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides
    /// (TITAN_DB, TITAN_LOG_LEVEL, TITAN_API_KEY, TITAN_MODEL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("TITAN_DB") {
            self.storage.db_path = val;
        }
        if let Ok(val) = std::env::var("TITAN_LOG_LEVEL") {
            self.app.log_level = val;
        }
        if let Ok(val) = std::env::var("TITAN_API_KEY") {
            self.ai.api_key = Some(val);
        }
        if let Ok(val) = std::env::var("TITAN_MODEL") {
            self.ai.model = val;
        }
    }

    /// Resolve the database path, expanding `~` if needed.
    pub fn resolved_db_path(&self) -> PathBuf {
        expand_tilde(&self.storage.db_path)
    }

    /// The API key, or an error telling the user how to provide one.
    pub fn require_api_key(&self) -> Result<&str> {
        self.ai
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .context(
                "no API key configured — set TITAN_API_KEY or `ai.api_key` in ~/.titan/config.toml",
            )
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        dirs::home_dir()
            .expect("home directory must exist")
            .join(rest)
    } else {
        PathBuf::from(path)
    }
}
