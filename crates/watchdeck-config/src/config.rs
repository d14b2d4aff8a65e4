use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::paths::PathManager;

/// Storage key used when none is configured
pub const DEFAULT_NAMESPACE: &str = "content-store";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub posters: PosterConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorageConfig {
    /// Fixed key the catalog snapshot is stored under
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// Overrides the data directory from [`PathManager`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

/// Poster table configuration
///
/// User entries are consulted before the built-in table, in file order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PosterConfig {
    #[serde(default = "default_true")]
    pub include_builtin: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<PosterEntry>,
    #[serde(default)]
    pub fallbacks: FallbackPosters,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PosterEntry {
    pub title: String,
    pub url: String,
}

/// Per-type fallback overrides; unset types keep the built-in fallback
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FallbackPosters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movie: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentary: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Force JSON (true) or plain (false) logs; auto-detected from the terminal when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("storage namespace '{0}' must be non-empty and contain only letters, digits, '.', '_' or '-'")]
    InvalidNamespace(String),

    #[error("poster entry #{index} has an empty {field}")]
    EmptyPosterField { index: usize, field: &'static str },

    #[error("fallback poster for {0} is empty")]
    EmptyFallback(&'static str),

    #[error("unknown log level '{0}' (expected trace, debug, info, warn or error)")]
    InvalidLogLevel(String),
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            data_dir: None,
        }
    }
}

impl Default for PosterConfig {
    fn default() -> Self {
        Self {
            include_builtin: default_true(),
            entries: Vec::new(),
            fallbacks: FallbackPosters::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: None,
            file: None,
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config file if it exists, otherwise return defaults
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let namespace = &self.storage.namespace;
        let valid_namespace = !namespace.is_empty()
            && namespace
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
            && !namespace.starts_with('.');
        if !valid_namespace {
            return Err(ConfigError::InvalidNamespace(namespace.clone()));
        }

        for (index, entry) in self.posters.entries.iter().enumerate() {
            if entry.title.trim().is_empty() {
                return Err(ConfigError::EmptyPosterField { index, field: "title" });
            }
            if entry.url.trim().is_empty() {
                return Err(ConfigError::EmptyPosterField { index, field: "url" });
            }
        }

        let fallbacks = &self.posters.fallbacks;
        for (name, url) in [
            ("movie", &fallbacks.movie),
            ("series", &fallbacks.series),
            ("documentary", &fallbacks.documentary),
        ] {
            if matches!(url, Some(u) if u.trim().is_empty()) {
                return Err(ConfigError::EmptyFallback(name));
            }
        }

        let level = self.logging.level.to_lowercase();
        if !["trace", "debug", "info", "warn", "error"].contains(&level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(self.logging.level.clone()));
        }

        Ok(())
    }

    /// Snapshot path for the configured namespace, honouring `storage.data_dir`
    pub fn snapshot_path(&self, paths: &PathManager) -> PathBuf {
        match &self.storage.data_dir {
            Some(dir) => dir.join(format!("{}.json", self.storage.namespace)),
            None => paths.snapshot_file(&self.storage.namespace),
        }
    }
}
