use anyhow::Result;
use std::path::{Path, PathBuf};

/// Base directory override from the environment, if set
pub fn base_path_override() -> Option<PathBuf> {
    std::env::var("WATCHDECK_HOME")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}

pub struct PathManager {
    config_dir: PathBuf,
    data_dir: PathBuf,
    log_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        let base_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("watchdeck");

        Ok(Self::with_base(base_dir))
    }

    /// Config file at the base level, data and logs in subdirectories
    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        let base = base.into();
        Self {
            config_dir: base.clone(),
            data_dir: base.join("data"),
            log_dir: base.join("logs"),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Snapshot file for a storage namespace, e.g. `data/content-store.json`
    pub fn snapshot_file(&self, namespace: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", namespace))
    }

    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::create_dir_all(&self.log_dir)?;
        Ok(())
    }
}

impl Default for PathManager {
    fn default() -> Self {
        if let Some(base) = base_path_override() {
            return Self::with_base(base);
        }

        // Platform-specific paths (e.g., ~/.config/watchdeck on Linux)
        Self::new().unwrap_or_else(|_| Self::with_base(std::env::temp_dir().join("watchdeck")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_under_base() {
        let paths = PathManager::with_base("/tmp/wd");
        assert_eq!(paths.config_file(), PathBuf::from("/tmp/wd/config.toml"));
        assert_eq!(
            paths.snapshot_file("content-store"),
            PathBuf::from("/tmp/wd/data/content-store.json")
        );
        assert_eq!(paths.log_dir(), Path::new("/tmp/wd/logs"));
    }

    #[test]
    fn test_ensure_directories() {
        let dir = tempfile::tempdir().unwrap();
        let paths = PathManager::with_base(dir.path().join("home"));
        paths.ensure_directories().unwrap();
        assert!(paths.data_dir().is_dir());
        assert!(paths.log_dir().is_dir());
    }
}
