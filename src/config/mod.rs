use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::errors::StoreError;

const CONFIG_FILE: &str = "config.json";

/// Persisted CLI preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub quiet: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_user: Option<String>,
}

/// Loads and saves the configuration file inside the data directory.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(base: &Path) -> Self {
        Self {
            path: base.join(CONFIG_FILE),
        }
    }

    pub fn load(&self) -> Result<Config, StoreError> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        serde_json::from_str(&data).map_err(|source| StoreError::Malformed {
            file: CONFIG_FILE.to_string(),
            source,
        })
    }

    pub fn save(&self, config: &Config) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_defaults() {
        let temp = tempdir().unwrap();
        let manager = ConfigManager::new(temp.path());
        let config = manager.load().unwrap();
        assert!(!config.quiet);
        assert!(config.last_user.is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let temp = tempdir().unwrap();
        let manager = ConfigManager::new(temp.path());
        let config = Config {
            quiet: true,
            last_user: Some("alice".into()),
        };
        manager.save(&config).unwrap();
        let loaded = manager.load().unwrap();
        assert!(loaded.quiet);
        assert_eq!(loaded.last_user.as_deref(), Some("alice"));
    }
}
