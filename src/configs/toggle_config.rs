use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::theme::ToggleSize;

pub const DEFAULT_STORAGE_KEY: &str = "theme";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleConfig {
    pub size: ToggleSize,
    pub storage_key: String,
    /// Desktop only: where `JsonFileStore` keeps its file. Browsers use `localStorage`.
    pub store_path: Option<PathBuf>,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            size: ToggleSize::default(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            store_path: None,
        }
    }
}

impl ToggleConfig {
    pub fn with_size(size: ToggleSize) -> Self {
        Self { size, ..Self::default() }
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validated()
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// JSON file named by `THEME_TOGGLE_CONFIG` if set and valid, otherwise the
    /// individual environment variables.
    pub fn load() -> Self {
        Self::load_with(|name| std::env::var(name).ok())
    }

    pub(crate) fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = lookup("THEME_TOGGLE_CONFIG") {
            match Self::from_file(&path) {
                Ok(config) => {
                    log::info!("Loaded toggle config from {}", path);
                    return config;
                }
                Err(e) => log::warn!("Ignoring toggle config {}: {}", path, e),
            }
        }
        Self::from_lookup(lookup)
    }

    /// Reads `THEME_TOGGLE_SIZE`, `THEME_STORAGE_KEY` and `THEME_STORE_PATH`.
    /// Invalid values are logged and replaced by defaults.
    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup("THEME_TOGGLE_SIZE") {
            match raw.parse::<ToggleSize>() {
                Ok(size) => config.size = size,
                Err(e) => log::warn!("{}, using {}", e, config.size),
            }
        }

        if let Some(key) = lookup("THEME_STORAGE_KEY") {
            if key.trim().is_empty() {
                log::warn!("THEME_STORAGE_KEY is empty, using '{}'", DEFAULT_STORAGE_KEY);
            } else {
                config.storage_key = key;
            }
        }

        config.store_path = lookup("THEME_STORE_PATH").map(PathBuf::from);
        config
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Parse("storage_key must not be empty".to_string()));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_from_json_partial() {
        let config = ToggleConfig::from_json(r#"{"size":"large"}"#).unwrap();
        assert_eq!(config.size, ToggleSize::Large);
        assert_eq!(config.storage_key, "theme");
        assert_eq!(config.store_path, None);
    }

    #[test]
    fn test_from_json_rejects_unknown_size() {
        assert!(matches!(
            ToggleConfig::from_json(r#"{"size":"huge"}"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(ToggleConfig::from_json(r#"{"storage_key":" "}"#).is_err());
    }

    #[test]
    fn test_from_lookup_falls_back_on_bad_values() {
        let vars: HashMap<&str, &str> = [
            ("THEME_TOGGLE_SIZE", "gigantic"),
            ("THEME_STORAGE_KEY", ""),
            ("THEME_STORE_PATH", "/tmp/prefs.json"),
        ]
        .into_iter()
        .collect();

        let config = ToggleConfig::from_lookup(|name| vars.get(name).map(|v| v.to_string()));
        assert_eq!(config.size, ToggleSize::Medium);
        assert_eq!(config.storage_key, "theme");
        assert_eq!(config.store_path, Some(PathBuf::from("/tmp/prefs.json")));
    }

    #[test]
    fn test_from_lookup_reads_size() {
        let config = ToggleConfig::from_lookup(|name| {
            (name == "THEME_TOGGLE_SIZE").then(|| "small".to_string())
        });
        assert_eq!(config.size, ToggleSize::Small);
    }

    #[test]
    fn test_load_prefers_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("toggle.json");
        fs::write(&path, r#"{"size":"small","storage_key":"site-theme"}"#).unwrap();
        let path_str = path.to_string_lossy().to_string();

        let config = ToggleConfig::load_with(|name| match name {
            "THEME_TOGGLE_CONFIG" => Some(path_str.clone()),
            "THEME_TOGGLE_SIZE" => Some("large".to_string()),
            _ => None,
        });
        assert_eq!(config.size, ToggleSize::Small);
        assert_eq!(config.storage_key, "site-theme");
    }

    #[test]
    fn test_load_falls_back_to_env_on_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json").to_string_lossy().to_string();
        assert!(matches!(ToggleConfig::from_file(&missing), Err(ConfigError::IO(_))));

        let config = ToggleConfig::load_with(|name| match name {
            "THEME_TOGGLE_CONFIG" => Some(missing.clone()),
            "THEME_TOGGLE_SIZE" => Some("large".to_string()),
            _ => None,
        });
        assert_eq!(config.size, ToggleSize::Large);
    }
}
