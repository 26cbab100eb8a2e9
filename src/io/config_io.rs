use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::paths::{StoreError, ensure_dir};

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub settings: SettingsConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Palette name; unknown or missing names fall back to the default palette
    #[serde(default)]
    pub theme: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsConfig {
    #[serde(default = "default_true")]
    pub show_notifications: bool,
    #[serde(default)]
    pub start_at_login: bool,
}

impl Default for SettingsConfig {
    fn default() -> Self {
        SettingsConfig {
            show_notifications: true,
            start_at_login: false,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Read config.toml, falling back to defaults when absent or malformed.
pub fn read_config(dir: &Path) -> AppConfig {
    let path = dir.join("config.toml");
    let Ok(text) = fs::read_to_string(&path) else {
        return AppConfig::default();
    };
    toml::from_str(&text).unwrap_or_default()
}

/// Write config.toml.
pub fn write_config(dir: &Path, config: &AppConfig) -> Result<(), StoreError> {
    ensure_dir(dir)?;
    let path = dir.join("config.toml");
    let text = toml::to_string_pretty(config).map_err(|e| StoreError::WriteError {
        path: path.clone(),
        source: std::io::Error::other(e),
    })?;
    fs::write(&path, text).map_err(|e| StoreError::WriteError { path, source: e })
}
