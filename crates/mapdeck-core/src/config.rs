use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::layers::LayerManager;

pub const CONFIG_FILE: &str = "config.json";
pub const DOCK_STATE_FILE: &str = "dock_state.json";

/// `<config_dir>/mapdeck`
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join("mapdeck"))
        .ok_or(ConfigError::NoConfigDir)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub layers: LayerManager,
    #[serde(default)]
    pub show_empty_property_values: bool,
    /// JSON string table overriding the built-in English strings
    #[serde(default)]
    pub locale_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn save_to_file(&self, dir: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::create_dir_all(dir)?;
        std::fs::write(dir.join(CONFIG_FILE), json)?;
        log::info!("Saved configuration to {}", dir.display());
        Ok(())
    }

    /// `None` when nothing has been saved yet
    pub fn load_from_file(dir: &Path) -> Result<Option<Self>, ConfigError> {
        let json_path = dir.join(CONFIG_FILE);
        if !json_path.exists() {
            return Ok(None);
        }
        let json = std::fs::read_to_string(json_path)?;
        Ok(Some(serde_json::from_str(&json)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::{Credentials, ListKind};

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("mapdeck-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_missing_file_is_reported() {
        let dir = temp_dir("missing");
        assert!(AppConfig::load_from_file(&dir).unwrap().is_none());
    }

    #[test]
    fn test_empty_layer_lists_stay_empty() {
        let dir = temp_dir("empty");
        AppConfig::default().save_to_file(&dir).unwrap();

        let loaded = AppConfig::load_from_file(&dir).unwrap().unwrap();
        assert_eq!(loaded.layers.layer_count(), 0);
        assert!(loaded.locale_path.is_none());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_and_load_skips_credentials() {
        let dir = temp_dir("save");
        let mut config = AppConfig::default();
        let id = config.layers.attach(ListKind::Overlay, "Private", "wms").unwrap();
        config
            .layers
            .apply_credentials(id, Credentials::new("alice", "secret"))
            .unwrap();
        config.show_empty_property_values = true;
        config.save_to_file(&dir).unwrap();

        let json = std::fs::read_to_string(dir.join(CONFIG_FILE)).unwrap();
        assert!(!json.contains("secret"));

        let loaded = AppConfig::load_from_file(&dir).unwrap().unwrap();
        let item = loaded.layers.get(id).unwrap();
        assert_eq!(item.name, "Private");
        assert!(item.credentials.is_none());
        assert!(loaded.show_empty_property_values);

        // Ids keep increasing after a reload
        let mut layers = loaded.layers;
        let next = layers.attach(ListKind::Overlay, "Other", "wms").unwrap();
        assert_ne!(next, id);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = temp_dir("corrupt");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(CONFIG_FILE), "{ not json").unwrap();
        assert!(matches!(
            AppConfig::load_from_file(&dir),
            Err(ConfigError::Serialization(_))
        ));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
