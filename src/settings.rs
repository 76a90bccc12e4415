//! User settings stored as settings.json in the app data directory
//!
//! The cart is deliberately absent here and lives only for the session.

use crate::constants::ALL_CATEGORIES;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Browsing
    pub last_category: String,

    // Images
    pub load_images: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            last_category: ALL_CATEGORIES.to_string(),
            load_images: true,
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("varsha-stores-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = temp_dir("missing");
        let _ = std::fs::remove_file(dir.join("settings.json"));
        assert_eq!(Settings::load(&dir), Settings::default());
    }

    #[test]
    fn save_then_load() {
        let dir = temp_dir("roundtrip");
        let settings = Settings {
            window_w: Some(1280.0),
            window_h: Some(720.0),
            last_category: "dairy".to_string(),
            load_images: false,
            ..Settings::default()
        };
        settings.save(&dir);
        assert_eq!(Settings::load(&dir), settings);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn partial_file_fills_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"last_category":"oils"}"#).unwrap();
        assert_eq!(settings.last_category, "oils");
        assert!(settings.load_images);
        assert_eq!(settings.window_w, None);
    }

    #[test]
    fn corrupt_file_gives_defaults() {
        let dir = temp_dir("corrupt");
        std::fs::write(dir.join("settings.json"), "{not json").unwrap();
        assert_eq!(Settings::load(&dir), Settings::default());
        std::fs::remove_dir_all(&dir).ok();
    }
}
