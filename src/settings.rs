use log::{info, warn};
use platform_dirs::AppDirs;
use serde::Deserialize;
use std::path::PathBuf;

const MIN_ICON_SIZE: u32 = 16;
const MAX_ICON_SIZE: u32 = 256;

/// Read-only preferences from `config.json`; nothing here is ever written back
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub(crate) struct SavedSettings {
    pub(crate) show_orientation_menu: bool,
    pub(crate) show_refresh_rate: bool,
    pub(crate) hide_unknown_ratios: bool,
    /// Replaces the tooltip generated from the current mode
    pub(crate) tooltip: Option<String>,
    pub(crate) icon_size: u32,
}

impl Default for SavedSettings {
    fn default() -> Self {
        Self {
            show_orientation_menu: true,
            show_refresh_rate: true,
            hide_unknown_ratios: false,
            tooltip: None,
            icon_size: 32,
        }
    }
}

impl SavedSettings {
    pub(crate) fn icon_size(&self) -> u32 {
        self.icon_size.clamp(MIN_ICON_SIZE, MAX_ICON_SIZE)
    }

    fn config_file() -> Option<PathBuf> {
        let app_dirs = AppDirs::new(Some("res-switch"), true)?;
        Some(app_dirs.config_dir.join("config.json"))
    }

    // Function left sync intentionally
    pub(crate) fn load_settings() -> Self {
        let config_file = match Self::config_file() {
            Some(file) => file,
            None => {
                warn!("No config directory available, using default settings");
                return Self::default();
            }
        };
        match std::fs::read_to_string(&config_file) {
            Ok(json) => {
                info!("Loaded settings from {:?} with json {}", config_file, json);
                Self::from_json(&json)
            }
            Err(_) => {
                info!("No settings at {:?}, using defaults", config_file);
                Self::default()
            }
        }
    }

    pub(crate) fn from_json(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_else(|e| {
            warn!("Ignoring invalid settings: {}", e);
            Self::default()
        })
    }
}
