//! Configuration module for newsagent-rs
//!
//! Handles loading settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

/// Load settings from the first file found, falling back to defaults.
///
/// `NEWSAGENT_SETTINGS_PATH` is checked before the default locations.
/// Environment overrides are always merged last.
pub fn load() -> Result<Settings> {
    let mut candidates = Vec::new();
    if let Ok(path) = std::env::var("NEWSAGENT_SETTINGS_PATH") {
        candidates.push(PathBuf::from(path));
    }
    candidates.push(PathBuf::from("newsagent.yml"));
    candidates.push(PathBuf::from("config/newsagent.yml"));
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("newsagent-rs/newsagent.yml"));
    }

    let mut settings = match candidates.iter().find(|p| p.exists()) {
        Some(path) => {
            info!("Loading settings from: {}", path.display());
            Settings::from_file(path)?
        }
        None => {
            info!("No settings file found, using defaults");
            Settings::default()
        }
    };

    settings.merge_env();
    Ok(settings)
}
