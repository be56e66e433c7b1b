//! Settings file for servdeck (`{config_dir}/servdeck/config.toml`)

use super::types::Settings;
use servdeck_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "servdeck";

/// Default location of the settings file
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`, falling back to defaults when the file
/// is missing or malformed.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write `settings` to `config_path`, creating the parent directory.
pub fn save_settings(config_path: &Path, settings: &Settings) -> Result<()> {
    let dir = config_path
        .parent()
        .ok_or_else(|| Error::config(format!("Invalid config path: {:?}", config_path)))?;

    if !dir.as_os_str().is_empty() && !dir.exists() {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", dir, e)))?;
    }

    let content = toml::to_string_pretty(settings)
        .map_err(|e| Error::config(format!("Failed to serialize settings: {}", e)))?;
    let full_content = format!("{}{}", generate_config_header(), content);

    // Atomic write: write to temp, then rename
    let temp_path = config_path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &full_content)
        .map_err(|e| Error::config(format!("Failed to write temp file: {}", e)))?;
    std::fs::rename(&temp_path, config_path)
        .map_err(|e| Error::config(format!("Failed to rename temp file: {}", e)))?;

    info!("Saved settings to {:?}", config_path);
    Ok(())
}

/// Write a default settings file unless one exists. Returns `true` if a file
/// was created.
pub fn init_config(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }
    save_settings(config_path, &Settings::default())?;
    Ok(true)
}

fn generate_config_header() -> String {
    r#"# servdeck configuration
# panel.api_key may be left empty and supplied through SERVDECK_API_KEY

"#
    .to_string()
}
