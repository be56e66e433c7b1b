//! Configuration types for servdeck
//!
//! Defines `Settings` (config.toml) and its sections.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable that overrides `panel.api_key`
pub const API_KEY_ENV_VAR: &str = "SERVDECK_API_KEY";

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub panel: PanelSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,
}

impl Settings {
    /// Apply `SERVDECK_API_KEY` when set and non-empty
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(key) = std::env::var(API_KEY_ENV_VAR) {
            if !key.trim().is_empty() {
                self.panel.api_key = key;
            }
        }
        self
    }
}

/// Panel connection settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PanelSettings {
    /// Base URL of the panel, e.g. `https://panel.example.com`
    #[serde(default)]
    pub url: String,

    /// Client API key
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl PanelSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            url: String::new(),
            api_key: String::new(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_request_timeout_secs() -> u64 {
    15
}

/// Icon display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals
    #[default]
    Unicode,
    /// Nerd Font glyphs
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Icon mode: "unicode" (default) or "nerd_fonts"
    #[serde(default)]
    pub icons: IconMode,
}

/// Behavior settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Ask before quitting
    #[serde(default)]
    pub confirm_quit: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert!(settings.panel.url.is_empty());
        assert_eq!(settings.panel.request_timeout_secs, 15);
        assert_eq!(settings.ui.icons, IconMode::Unicode);
        assert!(!settings.behavior.confirm_quit);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[panel]
url = "https://panel.example.com"

[ui]
icons = "nerd_fonts"
"#,
        )
        .unwrap();

        assert_eq!(settings.panel.url, "https://panel.example.com");
        assert_eq!(settings.panel.request_timeout_secs, 15);
        assert_eq!(settings.ui.icons, IconMode::NerdFonts);
    }

    #[test]
    fn test_request_timeout_never_zero() {
        let panel = PanelSettings {
            request_timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(panel.request_timeout(), Duration::from_secs(1));
    }

    #[test]
    #[serial]
    fn test_env_overrides_api_key() {
        std::env::set_var(API_KEY_ENV_VAR, "ptlc_from_env");
        let settings = Settings::default().with_env_overrides();
        std::env::remove_var(API_KEY_ENV_VAR);

        assert_eq!(settings.panel.api_key, "ptlc_from_env");
    }

    #[test]
    #[serial]
    fn test_empty_env_keeps_file_key() {
        std::env::set_var(API_KEY_ENV_VAR, "  ");
        let mut settings = Settings::default();
        settings.panel.api_key = "ptlc_from_file".to_string();
        let settings = settings.with_env_overrides();
        std::env::remove_var(API_KEY_ENV_VAR);

        assert_eq!(settings.panel.api_key, "ptlc_from_file");
    }
}
