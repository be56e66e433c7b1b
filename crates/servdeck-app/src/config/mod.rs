//! Configuration file parsing for servdeck
//!
//! Supports `{config_dir}/servdeck/config.toml` plus the `SERVDECK_API_KEY`
//! environment override.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config, load_settings, save_settings};
pub use types::*;
