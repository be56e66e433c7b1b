//! servdeck - A terminal client for a single server of a hosting panel
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use url::Url;

use servdeck_api::{PanelClient, ServerApi};
use servdeck_app::config::{self, Settings};
use servdeck_app::{AppState, Location};
use servdeck_core::logging;
use servdeck_core::prelude::*;

/// servdeck - browse one server of a hosting panel from the terminal
#[derive(Parser, Debug)]
#[command(name = "servdeck")]
#[command(about = "A terminal client for a single server of a hosting panel", long_about = None)]
struct Args {
    /// Location to open, e.g. /server/1a2b3c4d or a full panel URL
    #[arg(value_name = "LOCATION")]
    location: Option<String>,

    /// Panel base URL (overrides panel.url)
    #[arg(long, value_name = "URL")]
    panel_url: Option<String>,

    /// Client API key (overrides panel.api_key and SERVDECK_API_KEY)
    #[arg(long, value_name = "KEY")]
    api_key: Option<String>,

    /// Path to config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => config::default_config_path()
            .ok_or_else(|| Error::config("Could not determine the config directory"))?,
    };

    if args.init_config {
        if config::init_config(&config_path)? {
            eprintln!("Wrote default config to {}", config_path.display());
        } else {
            eprintln!("Config already exists at {}", config_path.display());
        }
        return Ok(());
    }

    if args.config.is_some() && !config_path.exists() {
        return Err(Error::ConfigNotFound { path: config_path });
    }

    // Logs go to a file, the terminal belongs to the TUI
    logging::init()?;

    let settings = resolve_settings(&args, config::load_settings(&config_path));
    if settings.panel.url.is_empty() {
        return Err(Error::config(
            "Panel URL is not set. Pass --panel-url, a full panel URL, or set panel.url in the config file.",
        ));
    }

    let location = Location::parse(args.location.as_deref().unwrap_or("/"))?;
    info!("Opening {} on {}", location, settings.panel.url);

    let client = PanelClient::with_timeout(
        &settings.panel.url,
        settings.panel.api_key.clone(),
        settings.panel.request_timeout(),
    )?;

    // Viewer identity is read once and shared for the whole run
    let viewer = client
        .load_account()
        .await
        .context("Failed to load account")?;
    info!(
        "Signed in as {} (root_admin={})",
        viewer.username, viewer.root_admin
    );

    let panel_url = client.base_url().to_string();
    let state = AppState::new(settings, Arc::new(viewer), panel_url, location);

    let result = servdeck_tui::run(state, Arc::new(client)).await;
    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
        if let Ok(log_file) = logging::get_current_log_file() {
            eprintln!("servdeck exited with an error, see {}", log_file.display());
        }
    }
    result
}

/// Config file, then environment, then command line
fn resolve_settings(args: &Args, settings: Settings) -> Settings {
    let mut settings = settings.with_env_overrides();

    if let Some(url) = &args.panel_url {
        settings.panel.url = url.clone();
    } else if settings.panel.url.is_empty() {
        if let Some(origin) = args.location.as_deref().and_then(panel_origin) {
            settings.panel.url = origin;
        }
    }

    if let Some(key) = &args.api_key {
        settings.panel.api_key = key.clone();
    }

    settings
}

/// Scheme, host and port of a full panel URL
fn panel_origin(input: &str) -> Option<String> {
    let url = Url::parse(input).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }
    Some(url.origin().ascii_serialization())
}
