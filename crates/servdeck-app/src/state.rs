//! Application state (Model in TEA pattern)

use std::sync::Arc;

use servdeck_core::ViewerIdentity;

use crate::config::Settings;
use crate::location::Location;
use crate::router::{resolve, ServerView};
use crate::scope::{Generation, ScopeProvider, ServerScope};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    #[default]
    Normal,
    /// Location entry overlay
    AddressBar,
    /// Quit confirmation prompt
    ConfirmQuit,
}

/// Address bar contents
#[derive(Debug, Clone, Default)]
pub struct AddressBarState {
    pub input: String,
    /// Parse error from the last submit
    pub error: Option<String>,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub ui_mode: UiMode,
    pub settings: Settings,
    /// Shared, read-only for the whole process
    pub viewer: Arc<ViewerIdentity>,
    /// Panel base URL, used for the admin link and the header
    pub panel_url: String,
    pub location: Location,
    /// The mounted server, if any
    pub scope: Option<ServerScope>,
    pub provider: ScopeProvider,
    pub address_bar: AddressBarState,
    pub spinner_frame: usize,
}

impl AppState {
    /// Nothing is mounted until the first `Navigate` is processed.
    pub fn new(
        settings: Settings,
        viewer: Arc<ViewerIdentity>,
        panel_url: impl Into<String>,
        location: Location,
    ) -> Self {
        Self {
            phase: AppPhase::Running,
            ui_mode: UiMode::Normal,
            settings,
            viewer,
            panel_url: panel_url.into(),
            location,
            scope: None,
            provider: ScopeProvider::new(),
            address_bar: AddressBarState::default(),
            spinner_frame: 0,
        }
    }

    /// Resolve what the server area shows right now
    pub fn view(&self) -> ServerView {
        resolve(
            self.scope.as_ref(),
            &self.location,
            &self.viewer,
            &self.panel_url,
        )
    }

    /// The live scope, only if it belongs to `generation`
    pub fn scope_for(&mut self, generation: Generation) -> Option<&mut ServerScope> {
        self.scope
            .as_mut()
            .filter(|scope| scope.is_current(generation))
    }

    pub fn request_quit(&mut self) {
        if self.settings.behavior.confirm_quit {
            self.ui_mode = UiMode::ConfirmQuit;
        } else {
            self.phase = AppPhase::Quitting;
        }
    }

    pub fn confirm_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn cancel_quit(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
