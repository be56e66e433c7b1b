//! Test utilities for TUI rendering verification
//!
//! Helpers for testing widgets and full-screen rendering using ratatui's
//! TestBackend.

use std::sync::Arc;

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::{Frame, Terminal};

use servdeck_app::config::Settings;
use servdeck_app::{AppState, Location};
use servdeck_core::{PermissionSet, ServerData, ServerSnapshot, ServerStatus, ViewerIdentity};

/// Standard test terminal size (matches common terminal dimensions)
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Compact terminal for testing responsive layouts
pub const COMPACT_WIDTH: u16 = 40;
pub const COMPACT_HEIGHT: u16 = 12;

/// Test utility wrapper around ratatui's TestBackend terminal.
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Create a new test terminal with standard dimensions (80x24)
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    /// Create a new test terminal with compact dimensions (40x12)
    pub fn compact() -> Self {
        Self::with_size(COMPACT_WIDTH, COMPACT_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame, e.g. `render::view`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere
    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    /// Check if a specific line contains text
    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        get_line_content(self.buffer(), line).contains(text)
    }

    /// All content as a string (for debugging)
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        result.push_str(&get_line_content(buffer, y));
        result.push('\n');
    }
    result
}

fn get_line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

/// Fresh state sitting at `location`, nothing mounted
pub fn test_state(location: &str, root_admin: bool) -> AppState {
    AppState::new(
        Settings::default(),
        Arc::new(ViewerIdentity::new("alice", root_admin)),
        "https://panel.example.com",
        Location::parse(location).expect("valid test location"),
    )
}

/// Snapshot of server `id` with the given grants
pub fn test_snapshot(
    id: &str,
    status: ServerStatus,
    is_transferring: bool,
    grants: &[&str],
) -> ServerSnapshot {
    ServerSnapshot {
        server: ServerData {
            id: id.to_string(),
            uuid: format!("{}-0000-4000-8000-000000000000", id),
            internal_id: 7,
            name: "Survival SMP".to_string(),
            node: "node-eu-1".to_string(),
            description: String::new(),
            status,
            is_transferring,
            is_node_under_maintenance: false,
        },
        permissions: PermissionSet::new(grants.iter().copied()),
    }
}

/// State with server `id` mounted and loaded
pub fn loaded_state(
    id: &str,
    status: ServerStatus,
    is_transferring: bool,
    grants: &[&str],
    root_admin: bool,
) -> AppState {
    let mut state = test_state(&format!("/server/{}", id), root_admin);
    let mut scope = state.provider.provide(id);
    scope
        .store
        .load(test_snapshot(id, status, is_transferring, grants));
    scope.listeners_mounted = true;
    state.scope = Some(scope);
    state
}
