//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState, UiMode};

use super::{keys::handle_key, lifecycle, listeners, navigation, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::ConfirmQuit => {
            state.confirm_quit();
            UpdateResult::none()
        }

        Message::CancelQuit => {
            state.cancel_quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.spinner_frame = state.spinner_frame.wrapping_add(1);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Server lifecycle
        // ─────────────────────────────────────────────────────────
        Message::Navigate { location } => lifecycle::handle_navigate(state, location),
        Message::MountServer { param } => lifecycle::handle_mount(state, param),
        Message::Remount => lifecycle::handle_remount(state),
        Message::Unmount => lifecycle::handle_unmount(state, None),
        Message::ServerLoaded {
            generation,
            snapshot,
        } => lifecycle::handle_server_loaded(state, generation, *snapshot),
        Message::ServerLoadFailed { generation, error } => {
            lifecycle::handle_server_load_failed(state, generation, error)
        }

        // ─────────────────────────────────────────────────────────
        // Listeners
        // ─────────────────────────────────────────────────────────
        Message::ServerEvent { generation, event } => {
            listeners::handle_server_event(state, generation, event)
        }
        Message::ListenerStopped { generation, reason } => {
            listeners::handle_listener_stopped(state, generation, reason)
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::SelectTab(index) => navigation::handle_select_tab(state, index),
        Message::NextTab => navigation::handle_cycle_tab(state, 1),
        Message::PreviousTab => navigation::handle_cycle_tab(state, -1),

        Message::OpenAddressBar => {
            navigation::open_address_bar(state);
            UpdateResult::none()
        }
        Message::AddressInput(c) => {
            if state.ui_mode == UiMode::AddressBar {
                state.address_bar.input.push(c);
                state.address_bar.error = None;
            }
            UpdateResult::none()
        }
        Message::AddressBackspace => {
            state.address_bar.input.pop();
            state.address_bar.error = None;
            UpdateResult::none()
        }
        Message::AddressSubmit => navigation::submit_address_bar(state),
        Message::AddressCancel => {
            state.ui_mode = UiMode::Normal;
            state.address_bar.error = None;
            UpdateResult::none()
        }
    }
}
