//! Tab selection and the address bar

use servdeck_core::prelude::*;

use crate::location::Location;
use crate::message::Message;
use crate::state::{AddressBarState, AppState, UiMode};

use super::UpdateResult;

pub(crate) fn handle_select_tab(state: &mut AppState, index: usize) -> UpdateResult {
    let Some(menu) = state.view().menu else {
        return UpdateResult::none();
    };

    match menu.tabs.into_iter().nth(index) {
        Some(tab) => UpdateResult::message(Message::Navigate { location: tab.href }),
        None => UpdateResult::none(),
    }
}

/// Move `step` tabs from the active one, wrapping around
pub(crate) fn handle_cycle_tab(state: &mut AppState, step: isize) -> UpdateResult {
    let view = state.view();
    let Some(menu) = view.menu else {
        return UpdateResult::none();
    };

    let len = menu.tabs.len() as isize;
    let current = view.active_tab.unwrap_or(0) as isize;
    let next = (current + step).rem_euclid(len) as usize;
    handle_select_tab(state, next)
}

pub(crate) fn open_address_bar(state: &mut AppState) {
    state.address_bar = AddressBarState {
        input: state.location.to_string(),
        error: None,
    };
    state.ui_mode = UiMode::AddressBar;
}

pub(crate) fn submit_address_bar(state: &mut AppState) -> UpdateResult {
    match Location::parse(&state.address_bar.input) {
        Ok(location) => {
            state.ui_mode = UiMode::Normal;
            state.address_bar.error = None;
            UpdateResult::message(Message::Navigate { location })
        }
        Err(e) => {
            debug!("Rejected address bar input: {}", e);
            state.address_bar.error = Some(e.to_string());
            UpdateResult::none()
        }
    }
}
