//! Key event handlers for UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Normal => handle_key_normal(key),
        UiMode::AddressBar => handle_key_address_bar(key),
        UiMode::ConfirmQuit => handle_key_confirm_quit(key),
    }
}

fn handle_key_normal(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::RequestQuit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // '1'..'9' select tabs, Console is 1
        InputKey::Char(c @ '1'..='9') => {
            let index = c.to_digit(10).map(|d| d as usize - 1)?;
            Some(Message::SelectTab(index))
        }
        InputKey::Tab | InputKey::Right => Some(Message::NextTab),
        InputKey::BackTab | InputKey::Left => Some(Message::PreviousTab),

        InputKey::Char('/') | InputKey::Char('g') => Some(Message::OpenAddressBar),
        InputKey::Char('r') => Some(Message::Remount),

        _ => None,
    }
}

fn handle_key_address_bar(key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Enter => Some(Message::AddressSubmit),
        InputKey::Esc => Some(Message::AddressCancel),
        InputKey::Backspace => Some(Message::AddressBackspace),
        InputKey::Char(c) => Some(Message::AddressInput(c)),
        _ => None,
    }
}

fn handle_key_confirm_quit(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y') | InputKey::Char('Y') | InputKey::Enter => Some(Message::ConfirmQuit),
        InputKey::Char('n') | InputKey::Char('N') | InputKey::Esc => Some(Message::CancelQuit),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}
