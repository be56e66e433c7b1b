//! Abstract input key event, independent of terminal library.
//!
//! Keeps servdeck-app free of crossterm types; the TUI converts its key
//! events into [`InputKey`] at the boundary.

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, ...)
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_key_equality() {
        assert_eq!(InputKey::Char('g'), InputKey::Char('g'));
        assert_ne!(InputKey::CharCtrl('c'), InputKey::Char('c'));
        assert_ne!(InputKey::Tab, InputKey::BackTab);
    }
}
