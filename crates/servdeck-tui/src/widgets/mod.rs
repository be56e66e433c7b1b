//! Custom widget components

mod address_bar;
mod confirm_quit;
mod header;
pub mod modal_overlay;
mod screen_block;
mod spinner;
mod sub_view;
mod tabs;

pub use address_bar::AddressBar;
pub use confirm_quit::ConfirmQuitDialog;
pub use header::MainHeader;
pub use screen_block::ScreenBlock;
pub use spinner::Spinner;
pub use sub_view::SubViewPanel;
pub use tabs::ServerTabs;

use unicode_width::UnicodeWidthChar;

/// Truncate to at most `max_width` display columns, adding an ellipsis
/// when something was cut
pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::truncate_to_width;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_to_width("Short", 10), "Short");
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate_to_width("panel.example.com", 8), "panel.e…");
    }

    #[test]
    fn test_truncate_wide_chars() {
        assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
    }

    #[test]
    fn test_truncate_zero_width() {
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
