//! Loading indicator shown while the server is fetched

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

use super::modal_overlay::centered_rect;

/// Braille spinner characters for smooth animation
const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct Spinner<'a> {
    frame: usize,
    label: &'a str,
}

impl<'a> Spinner<'a> {
    pub fn new(frame: usize, label: &'a str) -> Self {
        Self { frame, label }
    }

    fn glyph(&self) -> &'static str {
        SPINNER[self.frame % SPINNER.len()]
    }
}

impl Widget for Spinner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(self.glyph(), styles::accent_bold()),
            Span::raw(" "),
            Span::styled(self.label, styles::text_secondary()),
        ]);
        let target = centered_rect(area.width, 1, area);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(target, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_spinner_advances_and_wraps() {
        assert_eq!(Spinner::new(0, "").glyph(), "⠋");
        assert_eq!(Spinner::new(1, "").glyph(), "⠙");
        assert_eq!(Spinner::new(SPINNER.len(), "").glyph(), "⠋");
    }

    #[test]
    fn test_spinner_renders_label() {
        let mut term = TestTerminal::new();
        term.render_widget(Spinner::new(3, "Loading server abc"), term.area());
        assert!(term.buffer_contains("⠸ Loading server abc"));
    }
}
