//! Location entry overlay

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use servdeck_app::state::AddressBarState;

use crate::theme::styles;

use super::modal_overlay::{centered_rect, render_shadow};
use super::truncate_to_width;

pub struct AddressBar<'a> {
    state: &'a AddressBarState,
}

impl<'a> AddressBar<'a> {
    pub fn new(state: &'a AddressBarState) -> Self {
        Self { state }
    }
}

impl Widget for AddressBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = centered_rect(area.width.saturating_sub(8).min(72), 6, area);
        Clear.render(modal, buf);
        render_shadow(buf, modal);

        let block = styles::modal_block(" Go to location ");
        let inner = block.inner(modal);
        block.render(modal, buf);

        // Keep the tail of long input visible next to the cursor
        let room = inner.width.saturating_sub(4) as usize;
        let input = &self.state.input;
        let shown = if input.chars().count() > room {
            let skip = input.chars().count() - room;
            input.chars().skip(skip).collect::<String>()
        } else {
            input.clone()
        };

        let mut lines = vec![Line::from(vec![
            Span::styled("> ", styles::accent_bold()),
            Span::styled(shown, styles::text_primary()),
            Span::styled("█", styles::accent()),
        ])];

        match &self.state.error {
            Some(error) => lines.push(Line::styled(
                truncate_to_width(error, inner.width as usize),
                styles::status_red(),
            )),
            None => lines.push(Line::from("")),
        }

        lines.push(Line::from(vec![
            Span::styled("Enter", styles::keybinding()),
            Span::styled(" go  ", styles::text_muted()),
            Span::styled("Esc", styles::keybinding()),
            Span::styled(" cancel", styles::text_muted()),
        ]));

        Paragraph::new(lines).render(inner, buf);
    }
}
