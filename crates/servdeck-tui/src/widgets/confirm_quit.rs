//! Quit confirmation prompt

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget},
};

use crate::theme::styles;

use super::modal_overlay::{centered_rect, render_shadow};

pub struct ConfirmQuitDialog;

impl Widget for ConfirmQuitDialog {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = centered_rect(36, 5, area);
        Clear.render(modal, buf);
        render_shadow(buf, modal);

        let lines = vec![
            Line::styled("Quit servdeck?", styles::text_primary()),
            Line::from(""),
            Line::from(vec![
                Span::styled("y", styles::keybinding()),
                Span::styled(" quit   ", styles::text_muted()),
                Span::styled("n", styles::keybinding()),
                Span::styled(" stay", styles::text_muted()),
            ]),
        ];

        Paragraph::new(lines)
            .block(styles::modal_block(" Confirm "))
            .alignment(Alignment::Center)
            .render(modal, buf);
    }
}
