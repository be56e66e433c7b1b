//! Body panel for a routed sub-view
//!
//! The views themselves live in the panel; this shows which one the
//! location resolved to, where to open it, and the listener state.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use servdeck_app::{FileAction, SubView};

use crate::theme::{icons::IconSet, palette, styles};

pub struct SubViewPanel<'a> {
    view: &'a SubView,
    /// Full URL of the current location on the panel
    open_url: String,
    listeners_mounted: bool,
    icons: IconSet,
}

impl<'a> SubViewPanel<'a> {
    pub fn new(view: &'a SubView, open_url: String, listeners_mounted: bool, icons: IconSet) -> Self {
        Self {
            view,
            open_url,
            listeners_mounted,
            icons,
        }
    }

    fn detail(&self) -> Option<String> {
        match self.view {
            SubView::FileEdit {
                action: FileAction::Edit,
                path,
            } if !path.is_empty() => Some(format!("File: {}", path)),
            SubView::FileEdit {
                action: FileAction::New,
                ..
            } => Some("New file".to_string()),
            SubView::ScheduleEdit { schedule_id } => Some(format!("Schedule id: {}", schedule_id)),
            _ => None,
        }
    }
}

impl Widget for SubViewPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true)
            .title(format!(" {} ", self.view.title()))
            .style(Style::default().bg(palette::CARD_BG));

        let mut lines = vec![Line::from("")];
        if let Some(detail) = self.detail() {
            lines.push(Line::styled(detail, styles::text_primary()));
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![
            Span::styled(self.icons.chevron_right(), styles::accent()),
            Span::raw(" "),
            Span::styled(self.open_url.clone(), styles::accent()),
        ]));
        lines.push(Line::from(""));

        let realtime = if self.listeners_mounted {
            Line::from(vec![
                Span::styled(self.icons.dot(), Style::default().fg(palette::STATUS_GREEN)),
                Span::styled(" realtime events connected", styles::text_muted()),
            ])
        } else {
            Line::from(vec![
                Span::styled(self.icons.link_broken(), styles::status_red()),
                Span::styled(" realtime events stopped, press r to reconnect", styles::text_muted()),
            ])
        };
        lines.push(realtime);

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use servdeck_app::config::IconMode;

    fn render(view: &SubView, listeners: bool) -> TestTerminal {
        let mut term = TestTerminal::with_size(90, 12);
        let panel = SubViewPanel::new(
            view,
            "https://panel.example.com/server/abc".to_string(),
            listeners,
            IconSet::new(IconMode::Unicode),
        );
        term.render_widget(panel, term.area());
        term
    }

    #[test]
    fn test_renders_title_and_url() {
        let term = render(&SubView::Console, true);
        assert!(term.buffer_contains("Console"));
        assert!(term.buffer_contains("https://panel.example.com/server/abc"));
        assert!(term.buffer_contains("realtime events connected"));
    }

    #[test]
    fn test_file_edit_shows_path() {
        let view = SubView::FileEdit {
            action: FileAction::Edit,
            path: "/server.properties".to_string(),
        };
        let term = render(&view, true);
        assert!(term.buffer_contains("File: /server.properties"));
    }

    #[test]
    fn test_stopped_listeners_hint_retry() {
        let term = render(&SubView::Backups, false);
        assert!(term.buffer_contains("press r to reconnect"));
    }
}
