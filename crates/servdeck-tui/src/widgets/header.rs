//! Header bar widget
//!
//! Shows the panel host and the server name on the left, power state and
//! viewer on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use servdeck_app::ServerSummary;
use servdeck_core::ViewerIdentity;

use crate::theme::{icons::IconSet, palette, styles};

use super::truncate_to_width;

pub struct MainHeader<'a> {
    panel_host: &'a str,
    viewer: &'a ViewerIdentity,
    summary: Option<&'a ServerSummary>,
    icons: IconSet,
}

impl<'a> MainHeader<'a> {
    pub fn new(panel_host: &'a str, viewer: &'a ViewerIdentity, icons: IconSet) -> Self {
        Self {
            panel_host,
            viewer,
            summary: None,
            icons,
        }
    }

    /// Show the loaded server's name, node and power state
    pub fn with_summary(mut self, summary: Option<&'a ServerSummary>) -> Self {
        self.summary = summary;
        self
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let right_line = self.right_line();
        let right_width = right_line.width() as u16;

        // Right section wins; the left side is truncated to what remains
        let left_budget = inner.width.saturating_sub(right_width + 2);
        let left_line = self.left_line(left_budget as usize);
        buf.set_line(inner.x, inner.y, &left_line, inner.width);

        if right_width + 2 <= inner.width {
            let right_x = inner.x + inner.width - right_width;
            buf.set_line(right_x, inner.y, &right_line, right_width);
        }
    }
}

impl MainHeader<'_> {
    fn left_line(&self, budget: usize) -> Line<'static> {
        let mut spans = vec![
            Span::raw(" "),
            Span::styled("servdeck", styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(self.panel_host.to_string(), styles::text_secondary()),
        ];

        if let Some(summary) = self.summary {
            spans.extend([
                Span::raw("  "),
                Span::styled(self.icons.server(), styles::accent()),
                Span::raw(" "),
                Span::styled(
                    summary.name.clone(),
                    Style::default()
                        .fg(palette::TEXT_PRIMARY)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" ({})", summary.node), styles::text_muted()),
            ]);
        }

        truncate_line(spans, budget)
    }

    fn right_line(&self) -> Line<'static> {
        let mut spans = Vec::new();

        if let Some(summary) = self.summary {
            let (label, style) = styles::power_indicator(summary.power_state);
            spans.extend([
                Span::styled(self.icons.dot(), style),
                Span::raw(" "),
                Span::styled(label, style),
                Span::raw("  "),
            ]);
        }

        spans.extend([
            Span::styled(self.icons.user(), styles::text_muted()),
            Span::raw(" "),
            Span::styled(self.viewer.username.clone(), styles::text_secondary()),
        ]);
        if self.viewer.root_admin {
            spans.push(Span::styled(" [admin]", styles::status_yellow()));
        }
        spans.push(Span::raw(" "));

        Line::from(spans)
    }
}

/// Drop or shorten trailing spans so the line fits `budget` columns
fn truncate_line(spans: Vec<Span<'static>>, budget: usize) -> Line<'static> {
    let mut used = 0;
    let mut kept = Vec::with_capacity(spans.len());

    for span in spans {
        let width = span.width();
        if used + width <= budget {
            used += width;
            kept.push(span);
        } else {
            let remaining = budget.saturating_sub(used);
            if remaining > 0 {
                let text = truncate_to_width(&span.content, remaining);
                kept.push(Span::styled(text, span.style));
            }
            break;
        }
    }

    Line::from(kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use servdeck_app::config::IconMode;
    use servdeck_core::PowerState;

    fn summary(power_state: Option<PowerState>) -> ServerSummary {
        ServerSummary {
            name: "Survival SMP".to_string(),
            node: "node-eu-1".to_string(),
            power_state,
        }
    }

    #[test]
    fn test_header_renders_panel_and_viewer() {
        let mut term = TestTerminal::new();
        let viewer = ViewerIdentity::new("alice", false);
        let header = MainHeader::new("panel.example.com", &viewer, IconSet::new(IconMode::Unicode));

        term.render_widget(header, term.area());

        assert!(term.buffer_contains("servdeck"));
        assert!(term.buffer_contains("panel.example.com"));
        assert!(term.buffer_contains("alice"));
        assert!(!term.buffer_contains("[admin]"));
    }

    #[test]
    fn test_header_renders_server_and_power() {
        let mut term = TestTerminal::with_size(100, 3);
        let viewer = ViewerIdentity::new("root", true);
        let summary = summary(Some(PowerState::Running));
        let header = MainHeader::new("panel.example.com", &viewer, IconSet::new(IconMode::Unicode))
            .with_summary(Some(&summary));

        term.render_widget(header, term.area());

        assert!(term.buffer_contains("Survival SMP"));
        assert!(term.buffer_contains("node-eu-1"));
        assert!(term.buffer_contains("running"));
        assert!(term.buffer_contains("[admin]"));
    }

    #[test]
    fn test_header_unknown_power_before_first_event() {
        let mut term = TestTerminal::with_size(100, 3);
        let viewer = ViewerIdentity::new("alice", false);
        let summary = summary(None);
        let header = MainHeader::new("panel.example.com", &viewer, IconSet::new(IconMode::Unicode))
            .with_summary(Some(&summary));

        term.render_widget(header, term.area());

        assert!(term.buffer_contains("unknown"));
    }

    #[test]
    fn test_header_compact_keeps_viewer() {
        let mut term = TestTerminal::compact();
        let viewer = ViewerIdentity::new("alice", false);
        let summary = summary(Some(PowerState::Offline));
        let header = MainHeader::new(
            "a-very-long-panel-hostname.example.com",
            &viewer,
            IconSet::new(IconMode::Unicode),
        )
        .with_summary(Some(&summary));

        term.render_widget(header, term.area());

        assert!(term.buffer_contains("alice"));
        assert!(term.buffer_contains("offline"));
        assert!(term.buffer_contains("servdeck"));
    }

    #[test]
    fn test_truncate_line_fits_budget() {
        let line = truncate_line(
            vec![Span::raw("abcdef"), Span::raw("ghijkl")],
            8,
        );
        assert_eq!(line.width(), 8);
    }
}
