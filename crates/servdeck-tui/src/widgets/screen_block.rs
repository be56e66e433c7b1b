//! Full-body message screens
//!
//! Used for the conflict screens, load errors, denied routes and unknown
//! locations. Each has a small illustration, a title and a message.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use servdeck_app::{ConflictScreen, ScreenImage, SubView};

use crate::theme::{icons::IconSet, palette, styles};

use super::modal_overlay::centered_rect;

const INSTALLING_ART: &[&str] = &["┌─────────┐", "│ ▓▓▓▓░░░ │", "└─────────┘"];
const SERVER_ERROR_ART: &[&str] = &["┌─────────┐", "│  ✕   ✕  │", "└─────────┘"];
const RESTORE_ART: &[&str] = &["┌─────────┐", "│ ⟲  ▒▒▒▒ │", "└─────────┘"];

fn art(image: ScreenImage) -> &'static [&'static str] {
    match image {
        ScreenImage::Installing => INSTALLING_ART,
        ScreenImage::ServerError => SERVER_ERROR_ART,
        ScreenImage::Restore => RESTORE_ART,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Info,
    Warning,
    Error,
}

pub struct ScreenBlock {
    title: String,
    message: String,
    image: ScreenImage,
    tone: Tone,
    icons: IconSet,
}

impl ScreenBlock {
    pub fn conflict(screen: ConflictScreen, icons: IconSet) -> Self {
        let tone = match screen {
            ConflictScreen::Suspended => Tone::Error,
            _ => Tone::Info,
        };
        Self {
            title: screen.title().to_string(),
            message: screen.message().to_string(),
            image: screen.image(),
            tone,
            icons,
        }
    }

    /// Load failure before anything was shown. `message` is displayed as is.
    pub fn error(message: &str, icons: IconSet) -> Self {
        Self {
            title: "Error".to_string(),
            message: format!("{}  Press r to retry.", message),
            image: ScreenImage::ServerError,
            tone: Tone::Error,
            icons,
        }
    }

    pub fn permission_denied(view: &SubView, icons: IconSet) -> Self {
        Self {
            title: "Permission Denied".to_string(),
            message: format!("You do not have permission to access {}.", view.title()),
            image: ScreenImage::ServerError,
            tone: Tone::Warning,
            icons,
        }
    }

    pub fn not_found(icons: IconSet) -> Self {
        Self {
            title: "Not Found".to_string(),
            message: "The requested resource was not found. Press / to enter a server location."
                .to_string(),
            image: ScreenImage::ServerError,
            tone: Tone::Warning,
            icons,
        }
    }

    fn title_style(&self) -> Style {
        let color = match self.tone {
            Tone::Info => palette::ACCENT,
            Tone::Warning => palette::STATUS_YELLOW,
            Tone::Error => palette::STATUS_RED,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    fn title_icon(&self) -> &'static str {
        match self.tone {
            Tone::Info => self.icons.dot(),
            Tone::Warning => self.icons.lock(),
            Tone::Error => self.icons.alert(),
        }
    }
}

impl Widget for ScreenBlock {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let art = art(self.image);
        let width = area.width.saturating_sub(4).min(64);
        let height = (art.len() as u16 + 6).min(area.height);
        let target = centered_rect(width, height, area);

        let mut lines: Vec<Line> = art
            .iter()
            .map(|row| Line::styled(*row, styles::text_muted()))
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(self.title_icon(), self.title_style()),
            Span::raw(" "),
            Span::styled(self.title.clone(), self.title_style()),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::styled(self.message.clone(), styles::text_secondary()));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(target, buf);
    }
}
