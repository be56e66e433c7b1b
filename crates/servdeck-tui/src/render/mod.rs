//! Main render/view function (View in TEA pattern)


use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use url::Url;

use servdeck_app::{AppState, Body, Location, UiMode};

use super::{layout, widgets};
use crate::theme::{icons::IconSet, palette, styles};

/// Render the complete UI (View function in TEA)
///
/// Pure in the state; everything shown comes from `AppState::view`.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let icons = IconSet::new(state.settings.ui.icons);
    let server_view = state.view();
    let areas = layout::create(area, server_view.menu.is_some());

    let host = panel_host(&state.panel_url);
    let header = widgets::MainHeader::new(&host, &state.viewer, icons)
        .with_summary(server_view.summary.as_ref());
    frame.render_widget(header, areas.header);

    if let Some(menu) = &server_view.menu {
        frame.render_widget(
            widgets::ServerTabs::new(menu, server_view.active_tab, icons),
            areas.tabs,
        );
    }

    match &server_view.body {
        Body::Spinner => {
            let label = match state.location.server_match() {
                Some(matched) => format!("Loading server {}", matched.id),
                None => "Loading".to_string(),
            };
            frame.render_widget(
                widgets::Spinner::new(state.spinner_frame, &label),
                areas.body,
            );
        }
        Body::Error { message } => {
            frame.render_widget(widgets::ScreenBlock::error(message, icons), areas.body);
        }
        Body::Conflict(screen) => {
            frame.render_widget(widgets::ScreenBlock::conflict(*screen, icons), areas.body);
        }
        Body::SubView(sub_view) => {
            let panel = widgets::SubViewPanel::new(
                sub_view,
                open_url(&state.panel_url, &state.location),
                server_view.listeners_mounted,
                icons,
            );
            frame.render_widget(panel, areas.body);
        }
        Body::PermissionDenied { view } => {
            frame.render_widget(
                widgets::ScreenBlock::permission_denied(view, icons),
                areas.body,
            );
        }
        Body::NotFound => {
            frame.render_widget(widgets::ScreenBlock::not_found(icons), areas.body);
        }
    }

    render_footer(frame, state, areas.footer);

    match state.ui_mode {
        UiMode::Normal => {}
        UiMode::AddressBar => {
            frame.render_widget(widgets::AddressBar::new(&state.address_bar), area);
        }
        UiMode::ConfirmQuit => {
            frame.render_widget(widgets::ConfirmQuitDialog, area);
        }
    }
}

/// Location on the left, key hints and last load time on the right
fn render_footer(frame: &mut Frame, state: &AppState, area: Rect) {
    let loaded_at = state
        .scope
        .as_ref()
        .and_then(|scope| scope.store.loaded_at())
        .map(|at| format!("updated {}", at.format("%H:%M:%S")));

    let mut right = vec![
        Span::styled("1-9", styles::keybinding()),
        Span::styled(" tabs  ", styles::text_muted()),
        Span::styled("/", styles::keybinding()),
        Span::styled(" go  ", styles::text_muted()),
        Span::styled("r", styles::keybinding()),
        Span::styled(" reload  ", styles::text_muted()),
        Span::styled("q", styles::keybinding()),
        Span::styled(" quit ", styles::text_muted()),
    ];
    if let Some(loaded_at) = loaded_at {
        right.push(Span::styled(format!(" {} ", loaded_at), styles::text_muted()));
    }
    let right = Line::from(right);
    let right_width = right.width() as u16;

    let left_budget = area.width.saturating_sub(right_width + 1) as usize;
    let left = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            widgets::truncate_to_width(state.location.as_str(), left_budget.saturating_sub(1)),
            styles::text_secondary(),
        ),
    ]);

    frame.render_widget(Paragraph::new(left), area);
    if right_width < area.width {
        let right_area = Rect {
            x: area.x + area.width - right_width,
            width: right_width,
            ..area
        };
        frame.render_widget(Paragraph::new(right), right_area);
    }
}

/// Host shown in the header; falls back to the configured string
fn panel_host(panel_url: &str) -> String {
    Url::parse(panel_url)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_else(|| panel_url.to_string())
}

/// Where the current location lives on the panel
fn open_url(panel_url: &str, location: &Location) -> String {
    format!("{}{}", panel_url.trim_end_matches('/'), location)
}
