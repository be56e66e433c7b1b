//! Sub-navigation tabs for the mounted server
//!
//! Tab titles carry their number key. The admin link, when present, is
//! right-aligned in the same row.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Tabs, Widget},
};

use servdeck_app::NavigationMenu;

use crate::theme::{icons::IconSet, palette, styles};

pub struct ServerTabs<'a> {
    menu: &'a NavigationMenu,
    active: Option<usize>,
    icons: IconSet,
}

impl<'a> ServerTabs<'a> {
    pub fn new(menu: &'a NavigationMenu, active: Option<usize>, icons: IconSet) -> Self {
        Self {
            menu,
            active,
            icons,
        }
    }

    fn tab_titles(&self) -> Vec<Line<'static>> {
        self.menu
            .tabs
            .iter()
            .enumerate()
            .map(|(i, tab)| {
                let key = if i < 9 {
                    format!("{} ", i + 1)
                } else {
                    String::new()
                };
                Line::from(vec![
                    Span::styled(key, styles::keybinding()),
                    Span::raw(tab.label),
                ])
            })
            .collect()
    }

    fn admin_line(&self) -> Option<Line<'static>> {
        self.menu.admin_link.as_ref().map(|link| {
            Line::from(vec![
                Span::styled(self.icons.external_link(), styles::status_yellow()),
                Span::raw(" "),
                Span::styled(link.label, styles::status_yellow()),
                Span::raw(" "),
            ])
        })
    }
}

impl Widget for ServerTabs<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let admin = self.admin_line();
        let admin_width = admin.as_ref().map_or(0, |l| l.width() as u16);

        let tabs_area = Rect {
            x: inner.x + 1,
            y: inner.y,
            width: inner.width.saturating_sub(admin_width + 2),
            height: 1,
        };

        // No highlight when the location sits outside every tab
        let highlight = if self.active.is_some() {
            styles::focused_selected()
        } else {
            Style::default()
        };
        Tabs::new(self.tab_titles())
            .select(self.active.unwrap_or(0))
            .highlight_style(highlight)
            .divider(Span::styled("│", styles::text_muted()))
            .render(tabs_area, buf);

        if let Some(line) = admin {
            if admin_width + 2 <= inner.width {
                let x = inner.x + inner.width - admin_width;
                buf.set_line(x, inner.y, &line, admin_width);
            }
        }
    }
}
