//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header (panel, viewer, server name, power state)
    pub header: Rect,

    /// Sub-navigation tabs; zero height until a server is loaded
    pub tabs: Rect,

    /// Spinner, blocking screen or routed view
    pub body: Rect,

    /// Location and key hints
    pub footer: Rect,
}

/// Create the main screen layout
///
/// # Arguments
/// * `area` - Total screen area
/// * `show_tabs` - Whether the navigation row is present
pub fn create(area: Rect, show_tabs: bool) -> ScreenAreas {
    let tabs_height = if show_tabs { 3 } else { 0 };

    let chunks = Layout::vertical([
        Constraint::Length(3),           // Header (glass container)
        Constraint::Length(tabs_height), // Tabs (glass container)
        Constraint::Min(3),              // Body
        Constraint::Length(1),           // Footer
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        tabs: chunks[1],
        body: chunks[2],
        footer: chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_without_tabs() {
        let layout = create(Rect::new(0, 0, 80, 24), false);
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.tabs.height, 0);
        assert_eq!(layout.body.y, 3);
        assert_eq!(layout.body.height, 20);
        assert_eq!(layout.footer.y, 23);
    }

    #[test]
    fn test_layout_with_tabs() {
        let layout = create(Rect::new(0, 0, 80, 24), true);
        assert_eq!(layout.tabs.y, 3);
        assert_eq!(layout.tabs.height, 3);
        assert_eq!(layout.body.y, 6);
        assert_eq!(layout.body.height, 17);
    }

    #[test]
    fn test_layout_areas_contiguous() {
        let area = Rect::new(0, 0, 80, 24);
        for show_tabs in [false, true] {
            let l = create(area, show_tabs);
            assert_eq!(
                l.header.height + l.tabs.height + l.body.height + l.footer.height,
                area.height
            );
        }
    }
}
