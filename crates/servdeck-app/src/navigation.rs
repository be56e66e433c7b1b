//! Sub-navigation derived from the viewer's grants

use servdeck_core::{PermissionSet, ServerData, ViewerIdentity};

use crate::location::{Location, ServerMatch};
use crate::routes::{FeatureKey, FEATURES};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavTab {
    pub label: &'static str,
    /// Location the tab navigates to
    pub href: Location,
    /// `None` for Console
    pub feature: Option<FeatureKey>,
}

/// External link to the server's page in the admin area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminLink {
    pub label: &'static str,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationMenu {
    pub tabs: Vec<NavTab>,
    pub admin_link: Option<AdminLink>,
}

impl NavigationMenu {
    /// Console first, then every feature the viewer may use in table order.
    /// The admin link depends on `root_admin` alone.
    pub fn build(
        base_url: &str,
        server: &ServerData,
        permissions: &PermissionSet,
        viewer: &ViewerIdentity,
        panel_url: &str,
    ) -> Self {
        let mut tabs = vec![NavTab {
            label: "Console",
            href: Location::with_sub_path(base_url, ""),
            feature: None,
        }];

        tabs.extend(
            FEATURES
                .iter()
                .filter(|f| permissions.can(&f.requirement))
                .map(|f| NavTab {
                    label: f.label,
                    href: Location::with_sub_path(base_url, f.path),
                    feature: Some(f.key),
                }),
        );

        let admin_link = viewer.root_admin.then(|| AdminLink {
            label: "Admin",
            url: format!(
                "{}/admin/servers/view/{}",
                panel_url.trim_end_matches('/'),
                server.internal_id
            ),
        });

        Self { tabs, admin_link }
    }

    /// Index of the tab the location falls under. Console only matches its
    /// exact base path; other tabs also cover their nested routes.
    pub fn active_index(&self, matched: &ServerMatch) -> Option<usize> {
        if matched.rest.is_empty() {
            return Some(0);
        }
        let first = matched.rest.split('/').next().unwrap_or_default();
        self.tabs.iter().position(|tab| {
            tab.feature.is_some() && tab.href.path().rsplit('/').next() == Some(first)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::snapshot;
    use servdeck_core::ServerStatus;

    fn menu(grants: &[&str], root_admin: bool) -> NavigationMenu {
        let snap = snapshot("abc", ServerStatus::Normal, false, grants);
        NavigationMenu::build(
            "/server/abc",
            &snap.server,
            &snap.permissions,
            &ViewerIdentity::new("alice", root_admin),
            "https://panel.example.com/",
        )
    }

    fn labels(menu: &NavigationMenu) -> Vec<&'static str> {
        menu.tabs.iter().map(|t| t.label).collect()
    }

    #[test]
    fn test_no_grants_shows_console_only() {
        let m = menu(&[], false);
        assert_eq!(labels(&m), vec!["Console"]);
        assert_eq!(m.tabs[0].href.as_str(), "/server/abc");
        assert!(m.admin_link.is_none());
    }

    #[test]
    fn test_wildcard_shows_every_tab_in_order() {
        let m = menu(&["*"], false);
        assert_eq!(
            labels(&m),
            vec![
                "Console", "Files", "Databases", "Tasks", "Users", "Backups", "Network",
                "Startup", "Settings"
            ]
        );
        assert_eq!(m.tabs[3].href.as_str(), "/server/abc/schedules");
    }

    #[test]
    fn test_settings_tab_with_sftp_only() {
        let m = menu(&["file.sftp"], false);
        assert_eq!(labels(&m), vec!["Console", "Files", "Settings"]);
    }

    #[test]
    fn test_admin_link_for_root_admin_without_grants() {
        let m = menu(&[], true);
        assert_eq!(labels(&m), vec!["Console"]);
        assert_eq!(
            m.admin_link.unwrap().url,
            "https://panel.example.com/admin/servers/view/42"
        );
    }

    #[test]
    fn test_active_index() {
        let m = menu(&["*"], false);
        let at = |s: &str| {
            m.active_index(&Location::parse(s).unwrap().server_match().unwrap())
        };
        assert_eq!(at("/server/abc"), Some(0));
        assert_eq!(at("/server/abc/"), Some(0));
        assert_eq!(at("/server/abc/files/edit#/a.txt"), Some(1));
        assert_eq!(at("/server/abc/schedules/4"), Some(3));
        assert_eq!(at("/server/abc/nope"), None);
    }
}
