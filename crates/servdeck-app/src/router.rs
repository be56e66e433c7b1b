//! View resolution for the server area
//!
//! [`resolve`] is a pure function of the live scope, the location and the
//! viewer. It decides between spinner, error screen, conflict screen and the
//! routed sub-view, and derives the sub-navigation once a server is loaded.

use servdeck_core::{PowerState, ViewerIdentity};

use crate::conflict::ConflictScreen;
use crate::location::{server_base_path, Location};
use crate::navigation::NavigationMenu;
use crate::routes::{feature, match_route, RouteMatch, SubView};
use crate::scope::ServerScope;

/// What the body region shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Nothing loaded yet
    Spinner,
    /// Load failed before anything was loaded
    Error { message: String },
    Conflict(ConflictScreen),
    SubView(SubView),
    /// The route exists but the viewer lacks its capability
    PermissionDenied { view: SubView },
    NotFound,
}

/// Header facts about the loaded server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSummary {
    pub name: String,
    pub node: String,
    pub power_state: Option<PowerState>,
}

/// Everything the terminal layer needs to draw the server area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerView {
    pub summary: Option<ServerSummary>,
    /// Present once the server is loaded, conflict or not
    pub menu: Option<NavigationMenu>,
    pub active_tab: Option<usize>,
    pub listeners_mounted: bool,
    pub body: Body,
}

impl ServerView {
    fn bare(body: Body) -> Self {
        Self {
            summary: None,
            menu: None,
            active_tab: None,
            listeners_mounted: false,
            body,
        }
    }
}

/// Admin bypass: root admins see the console of a blocked server, but only
/// when the location is exactly `/server/{id}`.
pub fn admin_bypass(viewer: &ViewerIdentity, location: &Location, server_id: &str) -> bool {
    viewer.root_admin && location.as_str() == server_base_path(server_id)
}

pub fn resolve(
    scope: Option<&ServerScope>,
    location: &Location,
    viewer: &ViewerIdentity,
    panel_url: &str,
) -> ServerView {
    let Some(matched) = location.server_match() else {
        return ServerView::bare(Body::NotFound);
    };

    let Some(scope) = scope else {
        return ServerView::bare(Body::Spinner);
    };

    let Some(server) = scope.store.server() else {
        let body = match &scope.error {
            Some(message) => Body::Error {
                message: message.clone(),
            },
            None => Body::Spinner,
        };
        return ServerView::bare(body);
    };

    let permissions = scope.store.permissions();
    let menu = NavigationMenu::build(&matched.url, server, permissions, viewer, panel_url);
    let active_tab = menu.active_index(&matched);

    let body = if server.in_conflict_state() && !admin_bypass(viewer, location, &server.id) {
        Body::Conflict(ConflictScreen::select(&server.status, server.is_transferring))
    } else {
        match match_route(&matched.rest, location.fragment()) {
            RouteMatch::View { view, feature: key } => {
                let allowed = key.map_or(true, |k| permissions.can(&feature(k).requirement));
                if allowed {
                    Body::SubView(view)
                } else {
                    Body::PermissionDenied { view }
                }
            }
            RouteMatch::NotFound => Body::NotFound,
        }
    };

    ServerView {
        summary: Some(ServerSummary {
            name: server.name.clone(),
            node: server.node.clone(),
            power_state: scope.store.power_state(),
        }),
        menu: Some(menu),
        active_tab,
        listeners_mounted: scope.listeners_mounted,
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scope::ScopeProvider;
    use crate::test_support::snapshot;
    use servdeck_core::ServerStatus;

    const PANEL: &str = "https://panel.example.com";

    fn loaded(status: ServerStatus, transferring: bool, grants: &[&str]) -> ServerScope {
        let mut scope = ScopeProvider::new().provide("abc");
        scope
            .store
            .load(snapshot("abc", status, transferring, grants));
        scope.listeners_mounted = true;
        scope
    }

    fn at(scope: Option<&ServerScope>, location: &str, admin: bool) -> ServerView {
        resolve(
            scope,
            &Location::parse(location).unwrap(),
            &ViewerIdentity::new("viewer", admin),
            PANEL,
        )
    }

    #[test]
    fn test_spinner_before_load() {
        let scope = ScopeProvider::new().provide("abc");
        let view = at(Some(&scope), "/server/abc", false);
        assert_eq!(view.body, Body::Spinner);
        assert!(view.menu.is_none());
        assert!(!view.listeners_mounted);

        assert_eq!(at(None, "/server/abc", false).body, Body::Spinner);
    }

    #[test]
    fn test_error_before_load() {
        let mut scope = ScopeProvider::new().provide("abc");
        scope.error = Some("Request failed with status code 500".into());
        let view = at(Some(&scope), "/server/abc", false);
        assert_eq!(
            view.body,
            Body::Error {
                message: "Request failed with status code 500".into()
            }
        );
        assert!(view.menu.is_none());
    }

    #[test]
    fn test_normal_server_routes_to_console() {
        let scope = loaded(ServerStatus::Normal, false, &["file.read"]);
        let view = at(Some(&scope), "/server/abc", false);
        assert_eq!(view.body, Body::SubView(SubView::Console));
        assert_eq!(view.active_tab, Some(0));
        assert!(view.listeners_mounted);
        assert_eq!(view.summary.unwrap().name, "Server abc");
    }

    #[test]
    fn test_direct_access_without_capability_is_denied() {
        let scope = loaded(ServerStatus::Normal, false, &["file.read"]);
        let view = at(Some(&scope), "/server/abc/databases", false);
        assert_eq!(
            view.body,
            Body::PermissionDenied {
                view: SubView::Databases
            }
        );
        let view = at(Some(&scope), "/server/abc/files", false);
        assert_eq!(view.body, Body::SubView(SubView::FileManager));
    }

    #[test]
    fn test_unknown_sub_path_is_not_found() {
        let scope = loaded(ServerStatus::Normal, false, &["*"]);
        let view = at(Some(&scope), "/server/abc/nowhere", false);
        assert_eq!(view.body, Body::NotFound);
        assert!(view.menu.is_some());
    }

    #[test]
    fn test_outside_server_area_is_not_found() {
        assert_eq!(at(None, "/account", false).body, Body::NotFound);
    }

    #[test]
    fn test_conflict_keeps_menu_and_listeners() {
        let scope = loaded(ServerStatus::Suspended, false, &["*"]);
        let view = at(Some(&scope), "/server/abc", false);
        assert_eq!(view.body, Body::Conflict(ConflictScreen::Suspended));
        assert!(view.menu.is_some());
        assert!(view.listeners_mounted);
    }

    #[test]
    fn test_transfer_flag_alone_is_conflict() {
        let scope = loaded(ServerStatus::Normal, true, &["*"]);
        let view = at(Some(&scope), "/server/abc/files", false);
        assert_eq!(view.body, Body::Conflict(ConflictScreen::Transferring));
    }

    #[test]
    fn test_admin_bypass_only_at_exact_base_path() {
        let scope = loaded(ServerStatus::Installing, false, &[]);

        assert_eq!(
            at(Some(&scope), "/server/abc", true).body,
            Body::SubView(SubView::Console)
        );
        for location in [
            "/server/abc/",
            "/server/abc?tab=1",
            "/server/abc#top",
            "/server/abc/files",
        ] {
            assert_eq!(
                at(Some(&scope), location, true).body,
                Body::Conflict(ConflictScreen::Installing),
                "{} must not bypass",
                location
            );
        }
        assert_eq!(
            at(Some(&scope), "/server/abc", false).body,
            Body::Conflict(ConflictScreen::Installing)
        );
    }

    #[test]
    fn test_admin_link_follows_root_admin() {
        let scope = loaded(ServerStatus::Normal, false, &[]);
        let admin = at(Some(&scope), "/server/abc", true).menu.unwrap();
        let user = at(Some(&scope), "/server/abc", false).menu.unwrap();
        assert_eq!(
            admin.admin_link.unwrap().url,
            "https://panel.example.com/admin/servers/view/42"
        );
        assert!(user.admin_link.is_none());
    }
}
