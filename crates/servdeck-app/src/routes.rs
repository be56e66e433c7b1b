//! Feature and route tables
//!
//! [`FEATURES`] lists the permission-gated tabs in display order. The route
//! table refers to features by key, so a tab and the routes behind it always
//! carry the same requirement.

use percent_encoding::percent_decode_str;

use servdeck_core::Requirement;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureKey {
    Files,
    Databases,
    Schedules,
    Users,
    Backups,
    Network,
    Startup,
    Settings,
}

/// A permission-gated area of the server view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub key: FeatureKey,
    /// Tab label
    pub label: &'static str,
    /// Sub-path below `/server/{id}`
    pub path: &'static str,
    pub requirement: Requirement,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        key: FeatureKey::Files,
        label: "Files",
        path: "files",
        requirement: Requirement::all(&["file.*"]),
    },
    Feature {
        key: FeatureKey::Databases,
        label: "Databases",
        path: "databases",
        requirement: Requirement::all(&["database.*"]),
    },
    Feature {
        key: FeatureKey::Schedules,
        label: "Tasks",
        path: "schedules",
        requirement: Requirement::all(&["schedule.*"]),
    },
    Feature {
        key: FeatureKey::Users,
        label: "Users",
        path: "users",
        requirement: Requirement::all(&["user.*"]),
    },
    Feature {
        key: FeatureKey::Backups,
        label: "Backups",
        path: "backups",
        requirement: Requirement::all(&["backup.*"]),
    },
    Feature {
        key: FeatureKey::Network,
        label: "Network",
        path: "network",
        requirement: Requirement::all(&["allocation.*"]),
    },
    Feature {
        key: FeatureKey::Startup,
        label: "Startup",
        path: "startup",
        requirement: Requirement::all(&["startup.*"]),
    },
    Feature {
        key: FeatureKey::Settings,
        label: "Settings",
        path: "settings",
        requirement: Requirement::any(&["settings.*", "file.sftp"]),
    },
];

pub fn feature(key: FeatureKey) -> &'static Feature {
    let index = match key {
        FeatureKey::Files => 0,
        FeatureKey::Databases => 1,
        FeatureKey::Schedules => 2,
        FeatureKey::Users => 3,
        FeatureKey::Backups => 4,
        FeatureKey::Network => 5,
        FeatureKey::Startup => 6,
        FeatureKey::Settings => 7,
    };
    &FEATURES[index]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Edit,
    New,
}

/// Descriptor of the collaborator view a location resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubView {
    Console,
    FileManager,
    FileEdit { action: FileAction, path: String },
    Databases,
    Schedules,
    ScheduleEdit { schedule_id: String },
    Users,
    Backups,
    Network,
    Startup,
    Settings,
}

impl SubView {
    pub fn title(&self) -> String {
        match self {
            SubView::Console => "Console".to_string(),
            SubView::FileManager => "File Manager".to_string(),
            SubView::FileEdit {
                action: FileAction::Edit,
                path,
            } => format!("Edit File {}", path),
            SubView::FileEdit {
                action: FileAction::New,
                path,
            } => format!("New File in {}", if path.is_empty() { "/" } else { path }),
            SubView::Databases => "Databases".to_string(),
            SubView::Schedules => "Schedules".to_string(),
            SubView::ScheduleEdit { schedule_id } => format!("Schedule {}", schedule_id),
            SubView::Users => "Users".to_string(),
            SubView::Backups => "Backups".to_string(),
            SubView::Network => "Network".to_string(),
            SubView::Startup => "Startup".to_string(),
            SubView::Settings => "Settings".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Segment {
    Literal(&'static str),
    /// Named parameter; an empty list accepts any non-empty value
    Param(&'static [&'static str]),
}

impl Segment {
    fn matches(&self, value: &str) -> bool {
        match self {
            Segment::Literal(lit) => *lit == value,
            Segment::Param(allowed) => {
                !value.is_empty() && (allowed.is_empty() || allowed.contains(&value))
            }
        }
    }
}

type BuildView = fn(&[&str], Option<&str>) -> SubView;

struct Route {
    pattern: &'static [Segment],
    feature: Option<FeatureKey>,
    build: BuildView,
}

fn console(_: &[&str], _: Option<&str>) -> SubView {
    SubView::Console
}

fn file_manager(_: &[&str], _: Option<&str>) -> SubView {
    SubView::FileManager
}

fn file_edit(segments: &[&str], fragment: Option<&str>) -> SubView {
    let action = match segments.get(1) {
        Some(&"new") => FileAction::New,
        _ => FileAction::Edit,
    };
    let path = fragment
        .map(|f| percent_decode_str(f).decode_utf8_lossy().into_owned())
        .unwrap_or_default();
    SubView::FileEdit { action, path }
}

fn databases(_: &[&str], _: Option<&str>) -> SubView {
    SubView::Databases
}

fn schedules(_: &[&str], _: Option<&str>) -> SubView {
    SubView::Schedules
}

fn schedule_edit(segments: &[&str], _: Option<&str>) -> SubView {
    SubView::ScheduleEdit {
        schedule_id: segments.get(1).copied().unwrap_or_default().to_string(),
    }
}

fn users(_: &[&str], _: Option<&str>) -> SubView {
    SubView::Users
}

fn backups(_: &[&str], _: Option<&str>) -> SubView {
    SubView::Backups
}

fn network(_: &[&str], _: Option<&str>) -> SubView {
    SubView::Network
}

fn startup(_: &[&str], _: Option<&str>) -> SubView {
    SubView::Startup
}

fn settings(_: &[&str], _: Option<&str>) -> SubView {
    SubView::Settings
}

use Segment::{Literal, Param};

/// Ordered; first match wins
const ROUTES: &[Route] = &[
    Route {
        pattern: &[],
        feature: None,
        build: console,
    },
    Route {
        pattern: &[Literal("files")],
        feature: Some(FeatureKey::Files),
        build: file_manager,
    },
    Route {
        pattern: &[Literal("files"), Param(&["edit", "new"])],
        feature: Some(FeatureKey::Files),
        build: file_edit,
    },
    Route {
        pattern: &[Literal("databases")],
        feature: Some(FeatureKey::Databases),
        build: databases,
    },
    Route {
        pattern: &[Literal("schedules")],
        feature: Some(FeatureKey::Schedules),
        build: schedules,
    },
    Route {
        pattern: &[Literal("schedules"), Param(&[])],
        feature: Some(FeatureKey::Schedules),
        build: schedule_edit,
    },
    Route {
        pattern: &[Literal("users")],
        feature: Some(FeatureKey::Users),
        build: users,
    },
    Route {
        pattern: &[Literal("backups")],
        feature: Some(FeatureKey::Backups),
        build: backups,
    },
    Route {
        pattern: &[Literal("network")],
        feature: Some(FeatureKey::Network),
        build: network,
    },
    Route {
        pattern: &[Literal("startup")],
        feature: Some(FeatureKey::Startup),
        build: startup,
    },
    Route {
        pattern: &[Literal("settings")],
        feature: Some(FeatureKey::Settings),
        build: settings,
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteMatch {
    View {
        view: SubView,
        /// `None` for the ungated console
        feature: Option<FeatureKey>,
    },
    NotFound,
}

/// Match a sub-path (no surrounding slashes) against the route table.
pub fn match_route(rest: &str, fragment: Option<&str>) -> RouteMatch {
    let segments: Vec<&str> = if rest.is_empty() {
        Vec::new()
    } else {
        rest.split('/').collect()
    };

    ROUTES
        .iter()
        .find(|route| {
            route.pattern.len() == segments.len()
                && route
                    .pattern
                    .iter()
                    .zip(&segments)
                    .all(|(seg, value)| seg.matches(value))
        })
        .map_or(RouteMatch::NotFound, |route| RouteMatch::View {
            view: (route.build)(&segments, fragment),
            feature: route.feature,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use servdeck_core::MatchMode;

    fn view(rest: &str) -> SubView {
        match match_route(rest, None) {
            RouteMatch::View { view, .. } => view,
            RouteMatch::NotFound => panic!("no route for {:?}", rest),
        }
    }

    #[test]
    fn test_console_is_only_ungated_route() {
        let ungated: Vec<_> = ROUTES.iter().filter(|r| r.feature.is_none()).collect();
        assert_eq!(ungated.len(), 1);
        assert!(ungated[0].pattern.is_empty());
        assert_eq!(view(""), SubView::Console);
    }

    #[test]
    fn test_every_feature_has_a_route_at_its_path() {
        for feature in FEATURES {
            match match_route(feature.path, None) {
                RouteMatch::View {
                    feature: Some(key), ..
                } => assert_eq!(key, feature.key),
                other => panic!("{} resolved to {:?}", feature.path, other),
            }
        }
    }

    #[test]
    fn test_feature_keys_unique() {
        for (i, a) in FEATURES.iter().enumerate() {
            for b in &FEATURES[i + 1..] {
                assert_ne!(a.key, b.key);
                assert_ne!(a.path, b.path);
            }
            assert_eq!(feature(a.key), a);
        }
    }

    #[test]
    fn test_feature_lookup_returns_own_entry() {
        let keys = [
            FeatureKey::Files,
            FeatureKey::Databases,
            FeatureKey::Schedules,
            FeatureKey::Users,
            FeatureKey::Backups,
            FeatureKey::Network,
            FeatureKey::Startup,
            FeatureKey::Settings,
        ];
        assert_eq!(keys.len(), FEATURES.len());
        for key in keys {
            assert_eq!(feature(key).key, key);
        }
        assert_eq!(feature(FeatureKey::Settings).path, "settings");
        assert_eq!(
            feature(FeatureKey::Network).requirement,
            Requirement::all(&["allocation.*"])
        );
    }

    #[test]
    fn test_settings_requirement_is_any() {
        let settings = feature(FeatureKey::Settings);
        assert_eq!(settings.requirement.mode, MatchMode::Any);
        assert_eq!(settings.requirement.patterns, &["settings.*", "file.sftp"]);
    }

    #[test]
    fn test_file_edit_route() {
        let matched = match_route("files/edit", Some("/plugins/config%20file.yml"));
        assert_eq!(
            matched,
            RouteMatch::View {
                view: SubView::FileEdit {
                    action: FileAction::Edit,
                    path: "/plugins/config file.yml".to_string(),
                },
                feature: Some(FeatureKey::Files),
            }
        );
        assert_eq!(
            view("files/new"),
            SubView::FileEdit {
                action: FileAction::New,
                path: String::new()
            }
        );
    }

    #[test]
    fn test_file_action_is_constrained() {
        assert_eq!(match_route("files/delete", None), RouteMatch::NotFound);
    }

    #[test]
    fn test_schedule_edit_route() {
        assert_eq!(
            view("schedules/12"),
            SubView::ScheduleEdit {
                schedule_id: "12".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_paths_are_not_found() {
        assert_eq!(match_route("console", None), RouteMatch::NotFound);
        assert_eq!(match_route("files/edit/extra", None), RouteMatch::NotFound);
        assert_eq!(match_route("files//edit", None), RouteMatch::NotFound);
    }

    #[test]
    fn test_titles() {
        assert_eq!(view("schedules/3").title(), "Schedule 3");
        assert_eq!(view("files/new").title(), "New File in /");
    }
}
