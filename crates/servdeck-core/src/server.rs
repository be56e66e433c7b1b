//! Server domain types
//!
//! A server's identity (`id`, `uuid`, `internal_id`) always travels inside a
//! single [`ServerData`] value, so a partially loaded identity cannot be
//! represented.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::permission::PermissionSet;

/// Lifecycle status reported by the panel for a server.
///
/// Decoded from the nullable `status` attribute: `null` is [`ServerStatus::Normal`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum ServerStatus {
    #[default]
    Normal,
    Installing,
    InstallFailed,
    Suspended,
    RestoringBackup,
    Transferring,
    /// A status this client does not know about. Still treated as blocking.
    Other(String),
}

impl ServerStatus {
    /// Decode the wire representation
    pub fn from_wire(value: Option<&str>) -> Self {
        match value {
            None => ServerStatus::Normal,
            Some("installing") => ServerStatus::Installing,
            Some("install_failed") => ServerStatus::InstallFailed,
            Some("suspended") => ServerStatus::Suspended,
            Some("restoring_backup") => ServerStatus::RestoringBackup,
            Some("transferring") => ServerStatus::Transferring,
            Some(other) => ServerStatus::Other(other.to_string()),
        }
    }

    /// Wire representation (`None` for a normal server)
    pub fn as_wire(&self) -> Option<&str> {
        match self {
            ServerStatus::Normal => None,
            ServerStatus::Installing => Some("installing"),
            ServerStatus::InstallFailed => Some("install_failed"),
            ServerStatus::Suspended => Some("suspended"),
            ServerStatus::RestoringBackup => Some("restoring_backup"),
            ServerStatus::Transferring => Some("transferring"),
            ServerStatus::Other(s) => Some(s.as_str()),
        }
    }

    /// Any status other than `Normal` blocks the regular views
    pub fn is_blocking(&self) -> bool {
        !matches!(self, ServerStatus::Normal)
    }

    pub fn is_installing(&self) -> bool {
        matches!(self, ServerStatus::Installing | ServerStatus::InstallFailed)
    }
}

impl From<Option<String>> for ServerStatus {
    fn from(value: Option<String>) -> Self {
        ServerStatus::from_wire(value.as_deref())
    }
}

impl From<ServerStatus> for Option<String> {
    fn from(value: ServerStatus) -> Self {
        value.as_wire().map(str::to_string)
    }
}

impl fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire().unwrap_or("normal"))
    }
}

/// Power state pushed by the realtime stream (`status` event)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerState {
    Offline,
    Starting,
    Running,
    Stopping,
}

impl PowerState {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "offline" => Some(PowerState::Offline),
            "starting" => Some(PowerState::Starting),
            "running" => Some(PowerState::Running),
            "stopping" => Some(PowerState::Stopping),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PowerState::Offline => "offline",
            PowerState::Starting => "starting",
            PowerState::Running => "running",
            PowerState::Stopping => "stopping",
        }
    }
}

/// Borrowed view of the three identifiers of a loaded server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerIdentity<'a> {
    /// Short public identifier used in the location path
    pub id: &'a str,
    /// Canonical identifier used by realtime subsystems
    pub uuid: &'a str,
    /// Administrative numeric reference
    pub internal_id: u64,
}

/// Server metadata as held by the scoped store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerData {
    pub id: String,
    pub uuid: String,
    pub internal_id: u64,
    pub name: String,
    #[serde(default)]
    pub node: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: ServerStatus,
    #[serde(default)]
    pub is_transferring: bool,
    #[serde(default)]
    pub is_node_under_maintenance: bool,
}

impl ServerData {
    pub fn identity(&self) -> ServerIdentity<'_> {
        ServerIdentity {
            id: &self.id,
            uuid: &self.uuid,
            internal_id: self.internal_id,
        }
    }

    /// Conflict state: a blocking status or an in-flight transfer
    pub fn in_conflict_state(&self) -> bool {
        self.status.is_blocking() || self.is_transferring
    }
}

/// Result of a successful server load: metadata plus the viewer's grants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSnapshot {
    pub server: ServerData,
    pub permissions: PermissionSet,
}
