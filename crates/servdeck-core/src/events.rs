//! Realtime server events
//!
//! The panel's realtime stream sends frames shaped like
//! `{"event": "status", "args": ["running"]}`. Only the events the server
//! view reacts to get a typed variant.

use serde::Deserialize;

use crate::server::PowerState;

/// Progress of a node-to-node transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferStatus {
    Pending,
    Processing,
    Completed,
    Failed,
    Other(String),
}

impl TransferStatus {
    pub fn parse(value: &str) -> Self {
        match value {
            "pending" => TransferStatus::Pending,
            "processing" => TransferStatus::Processing,
            "completed" => TransferStatus::Completed,
            "failed" => TransferStatus::Failed,
            other => TransferStatus::Other(other.to_string()),
        }
    }

    /// The server is mid-transfer while pending or processing
    pub fn is_in_progress(&self) -> bool {
        matches!(self, TransferStatus::Pending | TransferStatus::Processing)
    }
}

/// Server event pushed by the realtime stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerEvent {
    /// Power state changed (`status`)
    PowerState(PowerState),
    InstallStarted,
    InstallCompleted,
    BackupRestoreCompleted,
    TransferStatus(TransferStatus),
    /// Error reported by the node daemon, surfaced in the log only
    DaemonError(String),
}

/// Raw frame envelope
#[derive(Debug, Clone, Deserialize)]
pub struct EventFrame {
    pub event: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl EventFrame {
    pub fn first_arg(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    /// Convert into a typed event, `None` for events the server view ignores
    pub fn into_server_event(self) -> Option<ServerEvent> {
        match self.event.as_str() {
            "status" => self
                .first_arg()
                .and_then(PowerState::parse)
                .map(ServerEvent::PowerState),
            "install started" => Some(ServerEvent::InstallStarted),
            "install completed" => Some(ServerEvent::InstallCompleted),
            "backup restore completed" => Some(ServerEvent::BackupRestoreCompleted),
            "transfer status" => self
                .first_arg()
                .map(|s| ServerEvent::TransferStatus(TransferStatus::parse(s))),
            "daemon error" => Some(ServerEvent::DaemonError(
                self.first_arg().unwrap_or_default().to_string(),
            )),
            _ => None,
        }
    }
}
