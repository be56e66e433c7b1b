//! Blocking screens shown while a server is in a conflict state

use servdeck_core::ServerStatus;

/// Illustration drawn above a blocking screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenImage {
    Installing,
    ServerError,
    Restore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictScreen {
    Installing,
    Suspended,
    Transferring,
    Restoring,
}

impl ConflictScreen {
    /// Pick the screen for a server in conflict state. Pure in its inputs.
    pub fn select(status: &ServerStatus, is_transferring: bool) -> Self {
        match status {
            ServerStatus::Installing | ServerStatus::InstallFailed => ConflictScreen::Installing,
            ServerStatus::Suspended => ConflictScreen::Suspended,
            _ if is_transferring => ConflictScreen::Transferring,
            _ => ConflictScreen::Restoring,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ConflictScreen::Installing => "Running Installer",
            ConflictScreen::Suspended => "Server Suspended",
            ConflictScreen::Transferring => "Transferring",
            ConflictScreen::Restoring => "Restoring from Backup",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ConflictScreen::Installing => {
                "Your server should be ready soon, please try again in a few minutes."
            }
            ConflictScreen::Suspended => "This server is suspended and cannot be accessed.",
            ConflictScreen::Transferring => {
                "Your server is being transferred to a new node, please check back later."
            }
            ConflictScreen::Restoring => {
                "Your server is currently being restored from a backup, please check back in a few minutes."
            }
        }
    }

    pub fn image(&self) -> ScreenImage {
        match self {
            ConflictScreen::Installing => ScreenImage::Installing,
            ConflictScreen::Suspended => ScreenImage::ServerError,
            ConflictScreen::Transferring | ConflictScreen::Restoring => ScreenImage::Restore,
        }
    }
}
