//! Realtime events applied to the mounted server
//!
//! The listener task forwards decoded events tagged with the generation it
//! was started for. Three concerns share the stream: install progress,
//! transfer progress and the general realtime state (power).

use servdeck_core::prelude::*;
use servdeck_core::{ServerEvent, ServerStatus, TransferStatus};

use crate::scope::{Generation, ServerScope};
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub(crate) fn handle_server_event(
    state: &mut AppState,
    generation: Generation,
    event: ServerEvent,
) -> UpdateResult {
    let Some(scope) = state.scope_for(generation) else {
        trace!("Dropping event for stale scope {}: {:?}", generation, event);
        return UpdateResult::none();
    };

    match event {
        ServerEvent::InstallStarted
        | ServerEvent::InstallCompleted
        | ServerEvent::BackupRestoreCompleted => install_listener(scope, &event),
        ServerEvent::TransferStatus(status) => transfer_listener(scope, status),
        ServerEvent::PowerState(_) | ServerEvent::DaemonError(_) => {
            realtime_handler(scope, event);
            UpdateResult::none()
        }
    }
}

fn install_listener(scope: &mut ServerScope, event: &ServerEvent) -> UpdateResult {
    match event {
        ServerEvent::InstallStarted => {
            info!("Install started on {}", scope.param());
            scope.store.set_status(ServerStatus::Installing);
            UpdateResult::none()
        }
        _ => {
            info!("{:?} on {}, reloading", event, scope.param());
            refresh(scope)
        }
    }
}

fn transfer_listener(scope: &mut ServerScope, status: TransferStatus) -> UpdateResult {
    if status.is_in_progress() {
        scope.store.set_transferring(true);
        return UpdateResult::none();
    }

    match status {
        TransferStatus::Failed => {
            warn!("Transfer of {} failed", scope.param());
            scope.store.set_transferring(false);
            UpdateResult::none()
        }
        TransferStatus::Completed => {
            info!("Transfer of {} completed, reloading", scope.param());
            refresh(scope)
        }
        other => {
            debug!("Ignoring transfer status {:?}", other);
            UpdateResult::none()
        }
    }
}

fn realtime_handler(scope: &mut ServerScope, event: ServerEvent) {
    match event {
        ServerEvent::PowerState(power) => scope.store.set_power_state(power),
        ServerEvent::DaemonError(message) => {
            warn!("Daemon error on {}: {}", scope.param(), message)
        }
        _ => {}
    }
}

/// Reload into the same scope; the load result keeps the generation
fn refresh(scope: &ServerScope) -> UpdateResult {
    UpdateResult::action(UpdateAction::LoadServer {
        generation: scope.generation(),
        identifier: scope.param().to_string(),
    })
}

pub(crate) fn handle_listener_stopped(
    state: &mut AppState,
    generation: Generation,
    reason: String,
) -> UpdateResult {
    let Some(scope) = state.scope_for(generation) else {
        return UpdateResult::none();
    };

    warn!("Realtime listener for {} stopped: {}", scope.param(), reason);
    // The next successful load starts a new listener
    scope.listeners_mounted = false;
    UpdateResult::action(UpdateAction::StopListeners { generation })
}
