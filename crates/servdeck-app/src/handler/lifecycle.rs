//! Server scope lifecycle: mount, unmount and load results
//!
//! Switching servers always tears the old scope down before the new one is
//! created, so the first resolution after a switch is a spinner rather than
//! the previous server's data.

use servdeck_core::prelude::*;
use servdeck_core::ServerSnapshot;

use crate::location::Location;
use crate::message::Message;
use crate::scope::Generation;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub(crate) fn handle_navigate(state: &mut AppState, location: Location) -> UpdateResult {
    let next_param = location.server_match().map(|m| m.id);
    let current_param = state.scope.as_ref().map(|s| s.param().to_string());
    state.location = location;

    // Same server: only the sub-route changed
    if next_param.is_some() && next_param == current_param {
        return UpdateResult::none();
    }

    handle_unmount(state, next_param.map(|param| Message::MountServer { param }))
}

/// Tear down the current scope, then continue with `then`. Safe to call
/// with nothing mounted.
pub(crate) fn handle_unmount(state: &mut AppState, then: Option<Message>) -> UpdateResult {
    let action = state.scope.take().and_then(|mut scope| {
        let had_listeners = scope.teardown();
        debug!(
            "Unmounted server {} (scope {})",
            scope.param(),
            scope.generation()
        );
        had_listeners.then(|| UpdateAction::StopListeners {
            generation: scope.generation(),
        })
    });

    UpdateResult {
        message: then,
        action,
    }
}

pub(crate) fn handle_mount(state: &mut AppState, param: String) -> UpdateResult {
    if state.scope.is_some() {
        return handle_unmount(state, Some(Message::MountServer { param }));
    }

    let scope = state.provider.provide(param);
    info!(
        "Loading server {} (scope {})",
        scope.param(),
        scope.generation()
    );
    let action = UpdateAction::LoadServer {
        generation: scope.generation(),
        identifier: scope.param().to_string(),
    };
    state.scope = Some(scope);
    UpdateResult::action(action)
}

pub(crate) fn handle_remount(state: &mut AppState) -> UpdateResult {
    match state.location.server_match() {
        Some(matched) => handle_unmount(state, Some(Message::MountServer { param: matched.id })),
        None => UpdateResult::none(),
    }
}

pub(crate) fn handle_server_loaded(
    state: &mut AppState,
    generation: Generation,
    snapshot: ServerSnapshot,
) -> UpdateResult {
    let Some(scope) = state.scope_for(generation) else {
        debug!("Discarding stale load result for scope {}", generation);
        return UpdateResult::none();
    };

    let uuid = snapshot.server.uuid.clone();
    debug!(
        "Server {} loaded: status={}, transferring={}",
        scope.param(),
        snapshot.server.status,
        snapshot.server.is_transferring
    );
    scope.store.load(snapshot);
    scope.error = None;

    if scope.listeners_mounted {
        return UpdateResult::none();
    }
    scope.listeners_mounted = true;

    UpdateResult::action(UpdateAction::StartListeners {
        generation,
        identifier: scope.param().to_string(),
        uuid,
    })
}

pub(crate) fn handle_server_load_failed(
    state: &mut AppState,
    generation: Generation,
    error: String,
) -> UpdateResult {
    let Some(scope) = state.scope_for(generation) else {
        debug!("Discarding stale load failure for scope {}", generation);
        return UpdateResult::none();
    };

    if scope.store.is_loaded() {
        // Keep showing what we have
        warn!("Refreshing server {} failed: {}", scope.param(), error);
    } else {
        error!("Failed to load server {}: {}", scope.param(), error);
        scope.error = Some(error);
    }
    UpdateResult::none()
}
