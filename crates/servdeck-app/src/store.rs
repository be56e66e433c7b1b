//! Per-server store
//!
//! Holds the loaded server, the viewer's grants on it and the realtime power
//! state. Written only from the update loop: by the load result or by
//! realtime events the listeners forward.

use chrono::{DateTime, Local};

use servdeck_core::{PermissionSet, PowerState, ServerData, ServerSnapshot, ServerStatus};

#[derive(Debug, Clone, Default)]
pub struct ServerStore {
    data: Option<ServerData>,
    permissions: PermissionSet,
    power_state: Option<PowerState>,
    loaded_at: Option<DateTime<Local>>,
}

impl ServerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a fetched snapshot
    pub fn load(&mut self, snapshot: ServerSnapshot) {
        self.data = Some(snapshot.server);
        self.permissions = snapshot.permissions;
        self.loaded_at = Some(Local::now());
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The loaded server; `None` until the first load succeeds
    pub fn server(&self) -> Option<&ServerData> {
        self.data.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.data.is_some()
    }

    pub fn permissions(&self) -> &PermissionSet {
        &self.permissions
    }

    pub fn power_state(&self) -> Option<PowerState> {
        self.power_state
    }

    pub fn loaded_at(&self) -> Option<DateTime<Local>> {
        self.loaded_at
    }

    /// No-op until loaded
    pub fn set_status(&mut self, status: ServerStatus) {
        if let Some(data) = self.data.as_mut() {
            data.status = status;
        }
    }

    /// No-op until loaded
    pub fn set_transferring(&mut self, is_transferring: bool) {
        if let Some(data) = self.data.as_mut() {
            data.is_transferring = is_transferring;
        }
    }

    pub fn set_power_state(&mut self, state: PowerState) {
        self.power_state = Some(state);
    }

    pub fn in_conflict_state(&self) -> bool {
        self.data.as_ref().is_some_and(ServerData::in_conflict_state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::snapshot;

    #[test]
    fn test_new_store_is_empty() {
        let store = ServerStore::new();
        assert!(!store.is_loaded());
        assert!(store.permissions().is_empty());
        assert!(!store.in_conflict_state());
    }

    #[test]
    fn test_load_and_clear() {
        let mut store = ServerStore::new();
        store.load(snapshot("abc", ServerStatus::Normal, false, &["file.read"]));
        store.set_power_state(PowerState::Running);

        assert!(store.is_loaded());
        assert!(store.loaded_at().is_some());
        assert_eq!(store.server().unwrap().identity().id, "abc");

        store.clear();
        assert!(!store.is_loaded());
        assert!(store.permissions().is_empty());
        assert_eq!(store.power_state(), None);
    }

    #[test]
    fn test_status_mutations_require_data() {
        let mut store = ServerStore::new();
        store.set_status(ServerStatus::Installing);
        store.set_transferring(true);
        assert!(!store.in_conflict_state());

        store.load(snapshot("abc", ServerStatus::Normal, false, &[]));
        store.set_transferring(true);
        assert!(store.in_conflict_state());
        store.set_transferring(false);
        store.set_status(ServerStatus::Installing);
        assert!(store.in_conflict_state());
    }
}
