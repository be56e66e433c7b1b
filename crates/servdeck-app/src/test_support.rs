//! Fixtures shared by unit tests

use servdeck_core::{PermissionSet, ServerData, ServerSnapshot, ServerStatus};

pub(crate) fn snapshot(
    id: &str,
    status: ServerStatus,
    is_transferring: bool,
    grants: &[&str],
) -> ServerSnapshot {
    ServerSnapshot {
        server: ServerData {
            id: id.to_string(),
            uuid: format!("{}-0000-4000-8000-000000000000", id),
            internal_id: 42,
            name: format!("Server {}", id),
            node: "node-a".to_string(),
            description: String::new(),
            status,
            is_transferring,
            is_node_under_maintenance: false,
        },
        permissions: PermissionSet::new(grants.iter().copied()),
    }
}
