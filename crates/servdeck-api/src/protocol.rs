//! Panel client API wire format
//!
//! Responses are wrapped in an `{ "object": ..., "attributes": {...} }`
//! envelope; server responses carry the viewer's grants in `meta`.

use serde::Deserialize;

use servdeck_core::{PermissionSet, ServerData, ServerSnapshot, ServerStatus, ViewerIdentity};

/// `{ "object": "...", "attributes": T }`
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub object: String,
    pub attributes: T,
}

/// Attributes of `GET /api/client/servers/{identifier}`
#[derive(Debug, Clone, Deserialize)]
pub struct ServerAttributes {
    pub identifier: String,
    pub uuid: String,
    pub internal_id: u64,
    pub name: String,
    #[serde(default)]
    pub node: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub is_transferring: bool,
    #[serde(default)]
    pub is_node_under_maintenance: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerMeta {
    #[serde(default)]
    pub is_server_owner: bool,
    #[serde(default)]
    pub user_permissions: Vec<String>,
}

/// Full server response
#[derive(Debug, Clone, Deserialize)]
pub struct ServerResponse {
    pub attributes: ServerAttributes,
    #[serde(default)]
    pub meta: ServerMeta,
}

impl ServerResponse {
    pub fn into_snapshot(self) -> ServerSnapshot {
        let attrs = self.attributes;
        ServerSnapshot {
            server: ServerData {
                id: attrs.identifier,
                uuid: attrs.uuid,
                internal_id: attrs.internal_id,
                name: attrs.name,
                node: attrs.node,
                description: attrs.description.unwrap_or_default(),
                status: ServerStatus::from_wire(attrs.status.as_deref()),
                is_transferring: attrs.is_transferring,
                is_node_under_maintenance: attrs.is_node_under_maintenance,
            },
            permissions: PermissionSet::new(self.meta.user_permissions),
        }
    }
}

/// Attributes of `GET /api/client/account`
#[derive(Debug, Clone, Deserialize)]
pub struct AccountAttributes {
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub admin: bool,
}

impl From<AccountAttributes> for ViewerIdentity {
    fn from(attrs: AccountAttributes) -> Self {
        ViewerIdentity {
            username: attrs.username,
            email: attrs.email,
            root_admin: attrs.admin,
        }
    }
}

/// Credentials for the realtime socket of one server
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SocketCredentials {
    pub token: String,
    pub socket: String,
}

/// `GET /api/client/servers/{identifier}/websocket`
#[derive(Debug, Clone, Deserialize)]
pub struct SocketCredentialsResponse {
    pub data: SocketCredentials,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    errors: Vec<ErrorDetail>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    detail: Option<String>,
}

/// Turn a failed response into a message fit for the error screen.
///
/// Prefers the first `errors[].detail`, then a plain `error` string (node
/// daemon style), then a generic status line.
pub fn http_error_to_human(status: u16, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        let detail = parsed
            .errors
            .into_iter()
            .next()
            .and_then(|e| e.detail)
            .filter(|d| !d.is_empty());
        if let Some(detail) = detail {
            return detail;
        }
        if let Some(serde_json::Value::String(error)) = parsed.error {
            return error;
        }
    }

    format!("Request failed with status code {}", status)
}
