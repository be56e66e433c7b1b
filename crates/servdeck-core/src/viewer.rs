//! The authenticated viewer, shared read-only across the whole process

use serde::{Deserialize, Serialize};

/// Identity of the account using the client.
///
/// Loaded once at session start and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerIdentity {
    pub username: String,
    #[serde(default)]
    pub email: String,
    /// Panel-wide administrator, independent of per-server permissions
    #[serde(default)]
    pub root_admin: bool,
}

impl ViewerIdentity {
    pub fn new(username: impl Into<String>, root_admin: bool) -> Self {
        Self {
            username: username.into(),
            email: String::new(),
            root_admin,
        }
    }
}
