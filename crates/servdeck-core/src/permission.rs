//! Capability checks against a viewer's per-server permission grants
//!
//! Grants are plain strings such as `file.read` or `control.console`. A grant
//! list whose first entry is `*` allows everything. A requested pattern of the
//! form `namespace.*` is satisfied by any grant in that namespace.

use serde::{Deserialize, Serialize};

/// Grant that stands for every permission
pub const WILDCARD_GRANT: &str = "*";

/// `websocket.*` must be granted literally, never by namespace
const LITERAL_ONLY_PATTERN: &str = "websocket.*";

/// How a list of patterns is combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Every pattern must be satisfied
    #[default]
    All,
    /// At least one pattern must be satisfied
    Any,
}

/// A feature's permission requirement, declared once as data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirement {
    pub patterns: &'static [&'static str],
    pub mode: MatchMode,
}

impl Requirement {
    pub const fn all(patterns: &'static [&'static str]) -> Self {
        Self {
            patterns,
            mode: MatchMode::All,
        }
    }

    pub const fn any(patterns: &'static [&'static str]) -> Self {
        Self {
            patterns,
            mode: MatchMode::Any,
        }
    }
}

/// The permissions granted to the current viewer on one server
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet {
    granted: Vec<String>,
}

impl PermissionSet {
    pub fn new<I, S>(granted: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            granted: granted.into_iter().map(Into::into).collect(),
        }
    }

    /// Grants held by the server owner / an administrator
    pub fn everything() -> Self {
        Self::new([WILDCARD_GRANT])
    }

    pub fn is_empty(&self) -> bool {
        self.granted.is_empty()
    }

    pub fn granted(&self) -> &[String] {
        &self.granted
    }

    fn grants_everything(&self) -> bool {
        self.granted.first().map(String::as_str) == Some(WILDCARD_GRANT)
    }

    /// Check a single pattern
    pub fn allows(&self, pattern: &str) -> bool {
        if self.grants_everything() {
            return true;
        }

        match pattern.strip_suffix(".*") {
            Some(namespace) if pattern != LITERAL_ONLY_PATTERN => self
                .granted
                .iter()
                .any(|grant| grant.split('.').next() == Some(namespace)),
            _ => self.granted.iter().any(|grant| grant == pattern),
        }
    }

    /// Evaluate a list of patterns under a match mode
    pub fn allows_all_or_any(&self, patterns: &[&str], mode: MatchMode) -> bool {
        match mode {
            MatchMode::All => patterns.iter().all(|p| self.allows(p)),
            MatchMode::Any => patterns.iter().any(|p| self.allows(p)),
        }
    }

    /// Evaluate a declared requirement
    pub fn can(&self, requirement: &Requirement) -> bool {
        self.allows_all_or_any(requirement.patterns, requirement.mode)
    }
}
