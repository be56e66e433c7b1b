//! Per-mount server scope
//!
//! Every mount of the server view gets a fresh [`ServerScope`] from the
//! [`ScopeProvider`], tagged with a [`Generation`]. Background results carry
//! the generation they were started for and are dropped once it no longer
//! matches the live scope.

use crate::store::ServerStore;

/// Monotonic mount counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug)]
pub struct ServerScope {
    generation: Generation,
    param: String,
    pub store: ServerStore,
    /// Human-readable load failure; only shown while nothing is loaded
    pub error: Option<String>,
    pub listeners_mounted: bool,
}

impl ServerScope {
    fn new(generation: Generation, param: String) -> Self {
        Self {
            generation,
            param,
            store: ServerStore::new(),
            error: None,
            listeners_mounted: false,
        }
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Short identifier this scope was mounted for
    pub fn param(&self) -> &str {
        &self.param
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        self.generation == generation
    }

    /// Clear everything. Returns whether listeners were running.
    pub fn teardown(&mut self) -> bool {
        self.store.clear();
        self.error = None;
        std::mem::take(&mut self.listeners_mounted)
    }
}

/// Hands out fresh scopes
#[derive(Debug, Default)]
pub struct ScopeProvider {
    last: u64,
}

impl ScopeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn provide(&mut self, param: impl Into<String>) -> ServerScope {
        self.last += 1;
        ServerScope::new(Generation(self.last), param.into())
    }
}
