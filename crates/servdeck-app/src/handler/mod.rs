//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `lifecycle`: Mount, unmount and load results
//! - `listeners`: Realtime events applied to the store
//! - `navigation`: Tabs and the address bar
//! - `keys`: Key event handlers for UI modes

pub(crate) mod keys;
pub(crate) mod lifecycle;
pub(crate) mod listeners;
pub(crate) mod navigation;
pub(crate) mod update;


use crate::message::Message;
use crate::scope::Generation;

// Re-export main entry point
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Fetch the server for the scope of `generation`
    LoadServer {
        generation: Generation,
        identifier: String,
    },

    /// Start the install, transfer and realtime listeners
    StartListeners {
        generation: Generation,
        identifier: String,
        uuid: String,
    },

    /// Abort the listeners of an unmounted scope
    StopListeners { generation: Generation },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
