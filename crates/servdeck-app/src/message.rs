//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use crate::location::Location;
use crate::scope::Generation;
use servdeck_core::{ServerEvent, ServerSnapshot};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Animation tick from the event poller
    Tick,

    // ─────────────────────────────────────────────────────────
    // Quit
    // ─────────────────────────────────────────────────────────
    /// Quit, asking first when `behavior.confirm_quit` is set
    RequestQuit,
    /// Quit immediately (Ctrl+C, signals)
    Quit,
    ConfirmQuit,
    CancelQuit,

    // ─────────────────────────────────────────────────────────
    // Server lifecycle
    // ─────────────────────────────────────────────────────────
    /// Go to a location. Changing servers unmounts the current scope first.
    Navigate { location: Location },

    /// Create a fresh scope for `param` and start loading it
    MountServer { param: String },

    /// Unmount and mount the current server again (manual retry)
    Remount,

    /// Tear down the current scope; a no-op when nothing is mounted
    Unmount,

    ServerLoaded {
        generation: Generation,
        snapshot: Box<ServerSnapshot>,
    },

    ServerLoadFailed {
        generation: Generation,
        error: String,
    },

    /// Realtime event forwarded by the listener task
    ServerEvent {
        generation: Generation,
        event: ServerEvent,
    },

    /// The listener task gave up reconnecting
    ListenerStopped {
        generation: Generation,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    SelectTab(usize),
    NextTab,
    PreviousTab,

    // ─────────────────────────────────────────────────────────
    // Address bar
    // ─────────────────────────────────────────────────────────
    OpenAddressBar,
    AddressInput(char),
    AddressBackspace,
    AddressSubmit,
    AddressCancel,
}
