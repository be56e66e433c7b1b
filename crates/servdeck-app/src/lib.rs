//! # servdeck-app - Application State and Orchestration
//!
//! The TEA core of servdeck: state, messages, the update function, and the
//! background tasks that load servers and listen to realtime events.
//!
//! ## Public API
//!
//! ### TEA
//! - [`AppState`] - Complete application state (Model)
//! - [`Message`] - All application events
//! - [`handler::update`] - State transition function
//! - [`process_message`] - Runs messages and dispatches actions
//!
//! ### Server area
//! - [`resolve`] / [`ServerView`] / [`Body`] - What the server area shows
//! - [`ServerScope`] / [`ScopeProvider`] - Fresh per-mount state
//! - [`ConflictScreen`] - Blocking screens
//! - [`NavigationMenu`] - Tabs and the admin link
//! - [`FEATURES`] / [`SubView`] - Feature table and routed views
//!
//! ### Configuration
//! - [`config::Settings`] - `config.toml`

pub mod actions;
pub mod config;
pub mod conflict;
pub mod handler;
pub mod input_key;
pub mod location;
pub mod message;
pub mod navigation;
pub mod process;
pub mod router;
pub mod routes;
pub mod scope;
pub mod signals;
pub mod state;
pub mod store;

#[cfg(test)]
pub(crate) mod test_support;

pub use actions::{stop_all_listeners, ListenerTaskMap};
pub use conflict::{ConflictScreen, ScreenImage};
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use location::Location;
pub use message::Message;
pub use navigation::{AdminLink, NavTab, NavigationMenu};
pub use process::process_message;
pub use router::{resolve, Body, ServerSummary, ServerView};
pub use routes::{FeatureKey, FileAction, SubView, FEATURES};
pub use scope::{Generation, ScopeProvider, ServerScope};
pub use signals::spawn_signal_handler;
pub use state::{AppPhase, AppState, UiMode};
pub use store::ServerStore;
