//! # servdeck-api - Panel Access
//!
//! HTTP client for the panel's client API and the per-server realtime
//! socket.
//!
//! ## Public API
//!
//! - [`ServerApi`] - The calls the server view makes, implemented by [`PanelClient`]
//! - [`ServerSocket`] - Authenticated realtime stream for one server
//! - [`SocketFrame`] - Decoded realtime frame
//! - [`http_error_to_human`] - Error body to display message

pub mod client;
pub mod protocol;
pub mod websocket;

pub use client::{LocalServerApi, PanelClient, ServerApi};
pub use protocol::{http_error_to_human, SocketCredentials};
pub use websocket::{parse_frame, ServerSocket, SocketFrame};
