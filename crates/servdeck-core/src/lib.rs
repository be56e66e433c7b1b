//! # servdeck-core - Core Domain Types
//!
//! Foundation crate for servdeck. Provides server domain types, the
//! permission gate, realtime event definitions, error handling and logging.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Server (`server`)
//! - [`ServerData`] - Metadata of one server (identity, status, transfer flag)
//! - [`ServerStatus`] - Lifecycle status decoded from the nullable wire value
//! - [`ServerSnapshot`] - A loaded server plus the viewer's grants on it
//! - [`PowerState`] - Realtime power state
//!
//! ### Permissions (`permission`)
//! - [`PermissionSet`] - The viewer's grants on the current server
//! - [`Requirement`], [`MatchMode`] - Declarative feature requirements
//!
//! ### Viewer (`viewer`)
//! - [`ViewerIdentity`] - Process-wide, read-only account identity
//!
//! ### Events (`events`)
//! - [`ServerEvent`] - Typed realtime events
//! - [`EventFrame`] - Raw `{event, args}` envelope
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use servdeck_core::prelude::*;
//! ```

pub mod error;
pub mod events;
pub mod logging;
pub mod permission;
pub mod prelude;
pub mod server;
pub mod viewer;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use events::{EventFrame, ServerEvent, TransferStatus};
pub use permission::{MatchMode, PermissionSet, Requirement};
pub use server::{PowerState, ServerData, ServerIdentity, ServerSnapshot, ServerStatus};
pub use viewer::ViewerIdentity;
