//! # Debug Inspector
//!
//! A collapsible dialog that shows the debug metadata attached to a piece of
//! generated content.
//!
//! The payload is shown either through a content renderer, when it carries
//! its own `content`, or as a syntax-highlighted JSON tree whose nodes start
//! expanded or collapsed according to a small fixed policy.

pub mod payload;
pub mod tree;
pub mod inspector;
pub mod config;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use payload::{DebugPayload, LoadError, load_payload};
pub use tree::{KeyPath, KeySegment, Base16Theme, should_expand_node_initially};
pub use inspector::{InspectorProps, InspectorView, select_view, OpenChangeMemo};
pub use config::{InspectorConfig, ConfigError};

#[cfg(feature = "tui")]
pub use tui::{DebugInspector, run_inspector};
