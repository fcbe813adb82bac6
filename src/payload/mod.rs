//! Debug payloads: the caller-supplied metadata shown by the inspector.
//!
//! This module provides:
//! - JSON truthiness checks for reserved payload fields
//! - The `DebugPayload` mapping with its `content`/`contentType` accessors
//! - Loading payloads from JSON files

pub mod truthy;
pub mod debug;
pub mod load;

pub use truthy::is_truthy;
pub use debug::{DebugPayload, CONTENT_KEY, CONTENT_TYPE_KEY};
pub use load::{load_payload, parse_payload, LoadError};
