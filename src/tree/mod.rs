//! JSON tree model used by the raw payload view.
//!
//! This module provides:
//! - Key paths locating nodes below the (hidden) root
//! - The default expand/collapse policy
//! - A 16-slot Base16 color theme
//! - Flattening a JSON value into displayable rows
//! - Interactive expand/collapse state

pub mod path;
pub mod expand;
pub mod theme;
pub mod flatten;
pub mod state;

pub use path::{KeyPath, KeySegment};
pub use expand::{should_expand_node_initially, initial_expansion, matching_rule, ExpansionRule, COLLAPSED_LEVEL};
pub use theme::{Base16Theme, Rgb, ThemeError};
pub use flatten::{flatten, RowKind, TreeOptions, TreeRow, DEFAULT_COLLECTION_LIMIT};
pub use state::TreeState;
