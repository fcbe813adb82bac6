//! The debug inspector component, independent of any terminal backend.
//!
//! This module provides:
//! - `InspectorProps`, the caller-supplied configuration
//! - The rendering decision table (`select_view`)
//! - Trigger resolution with the default tooltip button
//! - Open/close callback bridging with a memoized handler

pub mod props;
pub mod view;
pub mod trigger;
pub mod bridge;

pub use props::{Callback, InspectorProps};
pub use view::{select_view, select_view_with, InspectorView, TreeViewSettings};
pub use trigger::{resolve_trigger, DefaultTrigger, ResolvedTrigger, TooltipRelationship, DEFAULT_TOOLTIP};
pub use bridge::{open_change_handler, OpenChangeHandler, OpenChangeMemo};

/// Title shown on the dialog surface.
pub const DIALOG_TITLE: &str = "Debug Inspection";
