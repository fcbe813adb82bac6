//! Terminal rendering of the debug inspector.
//!
//! Provides:
//! - A modal dialog shell owning the open/closed state
//! - Loading, content and JSON tree views
//! - The `DebugInspector` widget composing them
//! - An interactive viewer for payload files

mod dialog;
mod loading;
mod content;
mod tree_view;
mod widget;
mod app;
mod ui;

pub use dialog::{DialogShell, SurfaceStyle};
pub use loading::LoadingView;
pub use content::{ContentRenderer, PlainContentRenderer};
pub use tree_view::JsonTree;
pub use widget::{DebugInspector, TerminalProps};
pub use app::{InspectorApp, RunOptions, run_inspector};
