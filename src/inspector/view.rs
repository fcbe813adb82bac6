//! Which view the dialog shows.

use serde_json::Value;

use super::props::InspectorProps;
use crate::tree::{TreeOptions, DEFAULT_COLLECTION_LIMIT};

/// Settings the raw tree view is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeViewSettings {
    pub options: TreeOptions,
    pub invert_theme: bool,
}

impl Default for TreeViewSettings {
    fn default() -> Self {
        Self {
            options: TreeOptions {
                hide_root: true,
                collection_limit: DEFAULT_COLLECTION_LIMIT,
            },
            invert_theme: true,
        }
    }
}

/// The single view shown inside the dialog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InspectorView<'a> {
    /// Payload is still being fetched.
    Loading,
    /// Payload carries its own renderable content.
    Content {
        content: &'a Value,
        content_type: Option<&'a Value>,
    },
    /// Raw payload tree.
    Tree {
        data: &'a Value,
        settings: TreeViewSettings,
    },
}

impl InspectorView<'_> {
    pub fn name(&self) -> &'static str {
        match self {
            InspectorView::Loading => "loading",
            InspectorView::Content { .. } => "content",
            InspectorView::Tree { .. } => "tree",
        }
    }
}

/// Pick the view with the default tree settings.
///
/// `None` means nothing is rendered at all.
pub fn select_view<'a, E>(props: &InspectorProps<'a, E>) -> Option<InspectorView<'a>> {
    select_view_with(props, TreeViewSettings::default())
}

/// Pick the view: loading, then content, then tree.
///
/// A falsy payload (`null`, `false`, `0`, `""`) is treated like no payload.
pub fn select_view_with<'a, E>(
    props: &InspectorProps<'a, E>,
    settings: TreeViewSettings,
) -> Option<InspectorView<'a>> {
    let debug = props.debug.filter(|d| d.is_present())?;

    let view = if props.is_loading() {
        InspectorView::Loading
    } else if let Some(content) = debug.content() {
        InspectorView::Content {
            content,
            content_type: debug.content_type(),
        }
    } else {
        InspectorView::Tree {
            data: debug.as_value(),
            settings,
        }
    };

    tracing::trace!(view = view.name(), "selected inspector view");
    Some(view)
}
