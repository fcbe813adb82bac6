//! Interactive expand/collapse and selection state for the tree viewer.

use std::collections::HashMap;

use serde_json::Value;

use super::flatten::{flatten, TreeOptions, TreeRow};
use super::path::KeyPath;

/// User-driven state layered over the initial expansion predicate.
///
/// Nodes the user never toggled keep whatever the predicate decides.
#[derive(Debug, Clone, Default)]
pub struct TreeState {
    overrides: HashMap<KeyPath, bool>,
    /// Index of the selected row.
    pub selected: usize,
    /// First visible row.
    pub offset: usize,
}

impl TreeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visible rows, honoring user toggles before the predicate.
    pub fn rows(
        &self,
        data: &Value,
        options: &TreeOptions,
        predicate: &dyn Fn(&KeyPath, &Value, usize) -> bool,
    ) -> Vec<TreeRow> {
        flatten(data, options, &|path, node, level| {
            self.overrides
                .get(path)
                .copied()
                .unwrap_or_else(|| predicate(path, node, level))
        })
    }

    /// Force a node open or closed.
    pub fn set_expanded(&mut self, path: KeyPath, expanded: bool) {
        self.overrides.insert(path, expanded);
    }

    /// Flip the selected row if it is a collection.
    pub fn toggle_selected(&mut self, rows: &[TreeRow]) {
        if let Some(row) = rows.get(self.selected).filter(|r| r.kind.is_collection()) {
            self.set_expanded(row.key_path.clone(), !row.expanded);
        }
    }

    /// Expand the selected row.
    pub fn expand_selected(&mut self, rows: &[TreeRow]) {
        if let Some(row) = rows.get(self.selected).filter(|r| r.kind.is_collection()) {
            self.set_expanded(row.key_path.clone(), true);
        }
    }

    /// Collapse the selected row, or move to its parent if it is not open.
    pub fn collapse_selected(&mut self, rows: &[TreeRow]) {
        let Some(row) = rows.get(self.selected) else {
            return;
        };

        if row.kind.is_collection() && row.expanded {
            self.set_expanded(row.key_path.clone(), false);
            return;
        }

        if let Some(parent) = rows[..self.selected]
            .iter()
            .rposition(|r| r.level < row.level && r.kind.is_collection())
        {
            self.selected = parent;
        }
    }

    pub fn select_next(&mut self, row_count: usize) {
        if self.selected + 1 < row_count {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move the selection by a page.
    pub fn page(&mut self, down: bool, page: usize, row_count: usize) {
        let page = page.max(1);
        self.selected = if down {
            (self.selected + page).min(row_count.saturating_sub(1))
        } else {
            self.selected.saturating_sub(page)
        };
    }

    /// Keep the selection inside `row_count` rows and visible in a `height`-row viewport.
    pub fn clamp(&mut self, row_count: usize, height: usize) {
        self.selected = self.selected.min(row_count.saturating_sub(1));
        if height == 0 {
            return;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + height {
            self.offset = self.selected + 1 - height;
        }
        self.offset = self.offset.min(row_count.saturating_sub(height));
    }
}
