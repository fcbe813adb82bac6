//! Syntax-highlighted JSON tree viewer.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget},
};
use serde_json::Value;

use crate::tree::{Base16Theme, KeyPath, RowKind, TreeOptions, TreeRow, TreeState};

/// Expansion predicate: `(key_path, node, level) -> expanded`.
pub type ExpandPredicate<'a> = &'a dyn Fn(&KeyPath, &Value, usize) -> bool;

/// Tree view over a JSON value with per-node expand/collapse.
pub struct JsonTree<'a> {
    data: &'a Value,
    options: TreeOptions,
    invert_theme: bool,
    theme: Base16Theme,
    should_expand: ExpandPredicate<'a>,
}

impl<'a> JsonTree<'a> {
    pub fn new(data: &'a Value, should_expand: ExpandPredicate<'a>) -> Self {
        Self {
            data,
            options: TreeOptions::default(),
            invert_theme: false,
            theme: Base16Theme::default(),
            should_expand,
        }
    }

    pub fn hide_root(mut self, hide: bool) -> Self {
        self.options.hide_root = hide;
        self
    }

    pub fn collection_limit(mut self, limit: usize) -> Self {
        self.options.collection_limit = limit;
        self
    }

    pub fn invert_theme(mut self, invert: bool) -> Self {
        self.invert_theme = invert;
        self
    }

    pub fn theme(mut self, theme: Base16Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Rows currently visible for `state`.
    pub fn rows(&self, state: &TreeState) -> Vec<TreeRow> {
        state.rows(self.data, &self.options, self.should_expand)
    }

    fn row_line(&self, row: &TreeRow, theme: &Base16Theme) -> Line<'static> {
        let depth = if self.options.hide_root { row.level.saturating_sub(1) } else { row.level };
        let mut spans = vec![Span::raw("  ".repeat(depth))];

        let arrow = match row.kind {
            k if k.is_collection() && row.expanded => "▼ ",
            k if k.is_collection() => "▶ ",
            _ => "  ",
        };
        spans.push(Span::styled(arrow, Style::default().fg(theme.base0d.into())));

        if !row.label.is_empty() {
            spans.push(Span::styled(
                format!("{}:", row.label),
                Style::default().fg(theme.base0d.into()).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
        }

        let value_color = match row.kind {
            RowKind::String => theme.base0b,
            RowKind::Number | RowKind::Bool => theme.base09,
            RowKind::Null => theme.base08,
            RowKind::Object { .. } | RowKind::Array { .. } | RowKind::More { .. } => theme.base03,
        };
        let value_style = match row.kind {
            RowKind::More { .. } => Style::default().fg(value_color.into()).add_modifier(Modifier::ITALIC),
            _ => Style::default().fg(value_color.into()),
        };
        spans.push(Span::styled(row.value.clone(), value_style));

        Line::from(spans)
    }
}

impl StatefulWidget for &JsonTree<'_> {
    type State = TreeState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut TreeState) {
        if area.is_empty() {
            tracing::debug!(?area, "tree view has no room to render");
            return;
        }

        let theme = self.theme.effective(self.invert_theme);
        buf.set_style(area, Style::default().bg(theme.base00.into()).fg(theme.base05.into()));

        let rows = self.rows(state);
        let height = area.height as usize;
        state.clamp(rows.len(), height);

        // Last column stays free for the scrollbar.
        let text_width = area.width.saturating_sub(1);

        for (i, row) in rows.iter().enumerate().skip(state.offset).take(height) {
            let y = area.y + (i - state.offset) as u16;
            buf.set_line(area.x, y, &self.row_line(row, &theme), text_width);
            if i == state.selected {
                buf.set_style(
                    Rect::new(area.x, y, text_width, 1),
                    Style::default().bg(theme.base02.into()),
                );
            }
        }

        if rows.len() > height {
            let mut scroll = ScrollbarState::new(rows.len().saturating_sub(height)).position(state.offset);
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .style(Style::default().fg(theme.base03.into()))
                .render(area, buf, &mut scroll);
        }
    }
}
