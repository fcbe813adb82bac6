//! The `DebugInspector` widget.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{StatefulWidget, Widget},
};
use serde_json::Value;

use super::content::{ContentRenderer, PlainContentRenderer};
use super::dialog::DialogShell;
use super::loading::LoadingView;
use super::tree_view::JsonTree;
use crate::config::InspectorConfig;
use crate::inspector::{
    resolve_trigger, select_view_with, InspectorProps, InspectorView, OpenChangeMemo,
    TreeViewSettings, DIALOG_TITLE,
};
use crate::tree::{initial_expansion, Base16Theme, TreeState};

/// Props as used by the terminal widget: custom triggers are styled lines.
pub type TerminalProps<'a> = InspectorProps<'a, Line<'static>>;

/// Collapsible dialog showing a debug payload.
///
/// Each call to [`render`](Self::render) takes fresh props. The widget only
/// keeps what the collaborators own: the dialog's open state, the tree's
/// selection and the memoized open-change handler.
pub struct DebugInspector {
    dialog: DialogShell,
    memo: OpenChangeMemo,
    tree_state: TreeState,
    config: InspectorConfig,
    renderer: Box<dyn ContentRenderer>,
    tick: usize,
    page_height: usize,
}

impl DebugInspector {
    pub fn new(config: InspectorConfig) -> Self {
        Self {
            dialog: DialogShell::new(DIALOG_TITLE),
            memo: OpenChangeMemo::new(),
            tree_state: TreeState::new(),
            config,
            renderer: Box::new(PlainContentRenderer),
            tick: 0,
            page_height: 1,
        }
    }

    /// Replace the renderer used for payloads with `content`.
    pub fn with_renderer(mut self, renderer: impl ContentRenderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    pub fn dialog(&self) -> &DialogShell {
        &self.dialog
    }

    pub fn dialog_mut(&mut self) -> &mut DialogShell {
        &mut self.dialog
    }

    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }

    /// Advance the loading spinner.
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    fn view<'a>(&mut self, props: &TerminalProps<'a>) -> Option<InspectorView<'a>> {
        let Some(view) = select_view_with(props, self.config.tree_settings()) else {
            // Nothing rendered: the dialog and tree go away with it.
            self.dialog.reset();
            self.tree_state = TreeState::new();
            return None;
        };

        let handler = self.memo.handler(props.on_open.as_ref(), props.on_close.as_ref());
        self.dialog.on_open_change(handler);
        Some(view)
    }

    /// Draw the trigger on the first row of `area` and, while open, the
    /// dialog over `area`.
    ///
    /// Returns `false` when there is nothing to show.
    pub fn render(&mut self, props: &TerminalProps<'_>, area: Rect, buf: &mut Buffer) -> bool {
        let Some(view) = self.view(props) else {
            return false;
        };

        let trigger = resolve_trigger(props.trigger.clone());
        self.dialog.render_trigger(&trigger, Rect { height: area.height.min(1), ..area }, buf);

        if !self.dialog.is_open() {
            return true;
        }

        self.dialog.render_surface(area, buf);
        let content = self.dialog.content_rect(area);

        match view {
            InspectorView::Loading => LoadingView::new(self.tick).render(content, buf),
            InspectorView::Content { content: value, content_type } => {
                self.renderer.render(value, content_type, self.dialog.text_rect(area), buf);
            }
            InspectorView::Tree { data, settings } => {
                self.page_height = content.height as usize;
                let tree = build_tree(data, settings, self.config.theme);
                (&tree).render(content, buf, &mut self.tree_state);
            }
        }
        true
    }

    /// Route a key to the dialog, then to the tree while open.
    ///
    /// Returns whether the key was consumed.
    pub fn handle_key(&mut self, props: &TerminalProps<'_>, key: KeyEvent) -> bool {
        let Some(view) = self.view(props) else {
            return false;
        };

        if self.dialog.handle_key(key) {
            return true;
        }
        if !self.dialog.is_open() || key.kind != KeyEventKind::Press {
            return false;
        }

        let InspectorView::Tree { data, settings } = view else {
            return false;
        };
        let tree = build_tree(data, settings, self.config.theme);
        let rows = tree.rows(&self.tree_state);
        let state = &mut self.tree_state;

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => state.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => state.select_next(rows.len()),
            KeyCode::Left | KeyCode::Char('h') => state.collapse_selected(&rows),
            KeyCode::Right | KeyCode::Char('l') => state.expand_selected(&rows),
            KeyCode::Enter | KeyCode::Char(' ') => state.toggle_selected(&rows),
            KeyCode::PageUp => state.page(false, self.page_height, rows.len()),
            KeyCode::PageDown => state.page(true, self.page_height, rows.len()),
            KeyCode::Home => state.selected = 0,
            KeyCode::End => state.selected = rows.len().saturating_sub(1),
            _ => return false,
        }
        true
    }
}

impl Default for DebugInspector {
    fn default() -> Self {
        Self::new(InspectorConfig::default())
    }
}

fn build_tree(data: &Value, settings: TreeViewSettings, theme: Base16Theme) -> JsonTree<'_> {
    JsonTree::new(data, &initial_expansion)
        .hide_root(settings.options.hide_root)
        .collection_limit(settings.options.collection_limit)
        .invert_theme(settings.invert_theme)
        .theme(theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::DebugPayload;
    use crossterm::event::KeyModifiers;
    use serde_json::json;
    use std::cell::Cell;
    use std::rc::Rc;

    const AREA: Rect = Rect { x: 0, y: 0, width: 100, height: 30 };

    fn payload(value: Value) -> DebugPayload {
        DebugPayload::from_value(value)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn text(buf: &Buffer) -> String {
        let mut full = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                if let Some(c) = buf.cell((x, y)) {
                    full.push_str(c.symbol());
                }
            }
            full.push('\n');
        }
        full
    }

    fn render(inspector: &mut DebugInspector, props: &TerminalProps<'_>) -> (bool, Buffer) {
        let mut buf = Buffer::empty(AREA);
        let drawn = inspector.render(props, AREA, &mut buf);
        (drawn, buf)
    }

    #[test]
    fn test_nothing_without_debug() {
        let mut inspector = DebugInspector::default();
        let props = TerminalProps::new(None).loading(true).trigger(Line::from("[dbg]"));
        let (drawn, buf) = render(&mut inspector, &props);
        assert!(!drawn);
        assert_eq!(buf, Buffer::empty(AREA));
        assert!(!inspector.handle_key(&props, press(KeyCode::Enter)));
    }

    #[test]
    fn test_custom_trigger_verbatim() {
        let p = payload(json!({"a": 1}));
        let mut inspector = DebugInspector::default();
        let props = TerminalProps::new(Some(&p)).trigger(Line::from("[debug]"));
        let (drawn, buf) = render(&mut inspector, &props);
        assert!(drawn);
        assert!(text(&buf).starts_with("[debug] "));
        assert!(!text(&buf).contains("Display debug information"));
    }

    #[test]
    fn test_closed_dialog_shows_only_trigger() {
        let p = payload(json!({"model": "gpt"}));
        let mut inspector = DebugInspector::default();
        let (_, buf) = render(&mut inspector, &TerminalProps::new(Some(&p)));
        let screen = text(&buf);
        assert!(screen.contains("Display debug information"));
        assert!(!screen.contains("Debug Inspection"));
    }

    #[test]
    fn test_loading_view_overrides_content() {
        let p = payload(json!({"content": "hello"}));
        let mut inspector = DebugInspector::default();
        inspector.dialog_mut().open();
        let (_, buf) = render(&mut inspector, &TerminalProps::new(Some(&p)).loading(true));
        let screen = text(&buf);
        assert!(screen.contains("Debug Inspection"));
        assert!(screen.contains("Loading"));
        assert!(!screen.contains("hello"));
    }

    #[test]
    fn test_content_view_passes_content_and_type() {
        struct Recorder(Rc<std::cell::RefCell<Vec<(Value, Option<Value>)>>>);
        impl ContentRenderer for Recorder {
            fn render(&self, content: &Value, content_type: Option<&Value>, _: Rect, _: &mut Buffer) {
                self.0.borrow_mut().push((content.clone(), content_type.cloned()));
            }
        }

        let calls = Rc::new(std::cell::RefCell::new(Vec::new()));
        let p = payload(json!({"content": "# hi", "contentType": "text/markdown", "model": "m"}));
        let mut inspector = DebugInspector::default().with_renderer(Recorder(Rc::clone(&calls)));
        inspector.dialog_mut().open();
        let (_, buf) = render(&mut inspector, &TerminalProps::new(Some(&p)));

        assert_eq!(*calls.borrow(), vec![(json!("# hi"), Some(json!("text/markdown")))]);
        assert!(!text(&buf).contains("model"));
    }

    #[test]
    fn test_tree_view_for_plain_payload() {
        let p = payload(json!({"content": "", "model": "gpt", "image_url": {"url": "data:"}}));
        let mut inspector = DebugInspector::default();
        inspector.dialog_mut().open();
        let (_, buf) = render(&mut inspector, &TerminalProps::new(Some(&p)));
        let screen = text(&buf);
        assert!(screen.contains("model: \"gpt\""));
        assert!(screen.contains("▶ image_url: {} 1 key"));
        assert!(!screen.contains("data:"));
        assert!(!screen.contains("root"));
    }

    #[test]
    fn test_keys_open_navigate_and_close() {
        let opened = Rc::new(Cell::new(0));
        let closed = Rc::new(Cell::new(0));
        let (o, c) = (Rc::clone(&opened), Rc::clone(&closed));
        let p = payload(json!({"image_url": {"url": "data:"}}));
        let props = TerminalProps::new(Some(&p))
            .on_open(move || o.set(o.get() + 1))
            .on_close(move || c.set(c.get() + 1));

        let mut inspector = DebugInspector::default();
        assert!(inspector.handle_key(&props, press(KeyCode::Enter)));
        assert_eq!((opened.get(), closed.get()), (1, 0));

        assert!(inspector.handle_key(&props, press(KeyCode::Right)));
        let (_, buf) = render(&mut inspector, &props);
        assert!(text(&buf).contains("url: \"data:\""));

        assert!(inspector.handle_key(&props, press(KeyCode::Esc)));
        assert_eq!((opened.get(), closed.get()), (1, 1));
        assert!(!inspector.handle_key(&props, press(KeyCode::Char('x'))));
    }

    #[test]
    fn test_handler_stable_across_renders() {
        let p = payload(json!({"a": 1}));
        let props = TerminalProps::new(Some(&p)).on_open(|| {});
        let mut inspector = DebugInspector::default();
        render(&mut inspector, &props);
        render(&mut inspector, &props);
        render(&mut inspector, &props.clone());
        assert_eq!(inspector.dialog().subscription_count(), 1);

        let changed = TerminalProps::new(Some(&p)).on_open(|| {});
        render(&mut inspector, &changed);
        assert_eq!(inspector.dialog().subscription_count(), 2);
    }

    #[test]
    fn test_rerender_is_idempotent() {
        let p = payload(json!({"choices": [{"message": {"role": "assistant", "content": "x"}}]}));
        let props = TerminalProps::new(Some(&p));
        let mut inspector = DebugInspector::default();
        inspector.dialog_mut().open();
        let (_, first) = render(&mut inspector, &props);
        let (_, second) = render(&mut inspector, &props);
        assert_eq!(first, second);
    }

    #[test]
    fn test_dropping_debug_closes_dialog_silently() {
        let closed = Rc::new(Cell::new(0));
        let c = Rc::clone(&closed);
        let p = payload(json!({"a": 1}));
        let mut inspector = DebugInspector::default();

        let props = TerminalProps::new(Some(&p)).on_close(move || c.set(c.get() + 1));
        render(&mut inspector, &props);
        inspector.dialog_mut().open();

        render(&mut inspector, &TerminalProps::new(None));
        assert!(!inspector.dialog().is_open());
        assert_eq!(closed.get(), 0);
    }
}
