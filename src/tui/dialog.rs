//! Modal dialog shell.
//!
//! The shell is the only owner of the open/closed state. Transitions are
//! reported to a single subscribed handler.

use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Widget},
};

use crate::inspector::{OpenChangeHandler, ResolvedTrigger};

/// Surface and content sizing, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceStyle {
    /// Surface is at most viewport width minus this.
    pub margin: u16,
    /// Surface is at least this wide (or the full viewport if narrower).
    pub min_width: u16,
    /// Rows of viewport height reserved for dialog chrome.
    pub chrome_height: u16,
    /// Columns of viewport width reserved around the content.
    pub chrome_width: u16,
    /// Right padding for scrollbar clearance, inside the content width.
    pub padding_right: u16,
}

impl Default for SurfaceStyle {
    fn default() -> Self {
        Self {
            margin: 4,
            min_width: 75,
            chrome_height: 9,
            chrome_width: 12,
            padding_right: 1,
        }
    }
}

impl SurfaceStyle {
    /// Content box size (border-box: includes `padding_right`).
    pub fn content_size(&self, viewport: Rect) -> (u16, u16) {
        (
            viewport.width.saturating_sub(self.chrome_width),
            viewport.height.saturating_sub(self.chrome_height),
        )
    }

    /// Surface width for content of `fit` columns.
    pub fn surface_width(&self, viewport: Rect, fit: u16) -> u16 {
        let max = viewport.width.saturating_sub(self.margin);
        let min = self.min_width.min(viewport.width);
        fit.min(max).max(min)
    }
}

/// A dialog with a trigger, a title and a modal surface.
pub struct DialogShell {
    title: String,
    surface: SurfaceStyle,
    open: bool,
    on_open_change: Option<OpenChangeHandler>,
    subscriptions: usize,
}

impl DialogShell {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            surface: SurfaceStyle::default(),
            open: false,
            on_open_change: None,
            subscriptions: 0,
        }
    }

    pub fn surface(mut self, style: SurfaceStyle) -> Self {
        self.surface = style;
        self
    }

    pub fn surface_style(&self) -> &SurfaceStyle {
        &self.surface
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Subscribe to open changes. Re-subscribing the same handler is ignored.
    pub fn on_open_change(&mut self, handler: OpenChangeHandler) {
        if let Some(current) = &self.on_open_change {
            if Rc::ptr_eq(current, &handler) {
                return;
            }
        }
        self.subscriptions += 1;
        self.on_open_change = Some(handler);
    }

    /// How many distinct handlers have been subscribed.
    pub fn subscription_count(&self) -> usize {
        self.subscriptions
    }

    /// Change state. Returns whether a transition happened.
    pub fn set_open(&mut self, open: bool) -> bool {
        if self.open == open {
            return false;
        }
        self.open = open;
        if let Some(handler) = &self.on_open_change {
            handler(open);
        }
        true
    }

    /// Close without notifying, as when the dialog is torn down.
    pub fn reset(&mut self) {
        self.open = false;
    }

    pub fn open(&mut self) -> bool {
        self.set_open(true)
    }

    pub fn close(&mut self) -> bool {
        self.set_open(false)
    }

    pub fn toggle(&mut self) -> bool {
        self.set_open(!self.open)
    }

    /// Enter/Space on the trigger opens, Esc/q closes.
    ///
    /// Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        match (self.open, key.code) {
            (false, KeyCode::Enter | KeyCode::Char(' ')) => self.open(),
            (true, KeyCode::Esc | KeyCode::Char('q')) => self.close(),
            _ => false,
        }
    }

    /// Centered surface rectangle for `viewport`.
    pub fn surface_rect(&self, viewport: Rect) -> Rect {
        let (content_w, content_h) = self.surface.content_size(viewport);
        // Borders on both sides plus one title/spacing row.
        let width = self.surface.surface_width(viewport, content_w.saturating_add(2)).min(viewport.width);
        let height = content_h.saturating_add(3).min(viewport.height);
        Rect::new(
            viewport.x + (viewport.width - width) / 2,
            viewport.y + (viewport.height - height) / 2,
            width,
            height,
        )
    }

    /// Content box inside the surface, including the right padding.
    pub fn content_rect(&self, viewport: Rect) -> Rect {
        let surface = self.surface_rect(viewport);
        let (content_w, content_h) = self.surface.content_size(viewport);
        let inner = Rect::new(
            surface.x + 1,
            surface.y + 2,
            surface.width.saturating_sub(2),
            surface.height.saturating_sub(3),
        );
        Rect::new(inner.x, inner.y, content_w.min(inner.width), content_h.min(inner.height))
    }

    /// Content box minus the right padding.
    pub fn text_rect(&self, viewport: Rect) -> Rect {
        let content = self.content_rect(viewport);
        Rect {
            width: content.width.saturating_sub(self.surface.padding_right),
            ..content
        }
    }

    /// Paint the trigger on one line.
    pub fn render_trigger(&self, trigger: &ResolvedTrigger<Line<'static>>, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let line = match trigger {
            ResolvedTrigger::Custom(line) => line.clone(),
            ResolvedTrigger::Default(default) => {
                let button = Style::default().fg(Color::Gray);
                let button = if self.open { button.add_modifier(Modifier::REVERSED) } else { button };
                Line::from(vec![
                    Span::styled(format!("[{}]", default.icon), button),
                    Span::raw(" "),
                    Span::styled(
                        default.tooltip,
                        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
                    ),
                ])
            }
        };
        buf.set_line(area.x, area.y, &line, area.width);
    }

    /// Clear and frame the surface. Does nothing while closed.
    pub fn render_surface(&self, viewport: Rect, buf: &mut Buffer) {
        if !self.open {
            return;
        }
        let surface = self.surface_rect(viewport);
        Clear.render(surface, buf);
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .title_bottom(Line::from(" Esc: close ").right_aligned())
            .render(surface, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspector::open_change_handler;
    use crossterm::event::KeyModifiers;
    use std::cell::RefCell;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_transitions_notify_once() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let l = Rc::clone(&log);
        let mut dialog = DialogShell::new("Debug Inspection");
        dialog.on_open_change(Rc::new(move |open| l.borrow_mut().push(open)));

        assert!(dialog.open());
        assert!(!dialog.open());
        assert!(dialog.toggle());
        assert!(!dialog.close());
        assert_eq!(*log.borrow(), vec![true, false]);
    }

    #[test]
    fn test_same_handler_subscribes_once() {
        let handler = open_change_handler(None, None);
        let mut dialog = DialogShell::new("t");
        dialog.on_open_change(Rc::clone(&handler));
        dialog.on_open_change(Rc::clone(&handler));
        assert_eq!(dialog.subscription_count(), 1);
        dialog.on_open_change(open_change_handler(None, None));
        assert_eq!(dialog.subscription_count(), 2);
    }

    #[test]
    fn test_keys() {
        let mut dialog = DialogShell::new("t");
        assert!(!dialog.handle_key(press(KeyCode::Esc)));
        assert!(dialog.handle_key(press(KeyCode::Enter)));
        assert!(dialog.is_open());
        assert!(!dialog.handle_key(press(KeyCode::Down)));
        assert!(dialog.handle_key(press(KeyCode::Char('q'))));
        assert!(!dialog.is_open());
    }

    #[test]
    fn test_surface_sizing_wide_viewport() {
        let dialog = DialogShell::new("t");
        let viewport = Rect::new(0, 0, 120, 40);
        let surface = dialog.surface_rect(viewport);
        // content 108 + borders, within 120 - 4
        assert_eq!(surface.width, 110);
        assert!(surface.width <= 116);

        let content = dialog.content_rect(viewport);
        assert_eq!((content.width, content.height), (108, 31));
        assert_eq!(dialog.text_rect(viewport).width, 107);
    }

    #[test]
    fn test_surface_min_width() {
        let style = SurfaceStyle::default();
        // Narrow content still gets the minimum width.
        assert_eq!(style.surface_width(Rect::new(0, 0, 200, 40), 20), 75);
        // Viewport narrower than the minimum: full width wins over the margin.
        assert_eq!(style.surface_width(Rect::new(0, 0, 60, 40), 20), 60);
        // Max width is viewport minus margin.
        assert_eq!(style.surface_width(Rect::new(0, 0, 100, 40), 500), 96);
    }

    #[test]
    fn test_tiny_viewport_does_not_underflow() {
        let dialog = DialogShell::new("t");
        let viewport = Rect::new(0, 0, 5, 2);
        let surface = dialog.surface_rect(viewport);
        assert!(surface.width <= 5 && surface.height <= 2);
        let content = dialog.content_rect(viewport);
        assert_eq!(content.width * content.height, 0);
    }

    #[test]
    fn test_render_default_trigger_shows_tooltip() {
        let dialog = DialogShell::new("t");
        let trigger = crate::inspector::resolve_trigger(None);
        let area = Rect::new(0, 0, 100, 1);
        let mut buf = Buffer::empty(area);
        dialog.render_trigger(&trigger, area, &mut buf);
        let text: String = (0..100u16).filter_map(|x| buf.cell((x, 0u16))).map(|c| c.symbol()).collect();
        assert!(text.contains("Display debug information"), "got {text:?}");
    }
}
