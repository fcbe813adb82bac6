//! Interactive viewer application state and event loop.

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{buffer::Buffer, layout::Rect, text::Line};

use super::widget::{DebugInspector, TerminalProps};
use crate::config::InspectorConfig;
use crate::payload::DebugPayload;

/// How the viewer is launched.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Where the payload came from, shown in the header.
    pub source: String,
    /// Start in the loading state.
    pub loading: bool,
    /// Text of a custom trigger replacing the default button.
    pub trigger: Option<String>,
    pub config: InspectorConfig,
}

/// Viewer state around one inspector.
pub struct InspectorApp {
    /// The payload being inspected.
    pub payload: Option<DebugPayload>,
    pub source: String,
    pub loading: bool,
    pub trigger: Option<Line<'static>>,
    pub inspector: DebugInspector,
    /// Status line, updated by the open/close callbacks.
    pub status: Rc<RefCell<String>>,
    /// Should we quit?
    pub should_quit: bool,
    on_open: Rc<dyn Fn()>,
    on_close: Rc<dyn Fn()>,
}

impl InspectorApp {
    pub fn new(payload: DebugPayload, options: RunOptions) -> Self {
        let status = Rc::new(RefCell::new(
            "Enter: open inspector  l: toggle loading  d: drop payload  q: quit".to_string(),
        ));

        let s = Rc::clone(&status);
        let on_open: Rc<dyn Fn()> = Rc::new(move || *s.borrow_mut() = "Inspector opened.".into());
        let s = Rc::clone(&status);
        let on_close: Rc<dyn Fn()> = Rc::new(move || *s.borrow_mut() = "Inspector closed.".into());

        Self {
            payload: Some(payload),
            source: options.source,
            loading: options.loading,
            trigger: options.trigger.map(Line::from),
            inspector: DebugInspector::new(options.config),
            status,
            should_quit: false,
            on_open,
            on_close,
        }
    }

    /// Props for the current frame.
    pub fn props(&self) -> TerminalProps<'_> {
        build_props(self.payload.as_ref(), self.loading, &self.trigger, &self.on_open, &self.on_close)
    }

    pub fn status(&self) -> String {
        self.status.borrow().clone()
    }

    fn set_status(&self, message: impl Into<String>) {
        *self.status.borrow_mut() = message.into();
    }

    /// Inspector first; unconsumed keys drive the viewer.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let consumed = {
            let props = build_props(self.payload.as_ref(), self.loading, &self.trigger, &self.on_open, &self.on_close);
            self.inspector.handle_key(&props, key)
        };
        if consumed {
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('l') => {
                self.loading = !self.loading;
                self.set_status(if self.loading { "Loading on." } else { "Loading off." });
            }
            KeyCode::Char('d') => {
                self.payload = None;
                self.set_status("Payload dropped; inspector hidden.");
            }
            _ => {}
        }
    }

    /// Draw the inspector into `area`. Returns `false` when it shows nothing.
    pub fn render(&mut self, area: Rect, buf: &mut Buffer) -> bool {
        let props = build_props(self.payload.as_ref(), self.loading, &self.trigger, &self.on_open, &self.on_close);
        self.inspector.render(&props, area, buf)
    }

    /// Advance time-driven state.
    pub fn tick(&mut self) {
        self.inspector.tick();
    }
}

fn build_props<'a>(
    payload: Option<&'a DebugPayload>,
    loading: bool,
    trigger: &Option<Line<'static>>,
    on_open: &Rc<dyn Fn()>,
    on_close: &Rc<dyn Fn()>,
) -> TerminalProps<'a> {
    TerminalProps {
        debug: payload,
        loading: Some(loading),
        trigger: trigger.clone(),
        on_open: Some(Rc::clone(on_open)),
        on_close: Some(Rc::clone(on_close)),
    }
}

/// Run the interactive viewer on a payload.
pub fn run_inspector(payload: DebugPayload, options: RunOptions) -> std::io::Result<()> {
    use crossterm::{
        event::{self, Event},
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
        ExecutableCommand,
    };
    use ratatui::{backend::CrosstermBackend, Terminal};
    use std::io::stdout;

    let tick = options.config.tick();

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = InspectorApp::new(payload, options);
    tracing::info!(source = %app.source, "inspector started");

    let result = (|| -> std::io::Result<()> {
        while !app.should_quit {
            terminal.draw(|frame| super::ui::draw(frame, &mut app))?;

            if event::poll(tick)? {
                if let Event::Key(key) = event::read()? {
                    app.handle_key(key);
                }
            }
            app.tick();
        }
        Ok(())
    })();

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use serde_json::json;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> InspectorApp {
        let payload = DebugPayload::from_value(json!({"model": "gpt"}));
        InspectorApp::new(payload, RunOptions::default())
    }

    #[test]
    fn test_callbacks_update_status() {
        let mut app = app();
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.status(), "Inspector opened.");
        app.handle_key(press(KeyCode::Char('q')));
        assert_eq!(app.status(), "Inspector closed.");
        assert!(!app.should_quit);
        app.handle_key(press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_loading_toggle_and_drop() {
        let mut app = app();
        app.handle_key(press(KeyCode::Char('l')));
        assert!(app.loading);
        app.handle_key(press(KeyCode::Char('d')));
        assert!(app.payload.is_none());
        assert!(app.props().debug.is_none());
    }

    #[test]
    fn test_render_hides_after_drop() {
        let mut app = app();
        let area = Rect::new(0, 0, 80, 20);
        assert!(app.render(area, &mut Buffer::empty(area)));
        app.handle_key(press(KeyCode::Char('d')));
        assert!(!app.render(area, &mut Buffer::empty(area)));
    }

    #[test]
    fn test_custom_trigger_from_options() {
        let payload = DebugPayload::new();
        let options = RunOptions { trigger: Some("[why?]".into()), ..RunOptions::default() };
        let app = InspectorApp::new(payload, options);
        assert_eq!(app.props().trigger, Some(Line::from("[why?]")));
    }
}
