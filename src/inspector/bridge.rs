//! Bridging the dialog's open-change event to the caller's callbacks.

use std::rc::Rc;

use super::props::Callback;

/// Handler the dialog shell calls with the new open state.
pub type OpenChangeHandler = Rc<dyn Fn(bool)>;

/// Build a handler that fires `on_open` when opened, else `on_close`.
///
/// Exactly one callback runs per transition; a missing callback is a no-op.
pub fn open_change_handler(on_open: Option<Callback>, on_close: Option<Callback>) -> OpenChangeHandler {
    Rc::new(move |open: bool| {
        tracing::debug!(open, "debug inspector open state changed");
        if open {
            if let Some(f) = &on_open {
                f();
            }
            return;
        }
        if let Some(f) = &on_close {
            f();
        }
    })
}

/// Keeps the same handler across renders while the callbacks are unchanged.
///
/// Callbacks are compared by identity, not by behavior.
#[derive(Default)]
pub struct OpenChangeMemo {
    deps: Option<(Option<Callback>, Option<Callback>)>,
    handler: Option<OpenChangeHandler>,
}

impl OpenChangeMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handler for these callbacks, reused when neither changed.
    pub fn handler(&mut self, on_open: Option<&Callback>, on_close: Option<&Callback>) -> OpenChangeHandler {
        if let (Some((prev_open, prev_close)), Some(handler)) = (&self.deps, &self.handler) {
            if same_callback(prev_open.as_ref(), on_open) && same_callback(prev_close.as_ref(), on_close) {
                return Rc::clone(handler);
            }
        }

        let on_open = on_open.cloned();
        let on_close = on_close.cloned();
        let handler = open_change_handler(on_open.clone(), on_close.clone());
        self.deps = Some((on_open, on_close));
        self.handler = Some(Rc::clone(&handler));
        handler
    }
}

fn same_callback(a: Option<&Callback>, b: Option<&Callback>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Rc::as_ptr(a) as *const () == Rc::as_ptr(b) as *const (),
        _ => false,
    }
}
