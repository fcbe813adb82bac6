//! Caller-supplied inspector configuration.

use std::fmt;
use std::rc::Rc;

use crate::payload::DebugPayload;

/// Zero-argument notification callback.
pub type Callback = Rc<dyn Fn()>;

/// Inputs for one render of the inspector.
///
/// `E` is the element type used for a custom trigger; every field is
/// optional and the default renders nothing.
pub struct InspectorProps<'a, E> {
    /// Metadata to inspect. Nothing is rendered without it.
    pub debug: Option<&'a DebugPayload>,
    /// Show the loading view instead of the payload.
    pub loading: Option<bool>,
    /// Replaces the default open button.
    pub trigger: Option<E>,
    /// Fired when the dialog opens.
    pub on_open: Option<Callback>,
    /// Fired when the dialog closes.
    pub on_close: Option<Callback>,
}

impl<'a, E> InspectorProps<'a, E> {
    pub fn new(debug: Option<&'a DebugPayload>) -> Self {
        Self {
            debug,
            loading: None,
            trigger: None,
            on_open: None,
            on_close: None,
        }
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = Some(loading);
        self
    }

    pub fn trigger(mut self, trigger: E) -> Self {
        self.trigger = Some(trigger);
        self
    }

    pub fn on_open(mut self, f: impl Fn() + 'static) -> Self {
        self.on_open = Some(Rc::new(f));
        self
    }

    pub fn on_close(mut self, f: impl Fn() + 'static) -> Self {
        self.on_close = Some(Rc::new(f));
        self
    }

    /// `loading` counts only when explicitly `true`.
    pub fn is_loading(&self) -> bool {
        self.loading == Some(true)
    }
}

impl<E> Default for InspectorProps<'_, E> {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<E: Clone> Clone for InspectorProps<'_, E> {
    fn clone(&self) -> Self {
        Self {
            debug: self.debug,
            loading: self.loading,
            trigger: self.trigger.clone(),
            on_open: self.on_open.clone(),
            on_close: self.on_close.clone(),
        }
    }
}

impl<E: fmt::Debug> fmt::Debug for InspectorProps<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InspectorProps")
            .field("debug", &self.debug)
            .field("loading", &self.loading)
            .field("trigger", &self.trigger)
            .field("on_open", &self.on_open.is_some())
            .field("on_close", &self.on_close.is_some())
            .finish()
    }
}
