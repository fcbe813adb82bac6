//! The affordance that opens the dialog.

/// Tooltip on the default trigger button.
pub const DEFAULT_TOOLTIP: &str = "Display debug information to indicate how this content was created.";

/// Glyph of the default info icon.
pub const INFO_ICON: &str = "ⓘ";

/// How a tooltip relates to the element it wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipRelationship {
    /// The tooltip text is the element's accessible label.
    Label,
    /// The tooltip only adds supplementary description.
    Description,
}

/// Small, subtle icon button wrapped in a labelling tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultTrigger {
    pub icon: &'static str,
    pub tooltip: &'static str,
    pub relationship: TooltipRelationship,
}

impl DefaultTrigger {
    /// Accessible name of the button.
    pub fn accessible_label(&self) -> Option<&'static str> {
        match self.relationship {
            TooltipRelationship::Label => Some(self.tooltip),
            TooltipRelationship::Description => None,
        }
    }
}

impl Default for DefaultTrigger {
    fn default() -> Self {
        Self {
            icon: INFO_ICON,
            tooltip: DEFAULT_TOOLTIP,
            relationship: TooltipRelationship::Label,
        }
    }
}

/// The trigger the dialog is built with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedTrigger<E> {
    /// Caller's element, used verbatim.
    Custom(E),
    Default(DefaultTrigger),
}

/// Use the caller's trigger when given, else the default button.
pub fn resolve_trigger<E>(custom: Option<E>) -> ResolvedTrigger<E> {
    match custom {
        Some(element) => ResolvedTrigger::Custom(element),
        None => ResolvedTrigger::Default(DefaultTrigger::default()),
    }
}
