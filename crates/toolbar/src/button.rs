//! Toolbar button view.

use common::{Color, UiResult};

use crate::action::{ActionExecutor, ActionId, ActionSpec, Trigger};
use crate::content::PageState;
use crate::icon::{Icon, IconResolver};

/// Sizing assigned to each composed button, so the slot distributes
/// space evenly regardless of count.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonLayout {
    /// Distribution weight within the slot.
    pub weight: f32,
    /// Wrap content instead of a fixed extent.
    pub wrap_content: bool,
}

impl Default for ButtonLayout {
    fn default() -> Self {
        Self {
            weight: 1.0,
            wrap_content: true,
        }
    }
}

/// A live toolbar button bound to exactly one action spec.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionButton {
    /// Bound action spec.
    spec: ActionSpec,
    /// Spec-resolved icon.
    icon: Icon,
    /// Transient icon override (e.g. a temporary loading icon).
    icon_override: Option<Icon>,
    /// Applied tint, if any.
    tint: Option<Color>,
    /// Assigned sizing.
    layout: ButtonLayout,
}

impl ActionButton {
    /// Create a button bound to a spec.
    pub fn new(spec: ActionSpec, layout: ButtonLayout) -> Self {
        Self {
            icon: Icon::placeholder(),
            icon_override: None,
            tint: None,
            spec,
            layout,
        }
    }

    pub fn action_id(&self) -> ActionId {
        self.spec.id
    }

    pub fn spec(&self) -> &ActionSpec {
        &self.spec
    }

    /// The icon currently shown: the override if one is set, otherwise
    /// the spec-resolved icon.
    pub fn icon(&self) -> &Icon {
        self.icon_override.as_ref().unwrap_or(&self.icon)
    }

    /// Set a transient icon override.
    pub fn set_icon(&mut self, icon: Icon) {
        self.icon_override = Some(icon);
    }

    /// Restore the spec-defined default icon, discarding any override.
    pub fn reset_icon(&mut self, icons: &dyn IconResolver) {
        self.icon = icons.resolve(&self.spec.icon);
        self.icon_override = None;
    }

    /// Refresh the icon for the current page state. Overrides are left
    /// in place.
    pub fn refresh_icon(&mut self, icons: &dyn IconResolver, state: &PageState) {
        self.icon = icons.resolve_for_state(&self.spec.icon, state);
    }

    pub fn set_tint(&mut self, color: Color) {
        self.tint = Some(color);
    }

    pub fn clear_tint(&mut self) {
        self.tint = None;
    }

    pub fn tint(&self) -> Option<Color> {
        self.tint
    }

    pub fn layout(&self) -> ButtonLayout {
        self.layout
    }

    /// Delegate a tap to the action-execution service.
    pub fn tap(&self, executor: &mut dyn ActionExecutor) {
        executor.invoke(self.spec.id, Trigger::Tap);
    }

    /// Delegate a swipe to the secondary bound action.
    pub fn swipe(&self, executor: &mut dyn ActionExecutor) {
        executor.invoke_secondary(self.spec.id, Trigger::Swipe);
    }
}

/// Strategy for inflating a button view for a spec.
///
/// Hosts supply their own implementation to control how button views
/// are built; the composer only orders, binds, and themes them.
pub trait ButtonFactory {
    fn inflate_button(&mut self, spec: &ActionSpec) -> UiResult<ActionButton>;
}

/// Inflates equal-weight, wrap-content buttons.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultButtonFactory;

impl ButtonFactory for DefaultButtonFactory {
    fn inflate_button(&mut self, spec: &ActionSpec) -> UiResult<ActionButton> {
        Ok(ActionButton::new(spec.clone(), ButtonLayout::default()))
    }
}
